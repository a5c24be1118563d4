use crate::params::Params;

use super::Query;

/// Query for `fetchupd.php`: asks Windows Update for the latest build of a
/// channel. Every field except `cache_requests` is always sent.
#[derive(Clone, Debug)]
pub struct FetchUpdateQuery {
    pub arch: String,
    pub ring: String,
    pub flight: String,
    /// Major build number, or `major.minor`.
    pub build: String,
    /// Ignored by the server when `build` already has a minor part.
    pub minor: u32,
    pub sku: u32,
    /// Release type for WCOS builds.
    pub release_type: String,
    pub cache_requests: bool,
}

impl Default for FetchUpdateQuery {
    fn default() -> Self {
        Self {
            arch: "amd64".to_string(),
            ring: "Retail".to_string(),
            flight: "Mainline".to_string(),
            build: "22621".to_string(),
            minor: 0,
            sku: 48,
            release_type: "Production".to_string(),
            cache_requests: false,
        }
    }
}

impl Query for FetchUpdateQuery {
    const PATH: &'static str = "fetchupd.php";

    fn to_params(&self) -> Params {
        Params::new()
            .with("arch", &self.arch)
            .with("ring", &self.ring)
            .with("flight", &self.flight)
            .with("build", &self.build)
            .with("minor", self.minor)
            .with("sku", self.sku)
            .with("type", &self.release_type)
            .with("cacheRequests", self.cache_requests)
    }
}

impl FetchUpdateQuery {
    pub fn with_arch(mut self, arch: &str) -> Self {
        self.arch = arch.to_string();
        self
    }

    pub fn with_ring(mut self, ring: &str) -> Self {
        self.ring = ring.to_string();
        self
    }

    pub fn with_flight(mut self, flight: &str) -> Self {
        self.flight = flight.to_string();
        self
    }

    pub fn with_build(mut self, build: &str) -> Self {
        self.build = build.to_string();
        self
    }

    pub fn with_minor(mut self, minor: u32) -> Self {
        self.minor = minor;
        self
    }

    pub fn with_sku(mut self, sku: u32) -> Self {
        self.sku = sku;
        self
    }

    pub fn with_release_type(mut self, release_type: &str) -> Self {
        self.release_type = release_type.to_string();
        self
    }

    pub fn with_cache_requests(mut self, cache_requests: bool) -> Self {
        self.cache_requests = cache_requests;
        self
    }
}
