//! Shared query infrastructure: the [`Query`] trait and [`RequestType`].

use url::Url;

use crate::params::Params;

/// Trait implemented by all endpoint query builders. Each builder knows its
/// endpoint path and which of its fields end up in the query string.
pub trait Query {
    /// Endpoint path relative to the API base URL.
    const PATH: &'static str;

    /// Builds the query parameters, leaving out every unset optional field.
    fn to_params(&self) -> Params;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// How `get.php` should obtain the file list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestType {
    /// Ask Windows Update directly. This is the server default.
    #[default]
    Uncached = 0,
    /// Use a cached response when available.
    Cached = 1,
    /// Only use locally stored data.
    Offline = 2,
}

impl From<RequestType> for crate::params::ParamValue {
    fn from(value: RequestType) -> Self {
        crate::params::ParamValue::Int(value as i64)
    }
}
