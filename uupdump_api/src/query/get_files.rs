use crate::params::Params;

use super::{Query, RequestType};

/// Query for `get.php`: the file list of an update.
#[derive(Clone, Debug, Default)]
pub struct GetFilesQuery {
    pub update_id: String,
    /// Language in `xx-xx` form.
    pub pack: Option<String>,
    /// Edition name. The server only honours it together with `pack`.
    pub edition: Option<String>,
    pub request_type: Option<RequestType>,
}

impl Query for GetFilesQuery {
    const PATH: &'static str = "get.php";

    fn to_params(&self) -> Params {
        Params::new()
            .with("id", &self.update_id)
            .with("pack", self.pack.as_deref())
            .with("edition", self.edition.as_deref())
            .with("requestType", self.request_type)
    }
}

impl GetFilesQuery {
    pub fn new(update_id: &str) -> Self {
        Self {
            update_id: update_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_pack(mut self, pack: &str) -> Self {
        self.pack = Some(pack.to_string());
        self
    }

    pub fn with_edition(mut self, edition: &str) -> Self {
        self.edition = Some(edition.to_string());
        self
    }

    pub fn with_request_type(mut self, request_type: RequestType) -> Self {
        self.request_type = Some(request_type);
        self
    }
}
