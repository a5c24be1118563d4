use crate::params::Params;

use super::Query;

/// Query for `updateinfo.php`: stored details of one update.
#[derive(Clone, Debug, Default)]
pub struct UpdateInfoQuery {
    pub update_id: String,
    /// Return only this key of the update information.
    pub only_info: Option<String>,
    /// Leave the `files` key out of the response.
    pub ignore_files: bool,
}

impl Query for UpdateInfoQuery {
    const PATH: &'static str = "updateinfo.php";

    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("id", &self.update_id)
            .with("onlyinfo", self.only_info.as_deref());
        if self.ignore_files {
            params.insert("ignoreFiles", "true");
        }
        params
    }
}

impl UpdateInfoQuery {
    pub fn new(update_id: &str) -> Self {
        Self {
            update_id: update_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_only_info(mut self, key: &str) -> Self {
        self.only_info = Some(key.to_string());
        self
    }

    pub fn with_ignore_files(mut self, ignore_files: bool) -> Self {
        self.ignore_files = ignore_files;
        self
    }
}
