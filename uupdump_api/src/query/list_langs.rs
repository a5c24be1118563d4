use crate::params::Params;

use super::Query;

/// Query for `listlangs.php`: languages available for an update.
#[derive(Clone, Debug, Default)]
pub struct ListLangsQuery {
    pub update_id: Option<String>,
    /// Also return the full update information.
    pub return_info: bool,
}

impl Query for ListLangsQuery {
    const PATH: &'static str = "listlangs.php";

    fn to_params(&self) -> Params {
        let mut params = Params::new().with("id", self.update_id.as_deref());
        if self.return_info {
            params.insert("returnInfo", "true");
        }
        params
    }
}

impl ListLangsQuery {
    pub fn with_update_id(mut self, update_id: &str) -> Self {
        self.update_id = Some(update_id.to_string());
        self
    }

    pub fn with_return_info(mut self, return_info: bool) -> Self {
        self.return_info = return_info;
        self
    }
}
