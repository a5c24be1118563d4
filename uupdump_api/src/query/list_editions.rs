use crate::params::Params;

use super::Query;

/// Query for `listeditions.php`: editions available for a language.
#[derive(Clone, Debug, Default)]
pub struct ListEditionsQuery {
    /// Language in `xx-xx` form.
    pub lang: String,
    pub update_id: Option<String>,
}

impl Query for ListEditionsQuery {
    const PATH: &'static str = "listeditions.php";

    fn to_params(&self) -> Params {
        Params::new()
            .with("lang", &self.lang)
            .with("id", self.update_id.as_deref())
    }
}

impl ListEditionsQuery {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            update_id: None,
        }
    }

    pub fn with_update_id(mut self, update_id: &str) -> Self {
        self.update_id = Some(update_id.to_string());
        self
    }
}
