use crate::params::Params;

use super::Query;

/// Query for `listid.php`: builds known to the fileinfo database.
#[derive(Clone, Debug, Default)]
pub struct ListIdQuery {
    /// Free-text search. Empty means no filter.
    pub search: String,
    pub sort_by_date: bool,
}

impl Query for ListIdQuery {
    const PATH: &'static str = "listid.php";

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if !self.search.is_empty() {
            params.insert("search", &self.search);
        }
        params.insert("sortByDate", self.sort_by_date);
        params
    }
}

impl ListIdQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_sort_by_date(mut self, sort_by_date: bool) -> Self {
        self.sort_by_date = sort_by_date;
        self
    }
}
