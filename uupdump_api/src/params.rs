//! Query parameters sent with a request.

use url::Url;

/// A single query-parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    /// `true` is sent as `"1"`; `false` means "not requested" and is dropped.
    Flag(bool),
    /// Never sent.
    Unset,
}

impl ParamValue {
    /// The wire form of this value, or `None` if it must be left out.
    pub fn serialize(&self) -> Option<String> {
        match self {
            ParamValue::Text(text) => Some(text.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Flag(true) => Some("1".to_string()),
            ParamValue::Flag(false) | ParamValue::Unset => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Unset, Into::into)
    }
}

/// Ordered query parameters. Values that serialize to nothing are dropped on
/// insertion, so everything held here is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`, replacing any earlier value for it. Unset values are skipped.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        let Some(value) = value.into().serialize() else {
            return;
        };
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
        url
    }
}

/// Renders as `key=value, key=value`, in insertion order.
impl std::fmt::Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key.as_ref(), value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_are_dropped() {
        let params = Params::new()
            .with("search", None::<String>)
            .with("sortByDate", false)
            .with("explicit", ParamValue::Unset);
        assert!(params.is_empty());
    }

    #[test]
    fn explicit_falsy_values_are_kept() {
        let params = Params::new()
            .with("minor", 0i64)
            .with("search", "")
            .with("requestType", Some(0u32));
        assert_eq!(params.get("minor"), Some("0"));
        assert_eq!(params.get("search"), Some(""));
        assert_eq!(params.get("requestType"), Some("0"));
    }

    #[test]
    fn true_flag_serializes_as_one() {
        let params = Params::new().with("cacheRequests", true);
        assert_eq!(params.get("cacheRequests"), Some("1"));
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let params = Params::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "3");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn add_to_url_encodes_pairs() {
        let url = Url::parse("https://example.com/listid.php").unwrap();
        let params = Params::new().with("search", "Windows 11").with("sortByDate", true);
        insta::assert_snapshot!(
            params.add_to_url(&url).to_string(),
            @"https://example.com/listid.php?search=Windows+11&sortByDate=1"
        );
    }

    #[test]
    fn empty_params_leave_url_untouched() {
        let url = Url::parse("https://example.com/api_version.php").unwrap();
        assert_eq!(Params::new().add_to_url(&url).as_str(), url.as_str());
    }

    #[test]
    fn display_lists_pairs_in_order() {
        let params = Params::new()
            .with("arch", "arm64")
            .with("minor", 0i64)
            .with("cacheRequests", true);
        assert_eq!(params.to_string(), "arch=arm64, minor=0, cacheRequests=1");
        assert_eq!(Params::new().to_string(), "");
    }

    #[test]
    fn collect_from_pairs() {
        let params: Params = [("id", Some("abc")), ("pack", None)].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert!(params.contains("id"));
        assert!(!params.contains("pack"));
    }
}
