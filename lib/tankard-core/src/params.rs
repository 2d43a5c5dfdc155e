//! The encoded parameter set.

use bytes::Bytes;

use crate::Result;

/// Flat string-keyed parameter set, destined for a query string or an
/// `application/x-www-form-urlencoded` body.
///
/// Keys keep their insertion order and hold at most one value each: setting an
/// existing key replaces its value in place (last write wins). Two encodes of
/// the same record therefore produce identical, deterministic sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    pairs: Vec<(String, String)>,
}

impl ParamSet {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set a parameter, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Get the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the set, returning its pairs in insertion order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Serialize to a percent-encoded query string (without leading `?`).
    ///
    /// # Errors
    ///
    /// Returns an error if form serialization fails.
    ///
    /// # Example
    ///
    /// ```
    /// use tankard_core::ParamSet;
    ///
    /// let mut params = ParamSet::new();
    /// params.set("abv", "8");
    /// params.set("name", "pale ale");
    /// let query = params.to_query_string().expect("serialize");
    /// assert_eq!(query, "abv=8&name=pale+ale");
    /// ```
    pub fn to_query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.pairs).map_err(Into::into)
    }

    /// Serialize to `application/x-www-form-urlencoded` body bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if form serialization fails.
    pub fn to_form_body(&self) -> Result<Bytes> {
        self.to_query_string()
            .map(|query| Bytes::from(query.into_bytes()))
    }
}

impl IntoIterator for ParamSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl Extend<(String, String)> for ParamSet {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl FromIterator<(String, String)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}
