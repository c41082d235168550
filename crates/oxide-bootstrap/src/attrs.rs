//! Caller-supplied HTML attributes.

/// Extra attributes merged into a helper's element.
///
/// Insertion order is kept so rendered markup is stable. Setting a key
/// that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
    attrs: Vec<(String, String)>,
}

impl HtmlAttrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the attribute is set.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over all attributes except `class`.
    ///
    /// Helpers compose `class` themselves and append the caller's value.
    pub fn without_class(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| *k != "class")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for HtmlAttrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = HtmlAttrs::new().with("id", "a").with("title", "t");
        attrs.set("id", "b");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("id", "b"), ("title", "t")]);
    }

    #[test]
    fn test_without_class() {
        let attrs: HtmlAttrs = [("class", "shadow"), ("data-id", "7")].into_iter().collect();
        assert_eq!(attrs.get("class"), Some("shadow"));
        let rest: Vec<_> = attrs.without_class().collect();
        assert_eq!(rest, vec![("data-id", "7")]);
    }
}
