//! Style registry mapping symbolic names to CSS text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::StylesheetError;

/// A collection of named CSS declarations.
///
/// Names map to literal CSS text such as `"color:red"`. Resolving a name that
/// has no mapping returns the name unchanged, which lets an inline declaration
/// stand in anywhere a name is accepted.
///
/// # Example
///
/// ```rust
/// use tagcraft::StyleRegistry;
///
/// let styles = StyleRegistry::new()
///     .add("danger", "color:red")
///     .add("centered", "text-align:center");
///
/// assert_eq!(styles.resolve("danger"), "color:red");
/// assert_eq!(styles.resolve("font-weight:bold"), "font-weight:bold");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRegistry {
    aliases: HashMap<String, String>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Adds a named style, returning the updated registry for chaining.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Maps `name` to `value`, replacing any earlier mapping.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(previous) = self.aliases.insert(name.clone(), value) {
            tracing::debug!(style = %name, %previous, "style alias overwritten");
        }
    }

    /// Returns the mapped value for `expression`, or `expression` itself when unmapped.
    pub fn resolve(&self, expression: &str) -> String {
        match self.aliases.get(expression) {
            Some(value) => value.clone(),
            None => {
                tracing::trace!(%expression, "no style alias, using expression verbatim");
                expression.to_string()
            }
        }
    }

    /// Resolves every item in order.
    pub fn resolve_all<I, S>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| self.resolve(item.as_ref()))
            .collect()
    }

    /// Returns the mapped value without the pass-through fallback.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Returns true if a mapping exists for `name`.
    pub fn has(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Returns the number of mappings.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if the registry has no mappings.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Returns the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Copies every mapping of `other` into this registry. Entries from `other` win.
    pub fn merge(&mut self, other: &StyleRegistry) {
        for (name, value) in &other.aliases {
            self.set(name.clone(), value.clone());
        }
    }

    /// Parses a flat YAML mapping of `name: css`.
    ///
    /// ```rust
    /// use tagcraft::StyleRegistry;
    ///
    /// let styles =
    ///     StyleRegistry::from_yaml("header: 'font-weight:bold'\nmuted: 'color:#888'\n").unwrap();
    /// assert_eq!(styles.resolve("muted"), "color:#888");
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let registry: StyleRegistry = serde_yaml::from_str(source)?;
        tracing::debug!(styles = registry.len(), "loaded YAML stylesheet");
        Ok(registry)
    }

    /// Parses a flat JSON object of `"name": "css"`.
    pub fn from_json(source: &str) -> Result<Self, StylesheetError> {
        let registry: StyleRegistry = serde_json::from_str(source)?;
        tracing::debug!(styles = registry.len(), "loaded JSON stylesheet");
        Ok(registry)
    }
}

impl<K, V> FromIterator<(K, V)> for StyleRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut registry = StyleRegistry::new();
        registry.extend(iter);
        registry
    }
}

impl<K, V> Extend<(K, V)> for StyleRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered() {
        let styles = StyleRegistry::new().add("red", "color:red");
        assert_eq!(styles.resolve("red"), "color:red");
    }

    #[test]
    fn test_resolve_unregistered_passes_through() {
        let styles = StyleRegistry::new();
        assert_eq!(styles.resolve("margin:0"), "margin:0");
        assert_eq!(styles.resolve(""), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut styles = StyleRegistry::new();
        styles.set("accent", "color:blue");
        styles.set("accent", "color:teal");
        assert_eq!(styles.resolve("accent"), "color:teal");
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut styles = StyleRegistry::new();
        styles.set("a", "b");
        let once = styles.clone();
        styles.set("a", "b");
        assert_eq!(styles, once);
    }

    #[test]
    fn test_resolve_all_keeps_order() {
        let styles = StyleRegistry::new().add("a", "x:1").add("c", "z:3");
        assert_eq!(styles.resolve_all(["c", "b", "a"]), vec!["z:3", "b", "x:1"]);
    }

    #[test]
    fn test_get_has_no_fallback() {
        let styles = StyleRegistry::new().add("bold", "font-weight:bold");
        assert_eq!(styles.get("bold"), Some("font-weight:bold"));
        assert_eq!(styles.get("italic"), None);
        assert!(styles.has("bold"));
        assert!(!styles.has("italic"));
    }

    #[test]
    fn test_default_is_empty() {
        let styles = StyleRegistry::default();
        assert!(styles.is_empty());
        assert_eq!(styles.names().count(), 0);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = StyleRegistry::new().add("a", "1").add("b", "2");
        let overrides = StyleRegistry::new().add("b", "20").add("c", "30");
        base.merge(&overrides);

        assert_eq!(base.resolve("a"), "1");
        assert_eq!(base.resolve("b"), "20");
        assert_eq!(base.resolve("c"), "30");
    }

    #[test]
    fn test_from_iter() {
        let styles: StyleRegistry = [("muted", "color:#888"), ("wide", "width:100%")]
            .into_iter()
            .collect();
        let mut names: Vec<&str> = styles.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["muted", "wide"]);
    }

    #[test]
    fn test_from_yaml() {
        let styles = StyleRegistry::from_yaml(
            "header: \"font-weight:bold;font-size:14px\"\nmuted: \"color:#888\"\n",
        )
        .unwrap();
        assert_eq!(styles.resolve("header"), "font-weight:bold;font-size:14px");
        assert_eq!(styles.resolve("muted"), "color:#888");
    }

    #[test]
    fn test_from_yaml_rejects_nested_values() {
        let result = StyleRegistry::from_yaml("header:\n  color: red\n");
        assert!(matches!(result, Err(StylesheetError::Yaml(_))));
    }

    #[test]
    fn test_from_json() {
        let styles = StyleRegistry::from_json(r#"{"red": "color:red"}"#).unwrap();
        assert_eq!(styles.resolve("red"), "color:red");
    }

    #[test]
    fn test_from_json_invalid() {
        let result = StyleRegistry::from_json(r#"["red"]"#);
        assert!(matches!(result, Err(StylesheetError::Json(_))));
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let styles = StyleRegistry::new().add("red", "color:red");
        let json = serde_json::to_string(&styles).unwrap();
        assert_eq!(json, r#"{"red":"color:red"}"#);
    }
}
