use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Default adapter name when none is configured.
pub const DEFAULT_ADAPTER_NAME: &str = "test";

/// The `"<name>.<instance>"` prefix that scopes an adapter's local
/// identifiers.
///
/// A namespace is computed once when an adapter is constructed. Local
/// identifiers are qualified against it with [`Namespace::qualify`];
/// foreign identifiers are used as-is.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace {
    full: String,
    name_len: usize,
    instance: u32,
}

impl Namespace {
    /// Build the namespace for adapter `name`, instance `instance`.
    pub fn new(name: &str, instance: u32) -> Self {
        Self {
            full: format!("{name}.{instance}"),
            name_len: name.len(),
            instance,
        }
    }

    /// The full `"<name>.<instance>"` string.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Adapter name part.
    pub fn name(&self) -> &str {
        &self.full[..self.name_len]
    }

    /// Instance number part.
    pub fn instance(&self) -> u32 {
        self.instance
    }

    /// Whether `id` already starts with this namespace.
    ///
    /// This is a plain prefix test: `"test.01.x"` counts as owned by
    /// `"test.0"`.
    pub fn owns(&self, id: &str) -> bool {
        id.starts_with(self.full.as_str())
    }

    /// Qualify a local identifier.
    ///
    /// Returns `id` unchanged if it already starts with the namespace,
    /// otherwise `"<namespace>.<id>"`.
    pub fn qualify(&self, id: &str) -> String {
        if self.owns(id) {
            id.to_string()
        } else {
            format!("{}.{id}", self.full)
        }
    }

    /// Wildcard pattern matching every identifier under this namespace.
    pub fn wildcard(&self) -> String {
        format!("{}.*", self.full)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_ADAPTER_NAME, 0)
    }
}

impl FromStr for Namespace {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, instance) = s
            .rsplit_once('.')
            .ok_or_else(|| TypeError::InvalidNamespace(s.to_string()))?;
        if name.is_empty() {
            return Err(TypeError::InvalidNamespace(s.to_string()));
        }
        let instance = instance
            .parse::<u32>()
            .map_err(|_| TypeError::InvalidNamespace(s.to_string()))?;
        Ok(Self::new(name, instance))
    }
}

impl TryFrom<String> for Namespace {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.full
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.full)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_test_zero() {
        let ns = Namespace::default();
        assert_eq!(ns.as_str(), "test.0");
        assert_eq!(ns.name(), "test");
        assert_eq!(ns.instance(), 0);
    }

    #[test]
    fn qualify_prefixes_local_ids() {
        let ns = Namespace::new("hue", 2);
        assert_eq!(ns.qualify("lights.kitchen"), "hue.2.lights.kitchen");
    }

    #[test]
    fn qualify_keeps_namespaced_ids() {
        let ns = Namespace::new("hue", 2);
        assert_eq!(ns.qualify("hue.2.lights.kitchen"), "hue.2.lights.kitchen");
    }

    #[test]
    fn owns_is_a_plain_prefix_test() {
        let ns = Namespace::new("test", 0);
        assert!(ns.owns("test.01.foo"));
        assert!(!ns.owns("other.0.foo"));
    }

    #[test]
    fn wildcard_covers_namespace() {
        assert_eq!(Namespace::new("zwave", 1).wildcard(), "zwave.1.*");
    }

    #[test]
    fn parse_accepts_dotted_names() {
        let ns: Namespace = "my.adapter.3".parse().unwrap();
        assert_eq!(ns.name(), "my.adapter");
        assert_eq!(ns.instance(), 3);
    }

    #[test]
    fn parse_rejects_missing_instance() {
        assert!("test".parse::<Namespace>().is_err());
        assert!("test.x".parse::<Namespace>().is_err());
        assert!(".0".parse::<Namespace>().is_err());
    }

    #[test]
    fn serde_uses_plain_string() {
        let ns = Namespace::new("sonos", 4);
        let json = serde_json::to_string(&ns).unwrap();
        assert_eq!(json, "\"sonos.4\"");
        let parsed: Namespace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ns);
    }

    proptest! {
        #[test]
        fn qualify_is_idempotent(id in "[a-zA-Z0-9_.]{0,24}") {
            let ns = Namespace::new("test", 0);
            let once = ns.qualify(&id);
            prop_assert_eq!(ns.qualify(&once), once.clone());
            prop_assert!(ns.owns(&once));
        }

        #[test]
        fn qualify_prefixes_exactly_once(id in "[a-z][a-z0-9_]{0,16}") {
            let ns = Namespace::new("zz", 7);
            prop_assert_eq!(ns.qualify(&id), format!("zz.7.{id}"));
        }
    }
}
