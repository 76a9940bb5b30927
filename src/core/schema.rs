//! Canonical front matter keys
//!
//! The order of [`CANONICAL_KEYS`] is the output order. Each entry says
//! what to do when the key is missing and how a present value is coerced.

/// Separator emitted between canonical keys and commented-out unknown keys
pub const SEPARATOR: &str = "####################";

/// Policy applied when a canonical key is absent from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Emit nothing
    Skip,
    /// Emit a fixed boolean
    Bool(bool),
    /// Emit the current time at the fixed `+09:00` offset
    Timestamp,
    /// Copy a legacy key into a single-entry mapping, or skip if missing
    Legacy {
        legacy_key: &'static str,
        sub_key: &'static str,
    },
}

/// Coercion applied to a value that is present in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    None,
    /// Wrap a plain string as `{sub_key: string}`
    WrapString { sub_key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalKey {
    pub name: &'static str,
    pub default: DefaultPolicy,
    pub coercion: Coercion,
}

impl CanonicalKey {
    const fn new(name: &'static str, default: DefaultPolicy, coercion: Coercion) -> Self {
        Self {
            name,
            default,
            coercion,
        }
    }
}

pub const CANONICAL_KEYS: [CanonicalKey; 7] = [
    CanonicalKey::new("draft", DefaultPolicy::Bool(false), Coercion::None),
    CanonicalKey::new("date", DefaultPolicy::Skip, Coercion::None),
    CanonicalKey::new("lastmod", DefaultPolicy::Timestamp, Coercion::None),
    CanonicalKey::new(
        "cover",
        DefaultPolicy::Legacy {
            legacy_key: "image",
            sub_key: "image",
        },
        Coercion::WrapString { sub_key: "image" },
    ),
    CanonicalKey::new("title", DefaultPolicy::Skip, Coercion::None),
    CanonicalKey::new("categories", DefaultPolicy::Skip, Coercion::None),
    CanonicalKey::new("tags", DefaultPolicy::Skip, Coercion::None),
];

/// Whether `key` has a fixed position in the output
pub fn is_canonical(key: &str) -> bool {
    lookup(key).is_some()
}

/// Find the table entry for `key`
pub fn lookup(key: &str) -> Option<&'static CanonicalKey> {
    CANONICAL_KEYS.iter().find(|k| k.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = CANONICAL_KEYS.iter().map(|k| k.name).collect();
        assert_eq!(
            names,
            vec!["draft", "date", "lastmod", "cover", "title", "categories", "tags"]
        );
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(lookup("draft").unwrap().default, DefaultPolicy::Bool(false));
        assert_eq!(lookup("lastmod").unwrap().default, DefaultPolicy::Timestamp);
        assert!(matches!(
            lookup("cover").unwrap().default,
            DefaultPolicy::Legacy { legacy_key: "image", .. }
        ));
        for key in ["date", "title", "categories", "tags"] {
            assert_eq!(lookup(key).unwrap().default, DefaultPolicy::Skip, "{key}");
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("tags"));
        assert!(!is_canonical("image"));
        assert!(!is_canonical("showToc"));
        assert!(lookup("Title").is_none());
    }
}
