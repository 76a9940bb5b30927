//! Front matter normalization
//!
//! Renders a parsed [`FrontMatter`] as output lines: canonical keys first,
//! in table order and with defaults filled in, then [`SEPARATOR`], then
//! every other key commented out. Normalization never fails; values of an
//! unexpected shape fall back to their plain text.

use crate::core::schema::{CanonicalKey, Coercion, DefaultPolicy, CANONICAL_KEYS, SEPARATOR};
use crate::core::value::{quote, FrontMatter, FrontMatterValue};
use chrono::{DateTime, Duration, Utc};

/// Key whose value is always written as a double-quoted string
pub const TITLE_KEY: &str = "title";

/// Prefix that disables a line inside the front matter block
pub const COMMENT_PREFIX: &str = "# ";

/// Source of the current time for defaulted timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant as `YYYY-MM-DDThh:mm:ss+09:00`.
///
/// The offset is fixed regardless of the local time zone.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    (instant + Duration::hours(9))
        .format("%Y-%m-%dT%H:%M:%S+09:00")
        .to_string()
}

/// Renders front matter into canonical output lines
pub struct Normalizer {
    clock: Box<dyn Clock>,
}

impl Normalizer {
    /// Create a normalizer that stamps `lastmod` with the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a normalizer with a custom clock
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Render `fm` as output lines, without the surrounding delimiters
    pub fn normalize(&self, fm: &FrontMatter) -> Vec<String> {
        let mut lines = Vec::new();

        for key in CANONICAL_KEYS.iter() {
            if let Some(value) = self.resolve(key, fm) {
                lines.extend(render_entry(key.name, &value, false));
            }
        }

        lines.push(SEPARATOR.to_string());

        for (key, value) in fm.iter() {
            if crate::core::schema::is_canonical(key) {
                continue;
            }
            lines.extend(render_entry(key, value, true));
        }

        lines
    }

    /// Value to emit for a canonical key, or `None` to leave it out
    fn resolve(&self, key: &CanonicalKey, fm: &FrontMatter) -> Option<FrontMatterValue> {
        match fm.get(key.name) {
            Some(value) => Some(coerce(key.coercion, value)),
            None => self.default_value(key.default, fm),
        }
    }

    fn default_value(&self, policy: DefaultPolicy, fm: &FrontMatter) -> Option<FrontMatterValue> {
        match policy {
            DefaultPolicy::Skip => None,
            DefaultPolicy::Bool(b) => Some(FrontMatterValue::Bool(b)),
            DefaultPolicy::Timestamp => Some(FrontMatterValue::String(format_timestamp(
                self.clock.now(),
            ))),
            DefaultPolicy::Legacy {
                legacy_key,
                sub_key,
            } => fm
                .get(legacy_key)
                .filter(|value| !value.is_null())
                .map(|value| FrontMatterValue::single_entry(sub_key, value.to_plain_text())),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn coerce(coercion: Coercion, value: &FrontMatterValue) -> FrontMatterValue {
    match (coercion, value) {
        (Coercion::WrapString { sub_key }, FrontMatterValue::String(s)) => {
            FrontMatterValue::single_entry(sub_key, s.as_str())
        }
        _ => value.clone(),
    }
}

/// Render one key/value pair as one or more lines.
///
/// With `as_comment`, every produced line is prefixed with `# `.
pub fn render_entry(key: &str, value: &FrontMatterValue, as_comment: bool) -> Vec<String> {
    let prefix = if as_comment { COMMENT_PREFIX } else { "" };

    if key == TITLE_KEY {
        return vec![format!(
            "{}{}: {}",
            prefix,
            key,
            quote(&value.to_plain_text())
        )];
    }

    match value {
        FrontMatterValue::Bool(b) => vec![format!("{}{}: {}", prefix, key, b)],
        FrontMatterValue::Mapping(entries) => {
            let mut lines = Vec::with_capacity(entries.len() + 1);
            lines.push(format!("{}{}:", prefix, key));
            for (sub_key, sub_value) in entries {
                lines.push(format!("{}  {}: {}", prefix, sub_key, sub_value));
            }
            lines
        }
        FrontMatterValue::Null
        | FrontMatterValue::Number(_)
        | FrontMatterValue::String(_)
        | FrontMatterValue::Sequence(_) => vec![format!("{}{}: {}", prefix, key, value)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_normalizer() -> Normalizer {
        let instant = Utc.with_ymd_and_hms(2023, 9, 6, 23, 51, 4).unwrap();
        Normalizer::with_clock(FixedClock(instant))
    }

    fn parse(yaml: &str) -> FrontMatter {
        FrontMatter::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn test_format_timestamp_uses_fixed_offset() {
        let instant = Utc.with_ymd_and_hms(2023, 9, 6, 23, 51, 4).unwrap();
        assert_eq!(format_timestamp(instant), "2023-09-07T08:51:04+09:00");
    }

    #[test]
    fn test_all_canonical_keys_present() {
        let fm = parse(
            r#"tags: [python, SQLAlchemy]
title: "Lint errors"
categories: [tech]
cover:
  image: img.png
lastmod: 2023-09-07T08:51:04+09:00
date: 2023-08-16T15:36:12+09:00
draft: true"#,
        );

        assert_eq!(
            fixed_normalizer().normalize(&fm),
            vec![
                "draft: true",
                "date: 2023-08-16T15:36:12+09:00",
                "lastmod: 2023-09-07T08:51:04+09:00",
                "cover:",
                "  image: img.png",
                "title: \"Lint errors\"",
                "categories: [tech]",
                "tags: [python, SQLAlchemy]",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn test_empty_front_matter_gets_defaults_only() {
        assert_eq!(
            fixed_normalizer().normalize(&FrontMatter::new()),
            vec!["draft: false", "lastmod: 2023-09-07T08:51:04+09:00", SEPARATOR]
        );
    }

    #[test]
    fn test_draft_default() {
        let lines = fixed_normalizer().normalize(&parse("title: x"));
        assert_eq!(lines[0], "draft: false");
    }

    #[test]
    fn test_lastmod_default_uses_wall_clock() {
        let before = Utc::now();
        let lines = Normalizer::new().normalize(&parse("draft: true"));
        let after = Utc::now();

        let stamp = lines[1].strip_prefix("lastmod: ").unwrap();
        assert!(stamp.ends_with("+09:00"));
        let parsed = chrono::DateTime::parse_from_rfc3339(stamp).unwrap();
        let parsed = parsed.with_timezone(&Utc);
        assert!(parsed >= before - Duration::seconds(1));
        assert!(parsed <= after + Duration::seconds(1));
    }

    #[test]
    fn test_present_lastmod_is_kept() {
        let lines = fixed_normalizer().normalize(&parse("lastmod: 2020-01-01"));
        assert!(lines.contains(&"lastmod: 2020-01-01".to_string()));
    }

    #[test]
    fn test_cover_falls_back_to_image() {
        let lines = fixed_normalizer().normalize(&parse("image: \"x.png\""));
        assert_eq!(
            lines,
            vec![
                "draft: false",
                "lastmod: 2023-09-07T08:51:04+09:00",
                "cover:",
                "  image: x.png",
                SEPARATOR,
                "# image: x.png",
            ]
        );
    }

    #[test]
    fn test_cover_skipped_without_image() {
        let lines = fixed_normalizer().normalize(&parse("title: t"));
        assert!(!lines.iter().any(|l| l.starts_with("cover")));

        let lines = fixed_normalizer().normalize(&parse("image: ~"));
        assert!(!lines.iter().any(|l| l.starts_with("cover")));
    }

    #[test]
    fn test_cover_string_is_wrapped() {
        let n = fixed_normalizer();
        let from_string = n.normalize(&parse("cover: \"y.png\""));
        let from_map = n.normalize(&parse("cover:\n  image: y.png"));
        assert_eq!(from_string, from_map);
        assert!(from_string.contains(&"  image: y.png".to_string()));
    }

    #[test]
    fn test_title_is_quoted_and_escaped() {
        let lines = fixed_normalizer().normalize(&parse(r#"title: "A \"quoted\" title""#));
        assert!(lines.contains(&r#"title: "A \"quoted\" title""#.to_string()));
    }

    #[test]
    fn test_quote_round_trips_through_yaml() {
        for original in [
            "plain",
            "A \"quoted\" title",
            "back\\slash",
            "tab\tand\nnewline",
            "SQLAlchemy で Flake8 error: E712",
            "bell\u{7}",
        ] {
            let line = format!("title: {}", quote(original));
            let fm = FrontMatter::from_yaml_str(&line).unwrap();
            assert_eq!(fm.get("title").and_then(|v| v.as_str()), Some(original));
        }
    }

    #[test]
    fn test_non_string_title_is_quoted_text() {
        assert_eq!(
            render_entry("title", &FrontMatterValue::Number(42.into()), false),
            vec!["title: \"42\""]
        );
        assert_eq!(
            render_entry("title", &FrontMatterValue::Null, false),
            vec!["title: \"\""]
        );
    }

    #[test]
    fn test_render_each_variant() {
        assert_eq!(
            render_entry("draft", &FrontMatterValue::Bool(true), false),
            vec!["draft: true"]
        );
        assert_eq!(
            render_entry("weight", &FrontMatterValue::Number(3.into()), false),
            vec!["weight: 3"]
        );
        assert_eq!(
            render_entry("date", &FrontMatterValue::string("2023-08-16"), false),
            vec!["date: 2023-08-16"]
        );
        assert_eq!(
            render_entry("date", &FrontMatterValue::Null, false),
            vec!["date: "]
        );
        assert_eq!(
            render_entry(
                "tags",
                &FrontMatterValue::Sequence(vec!["a".into(), "b".into()]),
                false
            ),
            vec!["tags: [a, b]"]
        );
        assert_eq!(
            render_entry(
                "cover",
                &FrontMatterValue::Mapping(vec![
                    ("image".into(), "c.png".into()),
                    ("alt".into(), "Cover".into()),
                ]),
                false
            ),
            vec!["cover:", "  image: c.png", "  alt: Cover"]
        );
    }

    #[test]
    fn test_render_as_comment() {
        assert_eq!(
            render_entry("showToc", &FrontMatterValue::Bool(false), true),
            vec!["# showToc: false"]
        );
        assert_eq!(
            render_entry("author", &FrontMatterValue::single_entry("name", "Ann"), true),
            vec!["# author:", "#   name: Ann"]
        );
    }

    #[test]
    fn test_unknown_keys_follow_separator() {
        let lines = fixed_normalizer().normalize(&parse("foo: bar\ndraft: true\nshowToc: false"));
        let sep = lines.iter().position(|l| l == SEPARATOR).unwrap();

        let mut tail: Vec<_> = lines[sep + 1..].to_vec();
        tail.sort();
        assert_eq!(tail, vec!["# foo: bar", "# showToc: false"]);
        assert!(lines[..sep].iter().all(|l| !l.starts_with('#')));
    }

    #[test]
    fn test_mistyped_values_degrade_to_text() {
        let lines = fixed_normalizer().normalize(&parse("draft: \"yes\"\ntags: single"));
        assert_eq!(lines[0], "draft: yes");
        assert!(lines.contains(&"tags: single".to_string()));
    }

    #[test]
    fn test_cover_of_other_shapes_is_not_wrapped() {
        let lines = fixed_normalizer().normalize(&parse("cover: [a.png, b.png]"));
        assert!(lines.contains(&"cover: [a.png, b.png]".to_string()));
    }

    #[test]
    fn test_present_keys_are_stable_across_runs() {
        let n = fixed_normalizer();
        let input = "draft: true\ndate: 2023-08-16\ncover: c.png\ntitle: \"Hi \\\"you\\\"\"\ncategories: [tech]\ntags: [a, b]";
        let first = n.normalize(&parse(input));
        let canonical: Vec<_> = first
            .iter()
            .take_while(|l| l.as_str() != SEPARATOR)
            .cloned()
            .collect();
        let second = n.normalize(&parse(&canonical.join("\n")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_tags_with_flow_indicators_keep_their_value() {
        let n = fixed_normalizer();
        let original = parse(
            r##"categories: ["a, b", "#rust"]
tags: ["a, b", "#rust", "key: value", ~, "[x]", "true", plain]"##,
        );
        let first = n.normalize(&original);
        assert!(first.contains(&r##"categories: ["a, b", "#rust"]"##.to_string()));
        assert!(first.contains(
            &r##"tags: ["a, b", "#rust", "key: value", ~, "[x]", "true", plain]"##.to_string()
        ));

        let canonical: Vec<_> = first
            .iter()
            .take_while(|l| l.as_str() != SEPARATOR)
            .cloned()
            .collect();
        let reparsed = parse(&canonical.join("\n"));
        for key in ["categories", "tags"] {
            assert_eq!(reparsed.get(key), original.get(key), "{key}");
        }
        assert_eq!(n.normalize(&reparsed), first);
    }
}
