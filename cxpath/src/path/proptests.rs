//! Property-based tests for the lexical algebra.
//!
//! The inline property tests in `lexical.rs` cover normalization on small
//! inputs. This module runs the heavier composition laws.

use super::Path;
use crate::policy::Platform;
use proptest::prelude::*;

fn p(text: &str) -> Path {
    Path::with_platform(text, Platform::Posix)
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => name_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

// Absolute paths whose components are names and dot-dots.
fn absolute_parts_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![5 => name_strategy(), 1 => Just("..".to_string())],
        1..8,
    )
}

fn relative_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn any_text_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("/"), Just("//"), Just("//net/")],
        prop::collection::vec(component_strategy(), 0..8),
        prop_oneof![Just(""), Just("/"), Just("//")],
    )
        .prop_map(|(prefix, parts, suffix)| format!("{prefix}{}{suffix}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // lexically_normal(lexically_normal(p)) == lexically_normal(p)
    #[test]
    fn normalization_idempotent(text in any_text_strategy()) {
        let once = p(&text).lexically_normal();
        let twice = once.lexically_normal();
        prop_assert_eq!(twice, once);
    }

    // Normal forms of rooted paths never keep a dot-dot.
    #[test]
    fn rooted_normal_form_has_no_dot_dot(parts in absolute_parts_strategy()) {
        let normal = p(&format!("/{}", parts.join("/"))).lexically_normal();
        prop_assert!(normal.iter().all(|c| c != ".."));
    }

    // Rendering and re-parsing a parsed path keeps its components, apart from
    // a root-directory followed only by a dot.
    #[test]
    fn render_then_parse_is_stable(text in any_text_strategy()) {
        let path = p(&text);
        let lossy = path.root_dir.is_some()
            && path.relative_start.is_none()
            && path.len() > 1
            && path.get(path.len() - 1) == Some(".");
        prop_assume!(!lossy);
        prop_assert_eq!(p(&path.to_string()), path);
    }

    // The relative part of p / q starts with the relative part of p.
    #[test]
    fn composition_extends_relative_path(
        lhs in relative_text_strategy(),
        rooted in prop::bool::ANY,
        rhs in relative_text_strategy(),
    ) {
        let lhs = if rooted { format!("/{lhs}") } else { lhs };
        let left = p(&lhs);
        prop_assume!(left.filename().to_string() != ".");
        let joined = left.join(&p(&rhs)).unwrap();
        let prefix = left.relative_path();
        let relative = joined.relative_path();
        prop_assert!(relative.components().starts_with(prefix.components()));
    }

    // Re-anchoring p relative to one of its prefixes gives back p.
    #[test]
    fn relative_then_absolute_restores_path(
        parts in absolute_parts_strategy(),
        cut in 0usize..8,
    ) {
        let path = p(&format!("/{}", parts.join("/")));
        let keep = cut.min(parts.len());
        let base = p(&format!("/{}", parts[..keep].join("/")));

        let relative = path.lexically_relative(&base);
        let restored = relative.lexically_absolute(&base).unwrap();
        prop_assert_eq!(restored.lexically_normal(), path.lexically_normal());
    }

    // Append never fails without two root-names.
    #[test]
    fn append_without_root_names_succeeds(
        lhs in relative_text_strategy(),
        rhs in relative_text_strategy(),
    ) {
        prop_assert!(p(&lhs).join(&p(&rhs)).is_ok());
    }
}
