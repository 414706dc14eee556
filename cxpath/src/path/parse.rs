//! The four-phase parser that turns text into a component model.
//!
//! Phases run in a fixed order: root-name extraction, separator culling,
//! root-directory extraction, then relative-path and filename extraction.
//! Culling happens after the root-name is removed so that grammars whose
//! root-names begin with doubled separators survive intact.

use crate::policy::PathPolicy;

/// Components and indices produced by [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub components: Vec<String>,
    pub root_name: Option<usize>,
    pub root_dir: Option<usize>,
    pub relative_start: Option<usize>,
    pub filename: Option<usize>,
}

/// Parses `text` according to `policy`.
pub(crate) fn parse(text: &str, policy: &dyn PathPolicy) -> Parsed {
    let mut parsed = Parsed::default();

    let rest = match policy.root_name_len(text) {
        Some(len) => {
            parsed.root_name = Some(0);
            parsed.components.push(text[..len].to_string());
            &text[len..]
        }
        None => text,
    };

    let culled = cull_separators(rest, policy);
    let mut rest = culled.as_str();

    if let Some(first) = rest.chars().next() {
        if policy.is_separator(first) {
            parsed.root_dir = Some(parsed.components.len());
            parsed
                .components
                .push(policy.preferred_separator().to_string());
            rest = &rest[first.len_utf8()..];
        }
    }

    let mut found_separator = false;
    while let Some(pos) = rest.find(|c| policy.is_separator(c)) {
        if !found_separator {
            parsed.relative_start = Some(parsed.components.len());
            found_separator = true;
        }
        parsed.components.push(rest[..pos].to_string());
        // culled separators are always the single-byte preferred one
        rest = &rest[pos + 1..];
    }

    let remainder = if rest.is_empty() && found_separator {
        "."
    } else {
        rest
    };

    if remainder.is_empty() {
        parsed.filename = parsed.root_dir.or(parsed.root_name);
    } else {
        parsed.filename = Some(parsed.components.len());
        parsed.components.push(remainder.to_string());
    }

    log::trace!("parsed {text:?} into {:?}", parsed.components);
    parsed
}

/// Collapses every run of separators into one preferred separator.
fn cull_separators(text: &str, policy: &dyn PathPolicy) -> String {
    let preferred = policy.preferred_separator();
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if policy.is_separator(c) {
            if !in_run {
                out.push(preferred);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Platform;

    fn posix(text: &str) -> Parsed {
        parse(text, Platform::Posix.policy())
    }

    fn strings(parsed: &Parsed) -> Vec<&str> {
        parsed.components.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_empty() {
        let p = posix("");
        assert!(p.components.is_empty());
        assert_eq!(p.filename, None);
        assert_eq!(p.root_dir, None);
        assert_eq!(p.root_name, None);
        assert_eq!(p.relative_start, None);
    }

    #[test]
    fn test_parse_root_only() {
        let p = posix("/");
        assert_eq!(strings(&p), ["/"]);
        assert_eq!(p.root_dir, Some(0));
        assert_eq!(p.filename, Some(0));
        assert_eq!(p.relative_start, None);
    }

    #[test]
    fn test_parse_absolute() {
        let p = posix("/foo/bar/quux");
        assert_eq!(strings(&p), ["/", "foo", "bar", "quux"]);
        assert_eq!(p.root_dir, Some(0));
        assert_eq!(p.relative_start, Some(1));
        assert_eq!(p.filename, Some(3));
    }

    #[test]
    fn test_parse_single_relative_component() {
        let p = posix("foo");
        assert_eq!(strings(&p), ["foo"]);
        assert_eq!(p.relative_start, None);
        assert_eq!(p.filename, Some(0));
    }

    #[test]
    fn test_parse_trailing_separator_implies_dot() {
        let p = posix("foo/bar/");
        assert_eq!(strings(&p), ["foo", "bar", "."]);
        assert_eq!(p.relative_start, Some(0));
        assert_eq!(p.filename, Some(2));
    }

    #[test]
    fn test_parse_culls_redundant_separators() {
        let p = posix("///foo///bar");
        assert_eq!(strings(&p), ["/", "foo", "bar"]);
        assert_eq!(p.root_name, None);

        let p = posix("foo\\\\bar");
        assert_eq!(strings(&p), ["foo", "bar"]);
    }

    #[test]
    fn test_parse_network_root_name() {
        let p = posix("//net");
        assert_eq!(strings(&p), ["//net"]);
        assert_eq!(p.root_name, Some(0));
        assert_eq!(p.filename, Some(0));

        let p = posix("//net//foo/bar");
        assert_eq!(strings(&p), ["//net", "/", "foo", "bar"]);
        assert_eq!(p.root_name, Some(0));
        assert_eq!(p.root_dir, Some(1));
        assert_eq!(p.relative_start, Some(2));
        assert_eq!(p.filename, Some(3));
    }

    #[test]
    fn test_parse_dots_are_components() {
        assert_eq!(strings(&posix("foo/./bar")), ["foo", ".", "bar"]);
        assert_eq!(strings(&posix("../..")), ["..", ".."]);
        assert_eq!(strings(&posix(".")), ["."]);
    }

    #[test]
    fn test_parse_windows_drive() {
        let p = parse("C:\\Users\\me", Platform::Windows.policy());
        assert_eq!(strings(&p), ["C:", "\\", "Users", "me"]);
        assert_eq!(p.root_name, Some(0));
        assert_eq!(p.root_dir, Some(1));

        let p = parse("c:/mixed//seps", Platform::Windows.policy());
        assert_eq!(strings(&p), ["c:", "\\", "mixed", "seps"]);

        let p = parse("C:foo", Platform::Windows.policy());
        assert_eq!(strings(&p), ["C:", "foo"]);
        assert_eq!(p.root_dir, None);
        assert_eq!(p.filename, Some(1));
    }

    #[test]
    fn test_cull_separators() {
        let policy = Platform::Posix.policy();
        assert_eq!(cull_separators("a//b\\/c", policy), "a/b/c");
        assert_eq!(cull_separators("", policy), "");
        assert_eq!(cull_separators("//", policy), "/");
    }
}
