//! Output formatter implementations.

use crate::{Error, Result};

use super::{Decomposition, OutputFormatter};

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, items: &[Decomposition]) -> Result<String> {
        serde_json::to_string_pretty(items).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl HumanFormatter {
    fn block(d: &Decomposition) -> String {
        let components = d
            .components
            .iter()
            .map(|c| format!("[{c}]"))
            .collect::<Vec<_>>()
            .join(" ");
        let platform = d.platform.to_string();

        let rows = [
            ("input", d.input.as_str()),
            ("platform", platform.as_str()),
            ("rendered", d.rendered.as_str()),
            ("components", components.as_str()),
            ("root path", d.root_path.as_str()),
            ("root name", d.root_name.as_str()),
            ("root directory", d.root_directory.as_str()),
            ("relative path", d.relative_path.as_str()),
            ("parent path", d.parent_path.as_str()),
            ("filename", d.filename.as_str()),
            ("stem", d.stem.as_str()),
            ("extension", d.extension.as_str()),
            ("normal", d.normal.as_str()),
            ("absolute", flag(d.is_absolute)),
            ("relative", flag(d.is_relative)),
            ("valid", flag(d.is_valid)),
        ];

        rows.iter()
            .map(|(name, value)| format!("{:<15} {value}", format!("{name}:")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, items: &[Decomposition]) -> Result<String> {
        if items.is_empty() {
            return Ok("No paths given.".to_string());
        }

        Ok(items
            .iter()
            .map(Self::block)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Platform;

    fn sample() -> Vec<Decomposition> {
        vec![
            Decomposition::from_path("/usr/lib/libz.so", Platform::Posix),
            Decomposition::from_path("rel/../x", Platform::Posix),
        ]
    }

    #[test]
    fn test_json_formatter() {
        let text = JsonFormatter.format(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["filename"], "libz.so");
        assert_eq!(array[0]["platform"], "posix");
        assert_eq!(array[1]["normal"], "x");
        assert_eq!(array[1]["is_absolute"], false);
    }

    #[test]
    fn test_human_formatter() {
        let text = HumanFormatter.format(&sample()).unwrap();
        assert!(text.contains("filename:       libz.so"));
        assert!(text.contains("components:     [/] [usr] [lib] [libz.so]"));
        assert!(text.contains("absolute:       yes"));
        assert_eq!(text.matches("input:").count(), 2);
    }

    #[test]
    fn test_human_formatter_empty() {
        assert_eq!(HumanFormatter.format(&[]).unwrap(), "No paths given.");
    }
}
