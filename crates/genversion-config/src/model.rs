use serde::{Deserialize, Serialize};

use crate::{Catalog, CatalogEntry, ConfigError, FlagTable};

/// Column layout of the generated string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Width of the label column.
    #[serde(default = "Layout::default_left_margin")]
    pub left_margin: usize,
    /// Column at which content wraps, label included.
    #[serde(default = "Layout::default_right_margin")]
    pub right_margin: usize,
}

impl Layout {
    pub fn default_left_margin() -> usize {
        6
    }

    pub fn default_right_margin() -> usize {
        70
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left_margin: Self::default_left_margin(),
            right_margin: Self::default_right_margin(),
        }
    }
}

/// Names that appear in the generated file's header and declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNames {
    #[serde(default = "OutputNames::default_file_name")]
    pub file_name: String,
    #[serde(default = "OutputNames::default_generator")]
    pub generator: String,
    #[serde(default = "OutputNames::default_array_name")]
    pub array_name: String,
}

impl OutputNames {
    pub fn default_file_name() -> String {
        "version.c".into()
    }

    pub fn default_generator() -> String {
        "genversion.c".into()
    }

    pub fn default_array_name() -> String {
        "version_info".into()
    }
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            file_name: Self::default_file_name(),
            generator: Self::default_generator(),
            array_name: Self::default_array_name(),
        }
    }
}

/// Everything one generation run needs besides the output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub output: OutputNames,
    #[serde(default)]
    pub flags: FlagTable,
    /// Custom catalog. Falls back to [`Catalog::standard`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
}

impl Config {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog.as_ref().unwrap_or_else(|| Catalog::standard())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.right_margin <= self.layout.left_margin {
            return Err(ConfigError::Invalid(format!(
                "right_margin ({}) must exceed left_margin ({})",
                self.layout.right_margin, self.layout.left_margin
            )));
        }
        if !is_identifier(&self.output.array_name) {
            return Err(ConfigError::Invalid(format!(
                "array_name `{}` is not a C identifier",
                self.output.array_name
            )));
        }
        for name in [&self.output.file_name, &self.output.generator] {
            if name.contains("*/") || name.contains('\n') {
                return Err(ConfigError::Invalid(format!(
                    "`{}` cannot appear inside the header comment",
                    name
                )));
            }
        }
        if let Some(catalog) = &self.catalog {
            validate_catalog(catalog)?;
        }
        Ok(())
    }
}

/// Keys and literals are printed verbatim inside C string literals.
fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    for section in &catalog.sections {
        check_printable("section label", &section.label, true)?;
        for entry in &section.entries {
            match entry {
                CatalogEntry::Var { key, .. }
                | CatalogEntry::OptionalVar { key, .. }
                | CatalogEntry::Number { key, .. } => check_printable("key", key, false)?,
                CatalogEntry::Flag { literal, .. }
                | CatalogEntry::Unless { literal, .. }
                | CatalogEntry::Fallback { literal, .. } => {
                    check_printable("literal", literal, false)?
                }
                CatalogEntry::Gated { vars, .. } => {
                    for spec in vars {
                        check_printable("key", &spec.key, false)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_printable(what: &str, text: &str, allow_empty: bool) -> Result<(), ConfigError> {
    if text.is_empty() && !allow_empty {
        return Err(ConfigError::Invalid(format!("catalog {what} is empty")));
    }
    if text.chars().any(|ch| matches!(ch, '"' | '\\' | '\n' | '\r')) {
        return Err(ConfigError::Invalid(format!(
            "catalog {what} {text:?} cannot be placed in a string literal"
        )));
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogSection;

    #[test]
    fn empty_object_yields_defaults() {
        let config = Config::from_json("{}").expect("parse");

        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.output.array_name, "version_info");
        assert!(config.flags.is_empty());
        assert_eq!(config.catalog(), Catalog::standard());
    }

    #[test]
    fn rejects_inverted_margins() {
        let err = Config::from_json(r#"{"layout": {"left_margin": 10, "right_margin": 10}}"#)
            .expect_err("margins must be rejected");

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_array_name() {
        let mut config = Config::default();
        config.output.array_name = "1version".into();

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_quote_in_catalog_key() {
        let data = r#"{"catalog": [{"label": "defs:", "entries": [{"kind": "var", "key": "A\"B"}]}]}"#;
        let err = Config::from_json(data).expect_err("quoted key must be rejected");

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_line_break_in_catalog_literal() {
        let config = Config {
            catalog: Some(Catalog::new(vec![CatalogSection::new(
                "defs:",
                vec![CatalogEntry::gated("DUMP", &["DUMP"]), CatalogEntry::flag("LINE\nBREAK")],
            )])),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_gated_key() {
        let config = Config {
            catalog: Some(Catalog::new(vec![CatalogSection::new(
                "paths:",
                vec![CatalogEntry::gated("DUMP", &["DUMP", ""])],
            )])),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let config = Config {
            catalog: Some(Catalog::standard().clone()),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_comment_terminator_in_header_names() {
        let mut config = Config::default();
        config.output.generator = "gen*/.c".into();

        assert!(config.validate().is_err());
    }
}
