use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keyword separating a resource id from a relationship name.
pub const DEFAULT_RELATIONSHIPS_KEYWORD: &str = "relationships";

/// How much of the path the resource grammar has to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// Match a leading `/<type>[/<id>[/relationships/<rel>]]` and ignore the rest.
    #[default]
    Prefix,
    /// Reject paths with anything left over after the grammar.
    Exact,
}

/// Parser options, usually left at their defaults.
///
/// Can be read from a TOML file; every field is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub path_match: PathMatch,
    /// Literal path segment preceding the relationship name.
    pub relationships_keyword: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            path_match: PathMatch::Prefix,
            relationships_keyword: DEFAULT_RELATIONSHIPS_KEYWORD.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn strict() -> Self {
        Self {
            path_match: PathMatch::Exact,
            ..Self::default()
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: ParserConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The relationships keyword must be a single word segment, or no path could match it.
    pub fn validate(&self) -> Result<()> {
        let keyword = &self.relationships_keyword;
        if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!(
                "relationships_keyword {:?} must be one or more of [A-Za-z0-9_]",
                keyword
            );
        }
        Ok(())
    }
}

/// Load parser configuration from a TOML file.
pub fn load_from(path: &Path) -> Result<ParserConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading parser config {}", path.display()))?;
    let cfg = ParserConfig::from_toml_str(&data)
        .with_context(|| format!("parsing parser config {}", path.display()))?;
    tracing::debug!("loaded parser config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = ParserConfig::default();
        assert_eq!(cfg.path_match, PathMatch::Prefix);
        assert_eq!(cfg.relationships_keyword, "relationships");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ParserConfig::strict();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed = ParserConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg = ParserConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ParserConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            path_match = "exact"
            relationships_keyword = "links"
        "#;
        let cfg = ParserConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.path_match, PathMatch::Exact);
        assert_eq!(cfg.relationships_keyword, "links");
    }

    #[test]
    fn config_toml_rejects_unknown_mode() {
        assert!(ParserConfig::from_toml_str("path_match = \"fuzzy\"").is_err());
    }

    #[test]
    fn config_rejects_non_word_keyword() {
        assert!(ParserConfig::from_toml_str("relationships_keyword = \"\"").is_err());
        assert!(ParserConfig::from_toml_str("relationships_keyword = \"a/b\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "path_match = \"exact\"").unwrap();
        let cfg = load_from(file.path()).unwrap();
        assert_eq!(cfg.path_match, PathMatch::Exact);
        assert_eq!(cfg.relationships_keyword, "relationships");
    }

    #[test]
    fn load_from_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }
}
