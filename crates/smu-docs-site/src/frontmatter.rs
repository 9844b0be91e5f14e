//! Frontmatter validation.

use serde::Serialize;
use serde_json::{Map, Value};

/// Why a document's frontmatter was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontmatterError {
    /// Document does not start with a `---` delimited block.
    #[error("document has no frontmatter block")]
    Missing,
    /// Block is not valid YAML.
    #[error("frontmatter is not valid YAML: {0}")]
    Yaml(String),
    /// Block parsed but is not a key/value mapping.
    #[error("frontmatter must be a YAML mapping")]
    NotAMapping,
    /// Mapping has no `title` key.
    #[error("frontmatter is missing required field 'title'")]
    MissingTitle,
    /// `title` is present but not a string.
    #[error("frontmatter field 'title' must be a string")]
    TitleNotString,
}

/// Validated document frontmatter.
///
/// Serializes flat: `title` next to any extra keys.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frontmatter {
    /// Page title.
    pub title: String,
    /// Other keys, kept as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Frontmatter {
    /// Validate the raw YAML text of a frontmatter block.
    ///
    /// `None` means the document had no block at all.
    pub fn from_yaml(yaml: Option<&str>) -> Result<Self, FrontmatterError> {
        let yaml = yaml.ok_or(FrontmatterError::Missing)?;

        let parsed: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::Yaml(e.to_string()))?;
        let json =
            serde_json::to_value(parsed).map_err(|e| FrontmatterError::Yaml(e.to_string()))?;

        let mut extra = match json {
            Value::Object(map) => map,
            // An empty block parses as null.
            Value::Null => Map::new(),
            _ => return Err(FrontmatterError::NotAMapping),
        };

        match extra.remove("title") {
            Some(Value::String(title)) => Ok(Self { title, extra }),
            Some(_) => Err(FrontmatterError::TitleNotString),
            None => Err(FrontmatterError::MissingTitle),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_title_only() {
        let frontmatter = Frontmatter::from_yaml(Some("title: Install\n")).unwrap();

        assert_eq!(frontmatter.title, "Install");
        assert!(frontmatter.extra.is_empty());
    }

    #[test]
    fn test_extra_keys_preserved() {
        let frontmatter =
            Frontmatter::from_yaml(Some("title: Install\norder: 2\ntags: [setup, brew]\n")).unwrap();

        assert_eq!(frontmatter.extra.get("order"), Some(&json!(2)));
        assert_eq!(frontmatter.extra.get("tags"), Some(&json!(["setup", "brew"])));
    }

    #[test]
    fn test_serializes_flat() {
        let frontmatter = Frontmatter::from_yaml(Some("title: Install\ndraft: true\n")).unwrap();

        assert_eq!(
            serde_json::to_value(&frontmatter).unwrap(),
            json!({"title": "Install", "draft": true})
        );
    }

    #[test]
    fn test_missing_block() {
        assert_eq!(Frontmatter::from_yaml(None), Err(FrontmatterError::Missing));
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(
            Frontmatter::from_yaml(Some("description: No title here\n")),
            Err(FrontmatterError::MissingTitle)
        );
        assert_eq!(
            Frontmatter::from_yaml(Some("")),
            Err(FrontmatterError::MissingTitle)
        );
    }

    #[test]
    fn test_title_not_string() {
        assert_eq!(
            Frontmatter::from_yaml(Some("title: 42\n")),
            Err(FrontmatterError::TitleNotString)
        );
        assert_eq!(
            Frontmatter::from_yaml(Some("title:\n  nested: true\n")),
            Err(FrontmatterError::TitleNotString)
        );
    }

    #[test]
    fn test_not_a_mapping() {
        assert_eq!(
            Frontmatter::from_yaml(Some("- just\n- a list\n")),
            Err(FrontmatterError::NotAMapping)
        );
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Frontmatter::from_yaml(Some("title: [unclosed\n"));

        assert!(matches!(result, Err(FrontmatterError::Yaml(_))));
    }
}
