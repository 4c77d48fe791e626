//! YAML front-matter parsing

use crate::error::MetadataError;
use serde_yaml::Value;

/// Fields recovered from a front-matter block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub id: Option<String>,
}

/// Parse a leading front-matter block.
///
/// The block is delimited by `---` at the start of the text and a
/// following `---` line:
///
/// ```text
/// ---
/// title: My Document
/// tags: [rust, automation]
/// ---
/// ```
///
/// Returns the parsed fields and the body with the block stripped, or
/// `None` if the text has no front matter (including an unterminated
/// opening delimiter). YAML that does not parse between the delimiters
/// is `MetadataError::MalformedFrontMatter`.
pub fn parse(text: &str) -> Result<Option<(FrontMatter, String)>, MetadataError> {
    let Some(rest) = text.strip_prefix("---") else {
        return Ok(None);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return Ok(None);
    };

    // Find the closing --- line
    let Some(end) = rest.find("\n---") else {
        return Ok(None);
    };
    let block = rest[..end].trim_end_matches('\r');
    let after = &rest[end + "\n---".len()..];
    let body = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after)
        .to_string();

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| MetadataError::MalformedFrontMatter(e.to_string()))?;

    Ok(Some((fields_from_yaml(&value), body)))
}

fn fields_from_yaml(value: &Value) -> FrontMatter {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let id = value
        .get("id")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    // Tags may be a YAML list or a comma-separated string
    let tags = match value.get("tags") {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        Some(Value::String(s)) => crate::markers::split_tags(s),
        _ => Vec::new(),
    };

    FrontMatter { title, tags, id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_block() {
        let text = "---\ntitle: Hello\ntags: [rust, cli]\nid: abc123\n---\nThe body.\n";
        let (fm, body) = parse(text).unwrap().unwrap();

        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.tags, vec!["rust".to_string(), "cli".to_string()]);
        assert_eq!(fm.id.as_deref(), Some("abc123"));
        assert_eq!(body, "The body.\n");
    }

    #[test]
    fn test_parse_comma_separated_tags() {
        let text = "---\ntags: rust, automation , \n---\nbody";
        let (fm, _) = parse(text).unwrap().unwrap();
        assert_eq!(
            fm.tags,
            vec!["rust".to_string(), "automation".to_string()]
        );
    }

    #[test]
    fn test_no_front_matter() {
        assert!(parse("# Just a heading\n").unwrap().is_none());
    }

    #[test]
    fn test_unterminated_block_is_not_front_matter() {
        let text = "---\ntitle: Hello\nno closing delimiter";
        assert!(parse(text).unwrap().is_none());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let text = "---\ntitle: [unclosed\n---\nbody";
        let result = parse(text);
        assert!(matches!(
            result,
            Err(MetadataError::MalformedFrontMatter(_))
        ));
    }

    #[test]
    fn test_crlf_delimiters() {
        let text = "---\r\ntitle: Windows\r\n---\r\nbody\r\n";
        let (fm, body) = parse(text).unwrap().unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_empty_block_has_no_fields() {
        let text = "---\n\n---\nbody";
        let (fm, body) = parse(text).unwrap().unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "body");
    }
}
