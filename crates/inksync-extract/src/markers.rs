//! HTML comment marker scanning

/// Find the value of an embedded marker comment.
///
/// Markers are single-line HTML comments of the form
/// `<!-- field: value -->`. The first match wins; markers inside the
/// body are left in place when publishing.
pub fn value(text: &str, field: &str) -> Option<String> {
    for line in text.lines() {
        let trimmed = line.trim();
        let Some(inner) = trimmed
            .strip_prefix("<!--")
            .and_then(|rest| rest.strip_suffix("-->"))
        else {
            continue;
        };
        let inner = inner.trim();
        let Some(after_field) = inner.strip_prefix(field) else {
            continue;
        };
        // Require the separator so `id` does not match `identity`
        if let Some(v) = after_field.trim_start().strip_prefix(':') {
            let v = v.trim();
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}

/// Split a comma-separated tag list, trimming and dropping empties
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_value() {
        let text = "Intro text\n<!-- title: My Post -->\nbody";
        assert_eq!(value(text, "title").as_deref(), Some("My Post"));
    }

    #[test]
    fn test_marker_absent() {
        assert!(value("no markers here", "title").is_none());
    }

    #[test]
    fn test_marker_requires_separator() {
        // `identity` must not satisfy a search for `id`
        let text = "<!-- identity: nope -->";
        assert!(value(text, "id").is_none());
    }

    #[test]
    fn test_first_marker_wins() {
        let text = "<!-- id: first -->\n<!-- id: second -->";
        assert_eq!(value(text, "id").as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_marker_value_ignored() {
        assert!(value("<!-- id: -->", "id").is_none());
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(
            split_tags("rust, automation ,,  cli"),
            vec!["rust".to_string(), "automation".to_string(), "cli".to_string()]
        );
        assert!(split_tags("  ,, ").is_empty());
    }
}
