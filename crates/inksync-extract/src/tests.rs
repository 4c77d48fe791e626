//! End-to-end extractor tests

use crate::{ExtractConfig, MetadataExtractor, MetadataError};

fn extractor() -> MetadataExtractor {
    MetadataExtractor::new(ExtractConfig {
        default_tags: vec!["blog".to_string(), "automation".to_string()],
        require_title: false,
    })
}

#[test]
fn test_marker_document() {
    let raw = "<!-- title: Hello -->\n<!-- tags: rust, cli -->\nBody text.\n";
    let doc = extractor().extract("a.md", raw).unwrap();

    assert_eq!(doc.key, "a.md");
    assert_eq!(doc.title, "Hello");
    assert_eq!(doc.tags, vec!["rust".to_string(), "cli".to_string()]);
    assert!(doc.remote_id.is_none());
    // Markers stay in the published body
    assert!(doc.body.contains("<!-- title: Hello -->"));
}

#[test]
fn test_front_matter_document() {
    let raw = "---\ntitle: From Front Matter\ntags: [a, b]\nid: x9\n---\n# Heading\n";
    let doc = extractor().extract("post.md", raw).unwrap();

    assert_eq!(doc.title, "From Front Matter");
    assert_eq!(doc.tags, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(doc.remote_id.as_ref().map(|id| id.as_str()), Some("x9"));
    // The block is stripped from the body
    assert_eq!(doc.body, "# Heading\n");
}

#[test]
fn test_front_matter_wins_over_markers() {
    let raw = "---\ntitle: FM Title\n---\n<!-- title: Marker Title -->\nbody";
    let doc = extractor().extract("p.md", raw).unwrap();
    assert_eq!(doc.title, "FM Title");
}

#[test]
fn test_marker_fills_front_matter_gap() {
    // Front matter present but without an id; the marker supplies it
    let raw = "---\ntitle: T\n---\n<!-- id: abc -->\nbody";
    let doc = extractor().extract("p.md", raw).unwrap();
    assert_eq!(doc.remote_id.as_ref().map(|id| id.as_str()), Some("abc"));
}

#[test]
fn test_title_falls_back_to_file_stem() {
    let doc = extractor().extract("posts/intro-to-inksync.md", "plain body").unwrap();
    assert_eq!(doc.title, "intro-to-inksync");
}

#[test]
fn test_tags_default_when_absent() {
    let doc = extractor().extract("a.md", "no tags anywhere").unwrap();
    assert_eq!(doc.tags, vec!["blog".to_string(), "automation".to_string()]);
}

#[test]
fn test_tags_default_when_markers_empty() {
    // A tags marker that resolves to nothing still gets the defaults
    let doc = extractor().extract("a.md", "<!-- tags: , , -->\nbody").unwrap();
    assert_eq!(doc.tags, vec!["blog".to_string(), "automation".to_string()]);
}

#[test]
fn test_require_title_policy() {
    let strict = MetadataExtractor::new(ExtractConfig {
        default_tags: vec!["blog".to_string()],
        require_title: true,
    });

    let err = strict.extract("a.md", "no title here").unwrap_err();
    assert!(matches!(err, MetadataError::MissingTitle(key) if key == "a.md"));

    // An embedded title satisfies the policy
    let doc = strict.extract("a.md", "<!-- title: Ok -->").unwrap();
    assert_eq!(doc.title, "Ok");
}

#[test]
fn test_malformed_front_matter_propagates() {
    let raw = "---\ntitle: [broken\n---\nbody";
    let err = extractor().extract("a.md", raw).unwrap_err();
    assert!(matches!(err, MetadataError::MalformedFrontMatter(_)));
}

#[test]
fn test_spec_scenario_first_publish() {
    // Document "a.md", embedded title, no tags, no id
    let doc = extractor()
        .extract("a.md", "<!-- title: Hello -->\nSome content.")
        .unwrap();

    assert_eq!(doc.title, "Hello");
    assert_eq!(doc.tags, vec!["blog".to_string(), "automation".to_string()]);
    assert!(doc.remote_id.is_none());
}
