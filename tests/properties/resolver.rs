//! Property tests for include marker resolution.

use std::fs;
use std::path::Path;

use proptest::prelude::*;

use stitch::resolver::substitute;
use stitch::{find_includes, resolve_text};

/// Text that can never form a marker.
fn plain_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 <>/=\"\n]{0,48}").unwrap()
}

fn partial_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8})?\\.html").unwrap()
}

fn write_partial(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Marker scanning never panics on arbitrary input.
    #[test]
    fn property_find_includes_never_panics(
        s in "(?s).{0,256}"
    ) {
        for directive in find_includes(&s) {
            prop_assert!(s.is_char_boundary(directive.span.start));
            prop_assert!(s.is_char_boundary(directive.span.end));
        }
    }

    /// PROPERTY: Text without markers resolves to itself.
    #[test]
    fn property_marker_free_text_is_unchanged(
        text in plain_text()
    ) {
        let resolved = resolve_text(&text, Path::new("/nonexistent")).unwrap();
        prop_assert_eq!(resolved.content, text);
        prop_assert!(resolved.includes.is_empty());
    }

    /// PROPERTY: Splicing each marker back over itself reproduces the input.
    #[test]
    fn property_substitute_with_markers_round_trips(
        parts in proptest::collection::vec((plain_text(), partial_name()), 0..6),
        tail in plain_text()
    ) {
        let mut text = String::new();
        for (before, name) in &parts {
            text.push_str(before);
            text.push_str(&format!("<!-- include:{} -->", name));
        }
        text.push_str(&tail);

        let directives = find_includes(&text);
        prop_assert_eq!(directives.len(), parts.len());

        let originals: Vec<&str> = directives.iter().map(|d| &text[d.span.clone()]).collect();
        prop_assert_eq!(substitute(&text, &directives, &originals), text.clone());
    }

    /// PROPERTY: Resolution replaces every marker with its partial's exact content.
    #[test]
    fn property_resolve_splices_partials_in_order(
        parts in proptest::collection::vec((plain_text(), partial_name(), plain_text()), 1..5),
        tail in plain_text()
    ) {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();

        // Later writes win when names repeat, so expected text uses the final content.
        for (_, name, content) in &parts {
            write_partial(root, name, content);
        }

        let mut text = String::new();
        let mut expected = String::new();
        for (before, name, _) in &parts {
            text.push_str(before);
            text.push_str(&format!("<!-- include:{} -->", name));
            expected.push_str(before);
            expected.push_str(&fs::read_to_string(root.join(name)).unwrap());
        }
        text.push_str(&tail);
        expected.push_str(&tail);

        let resolved = resolve_text(&text, root).unwrap();
        prop_assert_eq!(resolved.content, expected);
        prop_assert_eq!(resolved.includes.len(), parts.len());
    }
}
