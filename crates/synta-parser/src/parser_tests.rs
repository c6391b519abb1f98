//! Comprehensive unit tests for the Synta parser.
//!
//! These tests exercise the full pipeline through [`parse_str`]: lexing,
//! the statement grammar, the segment grammar, and the cross-reference
//! validation pass.

use synta_core::document::Document;
use synta_core::identifier::Identifier;
use synta_core::template::Segment;

use crate::error::ErrorCode;
use crate::{ParseError, parse_str};

fn id(name: &str) -> Identifier {
    Identifier::new(name).unwrap()
}

/// Helper to parse a source string and assert success.
fn assert_parses(source: &str) -> Document {
    match parse_str(source) {
        Ok(document) => document,
        Err(err) => panic!("expected {source:?} to parse, got error: {err}"),
    }
}

/// Helper to parse a source string and assert failure.
fn assert_fails(source: &str) -> ParseError {
    match parse_str(source) {
        Ok(_) => panic!("expected {source:?} to fail"),
        Err(err) => err,
    }
}

// =========================================================================
// Statement grammar
// =========================================================================

#[test]
fn test_two_definitions_and_filename() {
    let document = assert_parses("a = [0-9]+\nb = [a-z]+\n> a-b.b");

    assert_eq!(document.definitions().len(), 2);
    assert!(document.definitions().contains_key(&id("a")));
    assert!(document.definitions().contains_key(&id("b")));

    let filename = document.filename();
    assert_eq!(
        filename.segments(),
        [
            Segment::Identifier(id("a")),
            Segment::Identifier(id("b")),
        ]
    );
    assert_eq!(filename.extension(), &id("b"));
}

#[test]
fn test_extension_may_reuse_a_segment_identifier() {
    let document = assert_parses("a = x\n> a.a");
    assert_eq!(document.filename().segments(), [Segment::Identifier(id("a"))]);
    assert_eq!(document.filename().extension(), &id("a"));
}

#[test]
fn test_nodes_preserve_source_order() {
    let document = assert_parses("a = x\n> a.b\nb = y");

    let kinds: Vec<&str> = document
        .nodes()
        .iter()
        .map(|node| match node {
            synta_core::document::Node::Definition { id, .. } => id.as_str(),
            synta_core::document::Node::Filename(_) => ">",
        })
        .collect();
    assert_eq!(kinds, ["a", ">", "b"]);
}

#[test]
fn test_comments_attach_to_following_definition() {
    let source = "; the year\n; four digits\nyear = [0-9]{4}\next = pdf\n> year.ext";
    let document = assert_parses(source);

    let year = &document.definitions()[&id("year")];
    assert_eq!(year.comments(), ["the year", "four digits"]);
    let ext = &document.definitions()[&id("ext")];
    assert!(ext.comments().is_empty());
}

#[test]
fn test_comment_before_filename_is_rejected() {
    // Comments document definitions; they cannot precede the filename
    // statement.
    let err = assert_fails("a = x\n; what follows\n> a.a");
    assert!(matches!(
        err,
        ParseError::ExpectedToken {
            expected: crate::TokenKind::Identifier,
            found: crate::TokenKind::FilenamePrefix,
            ..
        }
    ));
}

#[test]
fn test_trailing_comments_are_dropped() {
    let document = assert_parses("a = x\n> a.a\n; nothing follows");
    assert_eq!(document.definitions().len(), 1);
}

#[test]
fn test_unexpected_token_at_statement_start() {
    let err = assert_fails("a = x\n> a.a-b");
    match err {
        ParseError::UnexpectedToken { found, line } => {
            assert_eq!(found, crate::TokenKind::Dash);
            assert_eq!(line, 2);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

// =========================================================================
// Definitions
// =========================================================================

#[test]
fn test_duplicate_definition_is_rejected() {
    let err = assert_fails("a = x\na = y\n> a.a");
    assert_eq!(err.to_string(), "definition for `a` is provided twice");
    assert_eq!(err.code(), ErrorCode::E300);
}

#[test]
fn test_invalid_pattern_is_rejected_at_its_line() {
    let err = assert_fails("a = [0-9\n> a.a");
    match err {
        ParseError::InvalidRegexp { line, .. } => assert_eq!(line, 1),
        other => panic!("expected InvalidRegexp, got {other:?}"),
    }
}

#[test]
fn test_pattern_with_inner_separator_is_rejected() {
    let err = assert_fails("a = x = y\n> a.a");
    assert!(matches!(err, ParseError::MalformedDefinition { line: 1, .. }));
}

#[test]
fn test_malformed_definition_line() {
    let err = assert_fails("nonsense\n> a.a");
    assert_eq!(
        err.to_string(),
        "invalid definition format at line 1: nonsense"
    );
}

// =========================================================================
// Filename and segment grammar
// =========================================================================

#[test]
fn test_optional_group_follows_segment_without_dash() {
    let document = assert_parses("a = x\nb = y\nc = z\n> a(-b)?.c");
    assert_eq!(
        document.filename().segments(),
        [
            Segment::Identifier(id("a")),
            Segment::Optional(vec![Segment::Identifier(id("b"))]),
        ]
    );
}

#[test]
fn test_leading_optional_group() {
    let document = assert_parses("a = x\nb = y\n> (-b)?a.a");
    assert_eq!(
        document.filename().segments(),
        [
            Segment::Optional(vec![Segment::Identifier(id("b"))]),
            Segment::Identifier(id("a")),
        ]
    );
}

#[test]
fn test_nested_optional_groups() {
    let document = assert_parses("a = x\nb = y\nc = z\nd = w\n> a(-b(-c)?)?.d");
    assert_eq!(
        document.filename().segments(),
        [
            Segment::Identifier(id("a")),
            Segment::Optional(vec![
                Segment::Identifier(id("b")),
                Segment::Optional(vec![Segment::Identifier(id("c"))]),
            ]),
        ]
    );
}

#[test]
fn test_optional_group_with_dash_separator_also_parses() {
    let document = assert_parses("a = x\nb = y\n> a-(-b)?.a");
    assert_eq!(document.filename().segments().len(), 2);
}

#[test]
fn test_adjacent_identifiers_without_dash_fail() {
    // Two bare identifier segments need an explicit dash between them;
    // a space is not a separator and no other spelling of adjacency
    // exists in the segment alphabet.
    let err = assert_fails("a = x\nb = y\n> a b.a");
    assert!(matches!(
        err,
        ParseError::UnexpectedCharacter { character: ' ', .. }
    ));
}

#[test]
fn test_optional_group_requires_leading_dash() {
    let err = assert_fails("a = x\nb = y\n> a(b)?.a");
    assert!(matches!(
        err,
        ParseError::ExpectedToken {
            expected: crate::TokenKind::Dash,
            found: crate::TokenKind::Identifier,
            ..
        }
    ));
}

#[test]
fn test_optional_group_requires_question_mark() {
    let err = assert_fails("a = x\nb = y\n> a(-b).a");
    assert!(matches!(
        err,
        ParseError::ExpectedToken {
            expected: crate::TokenKind::Question,
            found: crate::TokenKind::Dot,
            ..
        }
    ));
}

#[test]
fn test_unclosed_optional_group() {
    let err = assert_fails("a = x\nb = y\n> a(-b?.a");
    assert!(matches!(
        err,
        ParseError::ExpectedSegmentSeparator {
            found: crate::TokenKind::Question,
            ..
        }
    ));
}

#[test]
fn test_segments_hit_end_of_file() {
    let err = assert_fails("a = x\n> a");
    assert_eq!(
        err.to_string(),
        "unexpected end of file while parsing segments"
    );
    assert_eq!(err.code(), ErrorCode::E103);
}

#[test]
fn test_missing_extension() {
    let err = assert_fails("a = x\n> a.");
    assert!(matches!(
        err,
        ParseError::ExpectedToken {
            expected: crate::TokenKind::Identifier,
            found: crate::TokenKind::Eof,
            ..
        }
    ));
}

#[test]
fn test_extension_must_be_final() {
    let err = assert_fails("a = x\nb = y\n> a.a.b");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_missing_definition_for_extension() {
    let err = assert_fails("a = x\n> a.c");
    assert_eq!(err.to_string(), "missing definition for `c`");
    assert_eq!(err.code(), ErrorCode::E304);
}

#[test]
fn test_missing_definition_inside_optional_group() {
    // Identifiers inside optional groups still require definitions.
    let err = assert_fails("a = x\n> a(-b)?.a");
    assert_eq!(err.to_string(), "missing definition for `b`");
}

#[test]
fn test_every_referenced_identifier_resolves() {
    let document = assert_parses("a = x\nb = y\nc = z\n> a(-b)?-c.a");
    for required in document.filename().required_identifiers() {
        assert!(document.definitions().contains_key(required));
    }
}

#[test]
fn test_multiple_filename_declarations() {
    let err = assert_fails("a = x\n> a.a\n> a.a");
    assert_eq!(err.to_string(), "multiple filename declarations found");
    assert_eq!(err.code(), ErrorCode::E301);
}

#[test]
fn test_missing_filename_declaration() {
    let err = assert_fails("a = x\nb = y");
    assert_eq!(err.to_string(), "missing filename declaration");
    assert_eq!(err.code(), ErrorCode::E302);
}

#[test]
fn test_comment_only_input_is_missing_filename() {
    let err = assert_fails("; just a remark\n; and another");
    assert_eq!(err.to_string(), "missing filename declaration");
}

#[test]
fn test_empty_input_is_rejected() {
    let err = assert_fails("");
    assert_eq!(err.to_string(), "empty file provided");
    assert_eq!(err.code(), ErrorCode::E303);
}

#[test]
fn test_blank_only_input_is_rejected() {
    let err = assert_fails("\n\n   \n");
    assert!(matches!(err, ParseError::EmptyFile));
}

// =========================================================================
// Pruning over parsed documents
// =========================================================================

#[test]
fn test_prune_keeps_reachable_definitions() {
    let document = assert_parses("a = x\nb = y\n> (-b)?a.a");
    let pruned = document.prune();
    assert_eq!(pruned.definitions().len(), 2);
}

#[test]
fn test_prune_drops_unreferenced_definitions() {
    let document = assert_parses("a = x\nb = y\nunused = z\n> a(-b)?.a");
    let pruned = document.prune();
    assert!(!pruned.definitions().contains_key(&id("unused")));
    assert_eq!(pruned.definitions().len(), 2);
}

// =========================================================================
// Rendering round trip
// =========================================================================

#[test]
fn test_rendered_document_reparses_identically() {
    let source = "; doc line\na = [0-9]+\nb = [a-z]+\nunused = q\n> a(-b)?.b";
    let document = assert_parses(source);
    let rendered = document.to_string();
    let reparsed = assert_parses(&rendered);
    assert_eq!(document, reparsed);
}

#[test]
fn test_pruned_document_renders_and_reparses() {
    let document = assert_parses("a = x\nb = y\nunused = z\n> a(-b)?.a");
    let pruned = document.prune();
    let reparsed = assert_parses(&pruned.to_string());
    assert_eq!(pruned, reparsed);
}

// =========================================================================
// Property tests
// =========================================================================

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Strategy for a set of distinct identifier names.
    fn identifier_set_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[a-z]{1,8}", 2..6)
            .prop_map(|set| set.into_iter().collect())
    }

    /// Strategy for pattern texts that always compile.
    fn pattern_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("[0-9]+".to_string()),
            Just("[a-z]{2,4}".to_string()),
            Just("v[0-9]+".to_string()),
            "[a-z]{1,6}",
        ]
    }

    /// Build a source where every identifier is defined, the first is the
    /// only segment, and the last is the extension.
    fn build_source(names: &[String], patterns: &[String]) -> String {
        let mut source = String::new();
        for (name, pattern) in names.iter().zip(patterns) {
            source.push_str(&format!("{name} = {pattern}\n"));
        }
        let first = &names[0];
        let last = &names[names.len() - 1];
        source.push_str(&format!("> {first}.{last}\n"));
        source
    }

    proptest! {
        #[test]
        fn parsed_documents_are_complete(
            names in identifier_set_strategy(),
            pattern in pattern_strategy(),
        ) {
            let patterns = vec![pattern; names.len()];
            let source = build_source(&names, &patterns);
            let document = parse_str(&source).expect("generated source parses");

            for required in document.filename().required_identifiers() {
                prop_assert!(document.definitions().contains_key(required));
            }
        }

        #[test]
        fn pruning_is_idempotent(
            names in identifier_set_strategy(),
            pattern in pattern_strategy(),
        ) {
            let patterns = vec![pattern; names.len()];
            let source = build_source(&names, &patterns);
            let document = parse_str(&source).expect("generated source parses");

            let once = document.prune();
            let twice = once.prune();
            prop_assert_eq!(once.definitions(), twice.definitions());
        }

        #[test]
        fn rendering_round_trips(
            names in identifier_set_strategy(),
            pattern in pattern_strategy(),
        ) {
            let patterns = vec![pattern; names.len()];
            let source = build_source(&names, &patterns);
            let document = parse_str(&source).expect("generated source parses");

            let reparsed = parse_str(&document.to_string()).expect("rendered source parses");
            prop_assert_eq!(document, reparsed);
        }
    }
}
