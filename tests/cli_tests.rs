// tests/cli_tests.rs

use relexpr::cli::{
    CheckOptions, CheckResult, CliError, ContainsOptions, RelationOptions, execute_check,
    execute_contains, execute_relation, syntax_reference,
};
use relexpr::{Violation, parse};

fn check(expression: &str, json: bool) -> Result<CheckResult, CliError> {
    execute_check(&CheckOptions {
        expression: Some(expression.to_string()),
        json,
        pretty: false,
    })
}

fn relation(expression: &str, path: &[&str]) -> Option<String> {
    execute_relation(&RelationOptions {
        expression: expression.to_string(),
        path: path.iter().map(|s| s.to_string()).collect(),
        json: false,
        pretty: false,
    })
    .unwrap()
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_prints_canonical_form() {
    match check("a.[ b,c ]", false).unwrap() {
        CheckResult::Valid(rendered) => assert_eq!(rendered, "a.[b, c]"),
        other => panic!("Expected valid result, got {:?}", other),
    }
}

#[test]
fn test_check_strips_trailing_newline_from_stdin() {
    match check("a.b\n", false).unwrap() {
        CheckResult::Valid(rendered) => assert_eq!(rendered, "a.b"),
        other => panic!("Expected valid result, got {:?}", other),
    }
}

#[test]
fn test_check_empty_expression() {
    assert!(matches!(check("", false).unwrap(), CheckResult::Empty));
}

#[test]
fn test_check_json() {
    match check("a", true).unwrap() {
        CheckResult::Valid(rendered) => {
            assert_eq!(rendered, r#"[{"children":[],"name":"a"}]"#)
        }
        other => panic!("Expected valid result, got {:?}", other),
    }
}

#[test]
fn test_check_invalid() {
    let err = check("a..b", false).unwrap_err();
    match err {
        CliError::Parse(e) => assert_eq!(e.violation(), Violation::EmptyRelationName),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_check_without_input() {
    let err = execute_check(&CheckOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_parse_error_message_is_prefixed() {
    let err = CliError::from(parse("a.[b").unwrap_err());
    assert_eq!(err.to_string(), "Parse error: invalid relation expression: a.[b");
}

// ============================================================================
// relation / contains
// ============================================================================

#[test]
fn test_relation_path() {
    assert_eq!(
        relation("owner.[pets.toys, address]", &["owner"]).as_deref(),
        Some("[pets.toys, address]")
    );
    assert_eq!(
        relation("owner.[pets.toys, address]", &["owner", "pets"]).as_deref(),
        Some("toys")
    );
    assert_eq!(relation("owner.pets", &["owner", "address"]), None);
}

#[test]
fn test_relation_through_wildcard_and_recursion() {
    assert_eq!(relation("*", &["owner", "pets"]).as_deref(), Some("*"));
    assert_eq!(
        relation("parent.^", &["parent", "parent"]).as_deref(),
        Some("parent.^")
    );
}

#[test]
fn test_contains() {
    let contained = execute_contains(&ContainsOptions {
        expression: "children.[movies.actors, pets]".to_string(),
        other: "children.movies".to_string(),
    })
    .unwrap();
    assert!(contained);

    let contained = execute_contains(&ContainsOptions {
        expression: "children.movies".to_string(),
        other: "children.[movies, pets]".to_string(),
    })
    .unwrap();
    assert!(!contained);
}

#[test]
fn test_contains_rejects_invalid_other() {
    let err = execute_contains(&ContainsOptions {
        expression: "a".to_string(),
        other: "a.[".to_string(),
    })
    .unwrap_err();
    assert!(matches!(err, CliError::Parse(_)));
}

#[test]
fn test_syntax_reference_mentions_reserved_names() {
    let docs = syntax_reference();
    assert!(docs.contains("WILDCARD"));
    assert!(docs.contains("RECURSION"));
}
