use crate::convert::snippet::cors::{
    CorsExtractError, DEFAULT_METHODS, extract_cors_config, is_conditional_cors,
};
use crate::convert::snippet::lines::split_lines;
use crate::convert::tests::test_helpers::*;
use pretty_assertions::assert_eq;

const ORIGIN_IF: &str = r"if ($http_origin ~* (https://example\.com)) {";
const METHODS: &str = r#"add_header Access-Control-Allow-Methods "GET, POST";"#;

fn detect(lines: &[&str]) -> bool {
    is_conditional_cors(&split_lines(&lines.join("\n")))
}

fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

//-----------------------------------------------------------------------------
// Detection
//-----------------------------------------------------------------------------

#[test]
fn detects_origin_guard_with_methods() {
    assert!(detect(&[ORIGIN_IF, METHODS, "}"]));
}

#[test]
fn requires_both_signals() {
    assert!(!detect(&[ORIGIN_IF, "}"]));
    assert!(!detect(&[METHODS]));
    assert!(!detect(&[]));
}

#[test]
fn detection_is_independent_of_line_order() {
    let positive = ["}", ORIGIN_IF, METHODS, "add_header Access-Control-Max-Age 600;"];
    for lines in permutations(&positive) {
        assert!(detect(&lines), "not detected: {lines:?}");
    }

    let disqualified = [ORIGIN_IF, METHODS, "rewrite ^ /foo;", "}"];
    for lines in permutations(&disqualified) {
        assert!(!detect(&lines), "detected despite rewrite: {lines:?}");
    }
}

#[test]
fn every_disqualifier_rejects_the_block() {
    for extra in [
        "rewrite ^ /foo;",
        "proxy_pass http://backend;",
        "fastcgi_pass unix:/run/php.sock;",
        "access_by_lua_block { }",
        "set $cors 'true';",
        "if ($http_origin ~* (a)) { set $cors 1; }",
    ] {
        assert!(!detect(&[ORIGIN_IF, METHODS, extra]), "not rejected: {extra}");
    }
}

#[test]
fn header_names_containing_set_do_not_disqualify() {
    assert!(detect(&[ORIGIN_IF, METHODS, r#"more_set_headers "X-Reset: 1";"#]));
}

#[test]
fn set_as_header_value_does_not_disqualify() {
    // Arrange
    let snippet = format!("{ORIGIN_IF}\n{METHODS}\nadd_header X-Cache-Mode set;\n}}");

    // Act
    let detected = is_conditional_cors(&split_lines(&snippet));
    let result = run_snippet(&snippet);

    // Assert
    assert!(detected);
    let names: Vec<&str> = result
        .middlewares
        .iter()
        .map(|mw| mw.metadata.name.as_str())
        .collect();
    assert_eq!(names, vec!["web-cors"]);
}

//-----------------------------------------------------------------------------
// Extraction
//-----------------------------------------------------------------------------

#[test]
fn extracts_all_cors_fields() {
    // Arrange
    let lines = split_lines(
        r#"
        if ($http_origin ~* (https://(www\.)?example\.com)) {
            add_header Access-Control-Allow-Origin "$http_origin" always;
            add_header 'Access-Control-Allow-Methods' 'GET, PUT, OPTIONS' always;
            add_header Access-Control-Allow-Headers "Authorization, Content-Type, , X-Req";
            add_header Access-Control-Allow-Credentials "TRUE";
            add_header Access-Control-Max-Age 1728000;
        }
        "#,
    );

    // Act
    let cfg = extract_cors_config(&lines).unwrap();

    // Assert
    assert_eq!(cfg.origin_regex, r"https://(www\.)?example\.com");
    assert_eq!(cfg.allow_methods, vec!["GET", "PUT", "OPTIONS"]);
    assert_eq!(cfg.allow_headers, vec!["Authorization", "Content-Type", "X-Req"]);
    assert_eq!(cfg.allow_credentials, Some(true));
    assert_eq!(cfg.max_age, 1728000);
}

#[test]
fn missing_methods_fall_back_to_defaults() {
    // Arrange
    let lines = split_lines(&format!("{ORIGIN_IF}\nadd_header Access-Control-Allow-Methods;\n}}"));

    // Act
    let cfg = extract_cors_config(&lines).unwrap();

    // Assert
    assert_eq!(cfg.allow_methods, DEFAULT_METHODS.to_vec());
}

#[test]
fn credentials_other_than_true_or_false_stay_unset() {
    // Arrange
    let lines = split_lines(&format!(
        "{ORIGIN_IF}\n{METHODS}\nadd_header Access-Control-Allow-Credentials \"yes\";"
    ));

    // Act
    let cfg = extract_cors_config(&lines).unwrap();

    // Assert
    assert_eq!(cfg.allow_credentials, None);
}

#[test]
fn explicit_false_credentials_are_kept() {
    let lines = split_lines(&format!(
        "{ORIGIN_IF}\n{METHODS}\nadd_header Access-Control-Allow-Credentials 'false';"
    ));

    let cfg = extract_cors_config(&lines).unwrap();

    assert_eq!(cfg.allow_credentials, Some(false));
}

#[test]
fn non_positive_or_unparseable_max_age_is_unset() {
    for age in ["0;", "-10;", "\"600\";", "soon;"] {
        let lines = split_lines(&format!(
            "{ORIGIN_IF}\n{METHODS}\nadd_header Access-Control-Max-Age {age}"
        ));

        let cfg = extract_cors_config(&lines).unwrap();

        assert_eq!(cfg.max_age, 0, "max age {age}");
    }
}

#[test]
fn missing_origin_regex_fails_extraction() {
    // Arrange
    let lines = split_lines(&format!("if ($http_origin = 'https://a.example') {{\n{METHODS}\n}}"));

    // Act
    let result = extract_cors_config(&lines);

    // Assert
    assert_eq!(result, Err(CorsExtractError::MissingOriginRegex));
}

//-----------------------------------------------------------------------------
// End to end through the converter
//-----------------------------------------------------------------------------

#[test]
fn conditional_cors_snippet_becomes_cors_middleware() {
    // Arrange
    let snippet = format!("{ORIGIN_IF}\n{METHODS}\n}}");

    // Act
    let result = run_snippet(&snippet);

    // Assert
    let mw = &result.middlewares[0];
    assert_eq!(mw.metadata.name, "web-cors");
    assert_eq!(mw.metadata.namespace, "shop");

    let headers = only_headers(&result);
    assert_eq!(headers.access_control_allow_origin_list_regex, vec![r"https://example\.com"]);
    assert_eq!(headers.access_control_allow_methods, vec!["GET", "POST"]);
    assert!(headers.access_control_allow_headers.is_empty());
    assert_eq!(headers.access_control_allow_credentials, None);
    assert_eq!(headers.access_control_max_age, 0);
    assert!(headers.custom_response_headers.is_empty());
    assert_eq!(
        result.warnings,
        vec![
            "conditional CORS snippet was partially parsed; verify generated middleware",
            "conditional NGINX CORS logic was converted to Traefik CORS middleware",
        ]
    );
}

#[test]
fn fully_parsed_cors_only_notes_the_conversion() {
    // Arrange
    let snippet = format!(
        "{ORIGIN_IF}\n{METHODS}\nadd_header Access-Control-Allow-Headers \"Authorization\";\n}}"
    );

    // Act
    let result = run_snippet(&snippet);

    // Assert
    assert_eq!(
        result.warnings,
        vec!["conditional NGINX CORS logic was converted to Traefik CORS middleware"]
    );
}

#[test]
fn disqualified_cors_block_falls_back_to_generic_handling() {
    // Arrange
    let snippet = format!("{ORIGIN_IF}\n{METHODS}\nrewrite ^ /foo;\n}}");

    // Act
    let result = run_snippet(&snippet);

    // Assert
    assert_eq!(result.middlewares.len(), 1);
    assert_eq!(result.middlewares[0].metadata.name, "web-snippet-headers");
    assert_eq!(
        only_headers(&result).custom_response_headers,
        map(&[("Access-Control-Allow-Methods", "GET, POST")])
    );
    assert_eq!(
        result.warnings,
        vec![
            format!("unsupported directive in configuration-snippet was ignored: {ORIGIN_IF}"),
            "unsupported directive in configuration-snippet was ignored: rewrite ^ /foo;"
                .to_string(),
            "unsupported directive in configuration-snippet was ignored: }".to_string(),
        ]
    );
}

#[test]
fn failed_extraction_warns_once_and_emits_nothing() {
    // Arrange
    let snippet = format!("if ($http_origin = 'https://a.example') {{\n{METHODS}\n}}");

    // Act
    let result = run_snippet(&snippet);

    // Assert
    assert!(result.middlewares.is_empty());
    assert_eq!(
        result.warnings,
        vec!["failed to parse conditional CORS snippet; skipped"]
    );
}
