//! Detection and extraction of the conditional CORS idiom:
//!
//! ```nginx
//! if ($http_origin ~* (https://example\.com)) {
//!     add_header Access-Control-Allow-Origin "$http_origin";
//!     add_header Access-Control-Allow-Methods "GET, POST";
//! }
//! ```
//!
//! Detection and extraction are separate passes so that "is this CORS" can be
//! decided without caring about what the block contains.

use crate::convert::snippet::lines::SnippetLine;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const ORIGIN_GUARD: &str = "if ($http_origin";
const ALLOW_HEADERS: &str = "access-control-allow-headers";
const ALLOW_METHODS: &str = "access-control-allow-methods";
const ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
const MAX_AGE: &str = "access-control-max-age";

/// Markers of a conditional block that does more than gate CORS headers.
const DISQUALIFIERS: &[&str] = &["rewrite", "proxy_pass", "fastcgi", "lua_"];

pub const DEFAULT_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

static ORIGIN_IF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$http_origin\s+~\*\s+\((.+?)\)\s*\)").expect("Failed to compile origin regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub origin_regex: String,
    pub allow_headers: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_credentials: Option<bool>,
    /// Seconds, `0` when unset.
    pub max_age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorsExtractError {
    #[error("no origin regex found")]
    MissingOriginRegex,
}

/// `true` when the snippet gates CORS headers on the request origin and does nothing else.
pub fn is_conditional_cors(lines: &[SnippetLine]) -> bool {
    let mut has_origin_guard = false;
    let mut has_methods = false;

    for line in lines {
        let l = line.lower.as_str();

        if l.contains(ORIGIN_GUARD) {
            has_origin_guard = true;
        }
        if l.contains(ALLOW_METHODS) {
            has_methods = true;
        }
        if is_disqualifying(l) {
            return false;
        }
    }

    has_origin_guard && has_methods
}

fn is_disqualifying(lower: &str) -> bool {
    DISQUALIFIERS.iter().any(|d| lower.contains(d)) || has_set_directive(lower)
}

/// A `set $var value;` statement on the line, including one opened after `{` or `;`.
///
/// Only the first token of each statement counts, so `set` used as a header value does not.
fn has_set_directive(lower: &str) -> bool {
    lower
        .split(['{', '}', ';'])
        .any(|statement| statement.split_whitespace().next() == Some("set"))
}

pub fn extract_cors_config(lines: &[SnippetLine]) -> Result<CorsConfig, CorsExtractError> {
    let mut cfg = CorsConfig {
        origin_regex: extract_origin_regex(lines).ok_or(CorsExtractError::MissingOriginRegex)?,
        ..Default::default()
    };

    for line in lines {
        let lower = line.lower.as_str();

        if lower.contains(ALLOW_HEADERS) {
            cfg.allow_headers = split_csv(last_quoted_segment(&line.raw).unwrap_or_default());
        } else if lower.contains(ALLOW_METHODS) {
            cfg.allow_methods = split_csv(last_quoted_segment(&line.raw).unwrap_or_default());
        } else if lower.contains(ALLOW_CREDENTIALS) {
            let value = last_quoted_segment(&line.raw)
                .unwrap_or_default()
                .to_lowercase();
            match value.as_str() {
                "true" => cfg.allow_credentials = Some(true),
                "false" => cfg.allow_credentials = Some(false),
                _ => {}
            }
        } else if lower.contains(MAX_AGE) {
            let age = extract_int(&line.raw);
            if age > 0 {
                cfg.max_age = age;
            }
        }
    }

    if cfg.allow_methods.is_empty() {
        cfg.allow_methods = DEFAULT_METHODS.iter().map(|m| m.to_string()).collect();
    }

    Ok(cfg)
}

fn extract_origin_regex(lines: &[SnippetLine]) -> Option<String> {
    lines
        .iter()
        .find_map(|l| ORIGIN_IF.captures(&l.raw))
        .map(|caps| caps[1].to_string())
}

/// Returns the quoted segment that ends last on the line, using both `"` and `'` as delimiters.
///
/// A segment opened by one quote character is only closed by the same character.
fn last_quoted_segment(line: &str) -> Option<&str> {
    let mut last = None;
    let mut open: Option<(char, usize)> = None;

    for (idx, c) in line.char_indices() {
        if c != '"' && c != '\'' {
            continue;
        }
        match open {
            Some((quote, start)) if quote == c => {
                last = Some(&line[start..idx]);
                open = None;
            }
            Some(_) => {}
            None => open = Some((c, idx + c.len_utf8())),
        }
    }

    last
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Last whitespace token, minus a trailing `;`, as base-10. Unparseable yields `0`.
fn extract_int(line: &str) -> i64 {
    line.split_whitespace()
        .last()
        .map(|tok| tok.strip_suffix(';').unwrap_or(tok))
        .and_then(|tok| tok.parse().ok())
        .unwrap_or(0)
}
