use crate::convert::snippet::lines::SnippetLine;
use crate::convert::snippet::vocabulary;
use std::collections::BTreeMap;
use tracing::trace;

pub(crate) const VARIABLES_NOT_EVALUATED: &str =
    "proxy_set_header uses NGINX variables which are not evaluated by Traefik";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Request,
    Response,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub target: HeaderTarget,
    pub key: String,
    pub value: String,
}

/// Result of classifying one line: an optional header plus any diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutcome {
    pub entry: Option<HeaderEntry>,
    pub warnings: Vec<String>,
}

impl LineOutcome {
    fn header(target: HeaderTarget, key: String, value: String) -> Self {
        Self {
            entry: Some(HeaderEntry { target, key, value }),
            warnings: Vec::new(),
        }
    }

    fn warning(warning: impl Into<String>) -> Self {
        Self {
            entry: None,
            warnings: vec![warning.into()],
        }
    }
}

/// Request and response headers captured by the generic scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetHeaders {
    pub request: BTreeMap<String, String>,
    pub response: BTreeMap<String, String>,
}

impl SnippetHeaders {
    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.response.is_empty()
    }

    fn insert(&mut self, entry: HeaderEntry) {
        let map = match entry.target {
            HeaderTarget::Request => &mut self.request,
            HeaderTarget::Response => &mut self.response,
        };
        map.insert(entry.key, entry.value);
    }
}

type LineHandler = fn(&SnippetLine) -> LineOutcome;

/// Directive shapes the header parser knows how to translate.
const HANDLERS: &[(&str, LineHandler)] = &[
    ("more_set_headers", more_set_headers),
    ("add_header", add_header),
    ("proxy_set_header", proxy_set_header),
];

/// Classifies a single snippet line.
pub fn classify_line(line: &SnippetLine) -> LineOutcome {
    let keyword = line.keyword();

    if let Some((_, handler)) = HANDLERS.iter().find(|(k, _)| *k == keyword) {
        return handler(line);
    }

    if let Some(directive) = vocabulary::lookup(keyword) {
        return LineOutcome::warning(directive.warning());
    }

    LineOutcome::warning(format!(
        "unsupported directive in configuration-snippet was ignored: {}",
        line.raw
    ))
}

/// Runs every line through [`classify_line`], folding headers with last-write-wins.
pub fn scan_headers(lines: &[SnippetLine]) -> (SnippetHeaders, Vec<String>) {
    let mut headers = SnippetHeaders::default();
    let mut warnings = Vec::new();

    for line in lines {
        let outcome = classify_line(line);
        if let Some(entry) = outcome.entry {
            trace!(key = %entry.key, target = ?entry.target, "captured header");
            headers.insert(entry);
        }
        warnings.extend(outcome.warnings);
    }

    (headers, warnings)
}

fn parse_failure(line: &SnippetLine) -> LineOutcome {
    LineOutcome::warning(format!("failed to parse header directive: {}", line.raw))
}

//-----------------------------------------------------------------------------
// more_set_headers "Key: Value";
//-----------------------------------------------------------------------------
fn more_set_headers(line: &SnippetLine) -> LineOutcome {
    match parse_quoted_key_value(strip_terminator(&line.raw)) {
        Some((key, value)) => LineOutcome::header(HeaderTarget::Response, key, value),
        None => parse_failure(line),
    }
}

fn parse_quoted_key_value(line: &str) -> Option<(String, String)> {
    let start = line.find('"')?;
    let end = line.rfind('"')?;
    if end <= start {
        return None;
    }

    let (key, value) = line[start + 1..end].split_once(':')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

//-----------------------------------------------------------------------------
// add_header Key "Value";
//-----------------------------------------------------------------------------
fn add_header(line: &SnippetLine) -> LineOutcome {
    let fields: Vec<&str> = strip_terminator(&line.raw).split_whitespace().collect();
    if fields.len() < 3 {
        return parse_failure(line);
    }

    let key = fields[1].trim_matches('"').to_string();
    let value = fields[2..].join(" ").trim_matches('"').to_string();
    LineOutcome::header(HeaderTarget::Response, key, value)
}

//-----------------------------------------------------------------------------
// proxy_set_header Key Value;
//-----------------------------------------------------------------------------
fn proxy_set_header(line: &SnippetLine) -> LineOutcome {
    let fields: Vec<&str> = strip_terminator(&line.raw).split_whitespace().collect();
    if fields.len() < 3 {
        return parse_failure(line);
    }

    let key = fields[1].trim_matches('"').to_string();
    let value = fields[2..].join(" ");
    let uses_variables = value.contains('$');

    let mut outcome = LineOutcome::header(HeaderTarget::Request, key, value);
    if uses_variables {
        outcome.warnings.push(VARIABLES_NOT_EVALUATED.to_string());
    }
    outcome
}

fn strip_terminator(line: &str) -> &str {
    let line = line.trim();
    line.strip_suffix(';').unwrap_or(line)
}
