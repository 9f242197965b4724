/// One trimmed, non-empty snippet line.
///
/// `lower` is only used for keyword and pattern matching. Values are always
/// extracted from `raw` because quoted values may be case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLine {
    pub raw: String,
    pub lower: String,
}

impl SnippetLine {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
        }
    }

    /// Lower-cased directive keyword of this line.
    pub fn keyword(&self) -> &str {
        directive(&self.lower)
    }
}

pub fn split_lines(snippet: &str) -> Vec<SnippetLine> {
    snippet
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(SnippetLine::new)
        .collect()
}

/// First whitespace-delimited token, or `""` for a blank line.
pub fn directive(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
