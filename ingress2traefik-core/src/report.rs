use crate::convert::ConversionResult;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where an issue came from: the manifest file and the ingress inside it.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Origin {
    pub file: PathBuf,
    pub namespace: String,
    pub ingress: String,
}

impl Origin {
    pub fn new(file: &Path, namespace: &str, ingress: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            namespace: namespace.to_owned(),
            ingress: ingress.to_owned(),
        }
    }

    pub fn test(ingress: &str) -> Self {
        Self::new(Path::new("/test/ingress.yaml"), "default", ingress)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{}",
            self.file.display(),
            self.namespace,
            self.ingress
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionIssue {
    pub severity: Severity,
    pub message: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Every warning and error of a conversion run, in detection order.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub errors: Vec<ConversionIssue>,
    pub warnings: Vec<ConversionIssue>,
}

#[derive(Serialize)]
struct ConversionReportJson<'a> {
    errors: &'a [ConversionIssue],
    warnings: &'a [ConversionIssue],
}

impl ConversionReport {
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn record(&mut self, origin: &Origin, result: &ConversionResult) {
        for message in &result.errors {
            self.error(message.clone(), origin);
        }
        for message in &result.warnings {
            self.warning(message.clone(), origin);
        }
    }

    fn error(&mut self, message: String, origin: &Origin) {
        self.errors.push(ConversionIssue {
            severity: Severity::Error,
            message,
            origin: origin.clone(),
        });
    }

    fn warning(&mut self, message: String, origin: &Origin) {
        self.warnings.push(ConversionIssue {
            severity: Severity::Warning,
            message,
            origin: origin.clone(),
        });
    }

    pub fn render_json(&self, out: &mut impl Write) -> io::Result<()> {
        let json = ConversionReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)
    }

    pub fn render_plain(&self, out: &mut impl Write) -> io::Result<()> {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            writeln!(out, "{}:{}: {}", issue.origin, severity, issue.message)?;
        }
        Ok(())
    }

    pub fn render_pretty(&self, out: &mut impl Write) -> io::Result<()> {
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors == 0 && warnings == 0 {
            writeln!(out, "{} conversion finished without warnings", "✔".green())?;
            return Ok(());
        }

        writeln!(
            out,
            "conversion needs review ({} errors, {} warnings)\n",
            errors, warnings
        )?;

        let mut by_origin = BTreeMap::new();
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            by_origin
                .entry(&issue.origin)
                .or_insert(Vec::new())
                .push(issue);
        }

        for (origin, issues) in by_origin {
            writeln!(out, "{}", origin.bold())?;

            for issue in issues {
                match issue.severity {
                    Severity::Error => {
                        writeln!(out, "  {}: {}", "error".red().bold(), issue.message)?;
                    }
                    Severity::Warning => {
                        writeln!(out, "  {}: {}", "warning".yellow().bold(), issue.message)?;
                    }
                }
            }

            writeln!(out)?;
        }

        Ok(())
    }
}
