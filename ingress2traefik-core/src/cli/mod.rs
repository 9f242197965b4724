mod check;
mod convert;

pub use check::check;
pub use convert::convert;

use crate::ingress::DEFAULT_GLOB;
use clap::{Args, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Ingress manifest file or directory of manifests
    pub path: PathBuf,

    /// Glob used to find manifests when PATH is a directory
    #[arg(long, default_value = DEFAULT_GLOB)]
    pub glob: String,

    /// Format of the warning report written to stderr
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl InputArgs {
    pub fn report_format(&self) -> ReportFormat {
        self.format.unwrap_or_else(default_report_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

pub fn default_report_format() -> ReportFormat {
    if io::stderr().is_terminal() {
        ReportFormat::Pretty
    } else {
        ReportFormat::Plain
    }
}

fn render_report(report: &crate::report::ConversionReport, format: ReportFormat) -> io::Result<()> {
    let mut err = io::stderr().lock();
    match format {
        ReportFormat::Pretty => report.render_pretty(&mut err),
        ReportFormat::Plain => report.render_plain(&mut err),
        ReportFormat::Json => report.render_json(&mut err),
    }
}
