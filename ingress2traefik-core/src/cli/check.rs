use crate::cli::{InputArgs, render_report};
use crate::convert::convert_all;
use crate::ingress::load_ingresses;

/// Converts without writing anything and reports what would need review.
///
/// Returns `Ok(true)` when the conversion is clean.
pub fn check(input: &InputArgs) -> anyhow::Result<bool> {
    let ingresses = load_ingresses(&input.path, &input.glob)?;
    let output = convert_all(&ingresses);

    render_report(&output.report, input.report_format())?;
    Ok(!output.report.has_issues())
}
