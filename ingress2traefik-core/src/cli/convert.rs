use crate::cli::{InputArgs, render_report};
use crate::convert::convert_all;
use crate::ingress::{ConvertError, load_ingresses};
use crate::traefik::to_yaml_stream;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Converts every ingress under `input` and writes the generated CRDs as YAML.
///
/// Output goes to `out` when given, stdout otherwise. The report always goes to stderr.
pub fn convert(input: &InputArgs, out: Option<&PathBuf>) -> anyhow::Result<()> {
    let ingresses = load_ingresses(&input.path, &input.glob)?;
    let output = convert_all(&ingresses);

    let yaml = to_yaml_stream(&output.resources)
        .map_err(|source| ConvertError::Serialize { source })?;

    match out {
        Some(path) => {
            fs::write(path, &yaml).map_err(|source| ConvertError::WriteFile {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(yaml.as_bytes())?;
            stdout.flush()?;
        }
    }

    info!(
        ingresses = ingresses.len(),
        resources = output.resources.len(),
        warnings = output.report.warnings.len(),
        errors = output.report.errors.len(),
        "conversion finished"
    );

    render_report(&output.report, input.report_format())?;
    Ok(())
}
