use crate::ingress::discover::discover;
use crate::ingress::error::ConvertError;
use crate::ingress::parse::parse_ingress_file;
use crate::ingress::types::SourcedIngress;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_GLOB: &str = "**/*.yaml";

/// Loads every ingress found at `path`.
///
/// A file is parsed directly. A directory is searched with `glob_pattern`
/// and every match is parsed in sorted order.
pub fn load_ingresses(
    path: &Path,
    glob_pattern: &str,
) -> Result<Vec<SourcedIngress>, ConvertError> {
    let files = if path.is_dir() {
        discover(path, glob_pattern)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut ingresses = Vec::new();
    for file in &files {
        let parsed = parse_ingress_file(file)?;
        debug!(file = %file.display(), count = parsed.len(), "loaded ingresses");
        ingresses.extend(parsed);
    }

    Ok(ingresses)
}
