use crate::ingress::error::ConvertError;
use crate::ingress::types::{Ingress, SourcedIngress};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::trace;

pub fn parse_ingress_file(path: &Path) -> Result<Vec<SourcedIngress>, ConvertError> {
    let s = fs::read_to_string(path).map_err(|e| ConvertError::read_file(path, e))?;

    Ok(parse_ingress_str(&s, path)?
        .into_iter()
        .map(|ingress| SourcedIngress {
            file: path.to_path_buf(),
            ingress,
        })
        .collect())
}

/// Parses a (possibly multi-document) YAML stream and keeps only `kind: Ingress` documents.
pub fn parse_ingress_str(src: &str, path: &Path) -> Result<Vec<Ingress>, ConvertError> {
    let mut ingresses = Vec::new();

    for document in serde_yaml::Deserializer::from_str(src) {
        let value = Value::deserialize(document).map_err(|e| ConvertError::parse(path, e))?;

        if !is_ingress(&value) {
            trace!(file = %path.display(), "skipping non-ingress document");
            continue;
        }

        let ingress: Ingress =
            serde_yaml::from_value(value).map_err(|e| ConvertError::parse(path, e))?;
        ingresses.push(ingress);
    }

    Ok(ingresses)
}

fn is_ingress(value: &Value) -> bool {
    value.get("kind").and_then(Value::as_str) == Some("Ingress")
}
