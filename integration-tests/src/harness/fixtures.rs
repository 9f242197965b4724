use ingress2traefik_core::convert::{ConversionOutput, convert_all};
use ingress2traefik_core::ingress::{DEFAULT_GLOB, SourcedIngress, load_ingresses};
use std::path::PathBuf;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture(file: &str) -> PathBuf {
    fixtures_root().join("ingress").join(file)
}

pub fn load_fixture(file: &str) -> Vec<SourcedIngress> {
    load_ingresses(&fixture(file), DEFAULT_GLOB).expect("failed to load ingress fixture")
}

pub fn convert_fixture(file: &str) -> ConversionOutput {
    convert_all(&load_fixture(file))
}

/// Parses a generated multi-document YAML stream back into generic values.
pub fn parse_stream(yaml: &str) -> Vec<serde_yaml::Value> {
    use serde::Deserialize;

    serde_yaml::Deserializer::from_str(yaml)
        .map(|doc| serde_yaml::Value::deserialize(doc).expect("generated YAML is invalid"))
        .collect()
}
