mod discover;
mod error;
mod loader;
mod parse;
#[cfg(test)]
mod tests;
pub mod types;

pub use discover::{discover, resolve_glob};
pub use error::ConvertError;
pub use loader::{DEFAULT_GLOB, load_ingresses};
pub use parse::{parse_ingress_file, parse_ingress_str};
pub use types::{Ingress, SourcedIngress};
