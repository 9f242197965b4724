use crate::convert::annotations::Annotation;
use crate::traefik::{IngressRoute, Middleware, ObjectMeta};
use std::collections::BTreeMap;

/// Everything emitted while converting one ingress.
///
/// Converters only ever append to it. Order of both lists is the order of detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionResult {
    pub middlewares: Vec<Middleware>,
    pub ingress_routes: Vec<IngressRoute>,
    pub warnings: Vec<String>,
    /// Conversions that could not be carried out at all.
    pub errors: Vec<String>,
}

impl ConversionResult {
    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn push_middleware(&mut self, middleware: Middleware) {
        self.middlewares.push(middleware);
    }
}

/// Input shared by every converter run against a single ingress.
pub struct ConvertCtx<'a> {
    pub annotations: &'a BTreeMap<String, String>,
    pub name: &'a str,
    pub namespace: &'a str,
    pub result: &'a mut ConversionResult,
}

impl<'a> ConvertCtx<'a> {
    pub fn new(
        annotations: &'a BTreeMap<String, String>,
        name: &'a str,
        namespace: &'a str,
        result: &'a mut ConversionResult,
    ) -> Self {
        Self {
            annotations,
            name,
            namespace,
            result,
        }
    }

    pub fn annotation(&self, key: Annotation) -> Option<&'a str> {
        self.annotations.get(key.as_str()).map(String::as_str)
    }

    /// `true` only when the annotation is literally `"true"`.
    pub fn is_enabled(&self, key: Annotation) -> bool {
        self.annotation(key) == Some("true")
    }

    /// `<ingress-name>-<suffix>` scoped to the ingress namespace.
    pub fn object_meta(&self, suffix: &str) -> ObjectMeta {
        ObjectMeta::new(mw_name(self.name, suffix), self.namespace)
    }
}

pub fn mw_name(base: &str, suffix: &str) -> String {
    format!("{base}-{suffix}")
}
