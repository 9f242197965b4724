mod ingress_route;
mod middleware;

pub use ingress_route::{
    IngressRoute, IngressRouteSpec, MiddlewareRef, Route, RouteService, ServicePort,
};
pub use middleware::{Headers, Middleware, MiddlewareSpec, RedirectScheme};

use serde::{Deserialize, Serialize};

/// API group/version of the Traefik CRDs produced by the converters.
pub const API_VERSION: &str = "traefik.io/v1alpha1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Any generated Traefik resource, serialized as its own YAML document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraefikResource {
    Middleware(Middleware),
    IngressRoute(IngressRoute),
}

impl TraefikResource {
    pub fn name(&self) -> &str {
        match self {
            TraefikResource::Middleware(mw) => &mw.metadata.name,
            TraefikResource::IngressRoute(route) => &route.metadata.name,
        }
    }
}

/// Serializes resources as a multi-document YAML stream.
pub fn to_yaml_stream(resources: &[TraefikResource]) -> Result<String, serde_yaml::Error> {
    let mut out = String::new();
    for resource in resources {
        out.push_str("---\n");
        out.push_str(&serde_yaml::to_string(resource)?);
    }
    Ok(out)
}
