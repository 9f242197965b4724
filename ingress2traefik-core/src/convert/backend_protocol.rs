use crate::convert::annotations::Annotation;
use crate::convert::ctx::mw_name;
use crate::ingress::ConvertError;
use crate::ingress::types::{HttpIngressPath, Ingress, ServiceBackendPort};
use crate::traefik::{
    IngressRoute, IngressRouteSpec, Middleware, MiddlewareRef, ObjectMeta, Route, RouteService,
    ServicePort,
};
use std::collections::BTreeMap;
use tracing::debug;

pub const INGRESS_ROUTE_SUFFIX: &str = "ingressroute";

/// Service scheme Traefik must use to reach the backend.
pub fn resolve_scheme(
    annotations: &BTreeMap<String, String>,
) -> Result<&'static str, ConvertError> {
    let get = |key: Annotation| annotations.get(key.as_str()).map(String::as_str);

    if get(Annotation::GrpcBackend) == Some("true") {
        return Ok("h2c");
    }

    let protocol = get(Annotation::BackendProtocol).unwrap_or_default();
    match protocol.to_uppercase().as_str() {
        "" | "HTTP" => Ok("http"),
        "HTTPS" => Ok("https"),
        "GRPC" => Ok("h2c"),
        "GRPCS" => Ok("https"),
        _ => Err(ConvertError::UnsupportedBackendProtocol {
            protocol: protocol.to_string(),
        }),
    }
}

pub fn entry_points_for_scheme(scheme: &str) -> Vec<String> {
    match scheme {
        "https" => vec!["websecure".to_string()],
        _ => vec!["web".to_string()],
    }
}

/// A plain Ingress cannot express a backend scheme, so these annotations need an IngressRoute.
pub fn needs_ingress_route(annotations: &BTreeMap<String, String>) -> bool {
    annotations.get(Annotation::GrpcBackend.as_str()).map(String::as_str) == Some("true")
        || annotations.contains_key(Annotation::BackendProtocol.as_str())
}

/// Builds the IngressRoute for `ingress`, attaching every middleware generated for it.
pub fn build_ingress_route(
    ingress: &Ingress,
    middlewares: &[Middleware],
) -> Result<IngressRoute, ConvertError> {
    let meta = &ingress.metadata;
    let scheme = resolve_scheme(&meta.annotations)?;

    let middleware_refs: Vec<MiddlewareRef> = middlewares
        .iter()
        .map(|mw| MiddlewareRef {
            name: mw.metadata.name.clone(),
            namespace: mw.metadata.namespace.clone(),
        })
        .collect();

    let mut routes = Vec::new();
    for rule in &ingress.spec.rules {
        let Some(http) = &rule.http else {
            continue;
        };

        for path in &http.paths {
            let Some(service) = &path.backend.service else {
                debug!(ingress = %meta.name, "skipping path without service backend");
                continue;
            };

            routes.push(Route {
                match_rule: match_rule(rule.host.as_deref(), path),
                kind: "Rule".to_string(),
                services: vec![RouteService {
                    name: service.name.clone(),
                    port: service_port(&service.port),
                    scheme: scheme.to_string(),
                }],
                middlewares: middleware_refs.clone(),
            });
        }
    }

    Ok(IngressRoute::new(
        ObjectMeta::new(mw_name(&meta.name, INGRESS_ROUTE_SUFFIX), meta.namespace.clone()),
        IngressRouteSpec {
            entry_points: entry_points_for_scheme(scheme),
            routes,
        },
    ))
}

fn match_rule(host: Option<&str>, path: &HttpIngressPath) -> String {
    let mut parts = Vec::new();

    if let Some(host) = host.filter(|h| !h.is_empty()) {
        parts.push(format!("Host(`{host}`)"));
    }

    let p = path.path.as_deref().filter(|p| !p.is_empty()).unwrap_or("/");
    match path.path_type.as_deref() {
        Some("Exact") => parts.push(format!("Path(`{p}`)")),
        _ => parts.push(format!("PathPrefix(`{p}`)")),
    }

    parts.join(" && ")
}

fn service_port(port: &ServiceBackendPort) -> ServicePort {
    match (&port.number, &port.name) {
        (Some(number), _) => ServicePort::Number(*number),
        (None, Some(name)) => ServicePort::Name(name.clone()),
        (None, None) => ServicePort::Number(80),
    }
}
