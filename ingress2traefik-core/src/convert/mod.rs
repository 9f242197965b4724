pub mod annotations;
mod backend_protocol;
mod ctx;
mod extra_annotations;
pub mod snippet;
mod ssl_redirect;
#[cfg(test)]
mod tests;
mod upstream_vhost;

pub use backend_protocol::{
    build_ingress_route, entry_points_for_scheme, needs_ingress_route, resolve_scheme,
};
pub use ctx::{ConversionResult, ConvertCtx, mw_name};
pub use extra_annotations::extra_annotations;
pub use snippet::configuration_snippet;
pub use ssl_redirect::ssl_redirect;
pub use upstream_vhost::upstream_vhost;

use crate::ingress::{Ingress, SourcedIngress};
use crate::report::{ConversionReport, Origin};
use crate::traefik::TraefikResource;
use tracing::{debug, info};

/// An annotation converter. Reads `ctx.annotations` and appends to `ctx.result`.
pub type Converter = fn(&mut ConvertCtx<'_>);

/// Converters in the order they run for every ingress.
pub const CONVERTERS: &[Converter] = &[
    ssl_redirect,
    upstream_vhost,
    configuration_snippet,
    extra_annotations,
];

/// Runs every converter against one ingress, then builds its IngressRoute if one is needed.
pub fn convert_ingress(ingress: &Ingress) -> ConversionResult {
    let meta = &ingress.metadata;
    let mut result = ConversionResult::default();

    {
        let mut ctx = ConvertCtx::new(&meta.annotations, &meta.name, &meta.namespace, &mut result);
        for converter in CONVERTERS {
            converter(&mut ctx);
        }
    }

    if needs_ingress_route(&meta.annotations) {
        match build_ingress_route(ingress, &result.middlewares) {
            Ok(route) => result.ingress_routes.push(route),
            Err(err) => {
                debug!(ingress = %meta.name, error = %err, "ingress route not generated");
                result
                    .errors
                    .push(format!("IngressRoute was not generated: {err}"));
            }
        }
    }

    result
}

/// Generated resources for a whole run plus the report of everything the operator must review.
#[derive(Debug, Default)]
pub struct ConversionOutput {
    pub resources: Vec<TraefikResource>,
    pub report: ConversionReport,
}

pub fn convert_all(ingresses: &[SourcedIngress]) -> ConversionOutput {
    let mut output = ConversionOutput::default();

    for sourced in ingresses {
        let meta = &sourced.ingress.metadata;
        let result = convert_ingress(&sourced.ingress);

        info!(
            ingress = %meta.name,
            namespace = %meta.namespace,
            middlewares = result.middlewares.len(),
            ingress_routes = result.ingress_routes.len(),
            warnings = result.warnings.len(),
            "converted ingress"
        );

        let origin = Origin::new(&sourced.file, &meta.namespace, &meta.name);
        output.report.record(&origin, &result);

        output.resources.extend(
            result
                .middlewares
                .into_iter()
                .map(TraefikResource::Middleware),
        );
        output.resources.extend(
            result
                .ingress_routes
                .into_iter()
                .map(TraefikResource::IngressRoute),
        );
    }

    output
}
