use crate::convert::annotations::Annotation;
use crate::convert::ctx::ConvertCtx;
use tracing::debug;

/// Annotations that have no per-ingress Traefik equivalent and only produce guidance.
pub fn extra_annotations(ctx: &mut ConvertCtx<'_>) {
    debug!(converter = "extra_annotations", "running converter");

    if ctx.annotation(Annotation::ProxyBuffering) == Some("off") {
        ctx.result.warn("proxy-buffering=off is default behavior in Traefik");
    }

    if ctx.is_enabled(Annotation::ServiceUpstream) {
        ctx.result.warn("service-upstream=true is default behavior in Traefik");
    }

    if ctx.is_enabled(Annotation::EnableOpentracing) {
        ctx.result.warn(
            "enable-opentracing is global in Traefik and cannot be enabled per Ingress",
        );
    }

    if ctx.is_enabled(Annotation::EnableOpentelemetry) {
        ctx.result.warn(
            "enable-opentelemetry must be configured globally in Traefik static config:\n\
             tracing:\n  otlp:\n    grpc:\n      endpoint: otel-collector:4317",
        );
    }

    if ctx
        .annotation(Annotation::BackendProtocol)
        .is_some_and(|v| !v.is_empty())
    {
        ctx.result.warn(
            "backend-protocol must be applied to IngressRoute service scheme, check for generated ingressroutes",
        );
    }

    if ctx.is_enabled(Annotation::GrpcBackend) {
        ctx.result.warn(
            "grpc-backend requires IngressRoute service scheme h2c or https+h2, check for generated ingressroutes",
        );
    }
}
