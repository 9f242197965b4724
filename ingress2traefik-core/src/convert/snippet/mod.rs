//! Translation of `nginx.ingress.kubernetes.io/configuration-snippet`.
//!
//! A snippet either matches the conditional CORS idiom and becomes a CORS
//! middleware, or every line is handled on its own and recognised header
//! directives become a single headers middleware. Never both.

pub mod cors;
pub mod headers;
pub mod lines;
pub mod vocabulary;

use crate::convert::annotations::Annotation;
use crate::convert::ctx::ConvertCtx;
use crate::traefik::{Headers, Middleware};
use cors::{CorsConfig, extract_cors_config, is_conditional_cors};
use headers::{SnippetHeaders, scan_headers};
use lines::{SnippetLine, split_lines};
use tracing::debug;

pub const HEADERS_SUFFIX: &str = "snippet-headers";
pub const CORS_SUFFIX: &str = "cors";

pub(crate) const CORS_PARSE_FAILED: &str = "failed to parse conditional CORS snippet; skipped";
pub(crate) const CORS_PARTIAL: &str =
    "conditional CORS snippet was partially parsed; verify generated middleware";
pub(crate) const CORS_CONVERTED: &str =
    "conditional NGINX CORS logic was converted to Traefik CORS middleware";

/// Converts the configuration-snippet annotation, if present.
pub fn configuration_snippet(ctx: &mut ConvertCtx<'_>) {
    debug!(converter = "configuration_snippet", "running converter");

    let Some(snippet) = ctx.annotation(Annotation::ConfigurationSnippet) else {
        return;
    };

    let lines = split_lines(snippet);
    if lines.is_empty() {
        return;
    }

    if is_conditional_cors(&lines) {
        match extract_cors_config(&lines) {
            Ok(cfg) => emit_cors_middleware(ctx, cfg),
            Err(err) => {
                debug!(ingress = ctx.name, error = %err, "conditional CORS extraction failed");
                ctx.result.warn(CORS_PARSE_FAILED);
            }
        }
        return;
    }

    convert_generic_snippet(ctx, &lines);
}

fn convert_generic_snippet(ctx: &mut ConvertCtx<'_>, lines: &[SnippetLine]) {
    let (headers, warnings) = scan_headers(lines);
    ctx.result.warnings.extend(warnings);

    if headers.is_empty() {
        return;
    }

    emit_headers_middleware(ctx, headers);
}

fn emit_headers_middleware(ctx: &mut ConvertCtx<'_>, headers: SnippetHeaders) {
    let meta = ctx.object_meta(HEADERS_SUFFIX);
    debug!(
        middleware = %meta.name,
        request = headers.request.len(),
        response = headers.response.len(),
        "emitting snippet headers middleware"
    );

    ctx.result.push_middleware(Middleware::headers(
        meta,
        Headers {
            custom_request_headers: headers.request,
            custom_response_headers: headers.response,
            ..Default::default()
        },
    ));
}

fn emit_cors_middleware(ctx: &mut ConvertCtx<'_>, cfg: CorsConfig) {
    let partial = cfg.allow_headers.is_empty() || cfg.allow_methods.is_empty();
    let meta = ctx.object_meta(CORS_SUFFIX);
    debug!(middleware = %meta.name, origin = %cfg.origin_regex, "emitting CORS middleware");

    ctx.result.push_middleware(Middleware::headers(
        meta,
        Headers {
            access_control_allow_methods: cfg.allow_methods,
            access_control_allow_headers: cfg.allow_headers,
            access_control_allow_origin_list_regex: vec![cfg.origin_regex],
            access_control_max_age: cfg.max_age,
            access_control_allow_credentials: cfg.allow_credentials,
            ..Default::default()
        },
    ));

    if partial {
        ctx.result.warn(CORS_PARTIAL);
    }
    ctx.result.warn(CORS_CONVERTED);
}
