use crate::convert::annotations::Annotation;
use crate::convert::ctx::ConvertCtx;
use crate::traefik::{Headers, Middleware};
use std::collections::BTreeMap;
use tracing::debug;

pub fn upstream_vhost(ctx: &mut ConvertCtx<'_>) {
    debug!(converter = "upstream_vhost", "running converter");

    let Some(host) = ctx.annotation(Annotation::UpstreamVhost) else {
        return;
    };
    if host.trim().is_empty() {
        return;
    }

    let meta = ctx.object_meta("upstream-vhost");
    ctx.result.push_middleware(Middleware::headers(
        meta,
        Headers {
            custom_request_headers: BTreeMap::from([("Host".to_string(), host.to_string())]),
            ..Default::default()
        },
    ));
}
