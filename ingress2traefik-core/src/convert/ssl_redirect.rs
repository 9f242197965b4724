use crate::convert::annotations::Annotation;
use crate::convert::ctx::ConvertCtx;
use crate::traefik::{Middleware, RedirectScheme};
use tracing::debug;

/// Maps `ssl-redirect` / `force-ssl-redirect` onto a permanent https redirect.
pub fn ssl_redirect(ctx: &mut ConvertCtx<'_>) {
    debug!(converter = "ssl_redirect", "running converter");

    if !ctx.is_enabled(Annotation::SslRedirect) && !ctx.is_enabled(Annotation::ForceSslRedirect) {
        return;
    }

    let meta = ctx.object_meta("https-redirect");
    ctx.result.push_middleware(Middleware::redirect_scheme(
        meta,
        RedirectScheme {
            scheme: "https".to_string(),
            permanent: true,
        },
    ));
}
