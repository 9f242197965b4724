use once_cell::sync::Lazy;
use std::collections::HashMap;

const ENTERPRISE_NOTE: &str =
    ". Traefik Enterprise provides an alternative, but it cannot be auto-converted.";

/// A directive Traefik has no equivalent for, with the message shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedDirective {
    pub message: &'static str,
    pub enterprise: bool,
}

impl UnsupportedDirective {
    const fn oss(message: &'static str) -> Self {
        Self {
            message,
            enterprise: false,
        }
    }

    const fn enterprise(message: &'static str) -> Self {
        Self {
            message,
            enterprise: true,
        }
    }

    pub fn warning(&self) -> String {
        if self.enterprise {
            format!("{}{}", self.message, ENTERPRISE_NOTE)
        } else {
            self.message.to_string()
        }
    }
}

static UNSUPPORTED: Lazy<HashMap<&'static str, UnsupportedDirective>> = Lazy::new(|| {
    HashMap::from([
        (
            "gzip",
            UnsupportedDirective::oss(
                "gzip is only configurable via middleware in Traefik and was ignored",
            ),
        ),
        (
            "gzip_comp_level",
            UnsupportedDirective::oss("gzip_comp_level is not configurable in Traefik"),
        ),
        (
            "gzip_types",
            UnsupportedDirective::oss("gzip_types is not configurable in Traefik"),
        ),
        (
            "proxy_buffer_size",
            UnsupportedDirective::oss("proxy_buffer_size is not supported in Traefik"),
        ),
        (
            "proxy_cache",
            UnsupportedDirective::enterprise("proxy_cache is not supported in Traefik OSS"),
        ),
    ])
});

/// Looks up a lower-cased directive keyword.
pub fn lookup(keyword: &str) -> Option<&'static UnsupportedDirective> {
    UNSUPPORTED.get(keyword)
}
