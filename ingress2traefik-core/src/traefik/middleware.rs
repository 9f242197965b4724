use crate::traefik::{API_VERSION, ObjectMeta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Middleware {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: MiddlewareSpec,
}

impl Middleware {
    pub fn new(metadata: ObjectMeta, spec: MiddlewareSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: "Middleware".to_string(),
            metadata,
            spec,
        }
    }

    pub fn headers(metadata: ObjectMeta, headers: Headers) -> Self {
        Self::new(
            metadata,
            MiddlewareSpec {
                headers: Some(headers),
                ..Default::default()
            },
        )
    }

    pub fn redirect_scheme(metadata: ObjectMeta, redirect: RedirectScheme) -> Self {
        Self::new(
            metadata,
            MiddlewareSpec {
                redirect_scheme: Some(redirect),
                ..Default::default()
            },
        )
    }
}

/// Exactly one behaviour is set per middleware.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddlewareSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_scheme: Option<RedirectScheme>,
}

/// The Traefik `headers` middleware. Used both for custom header injection and for CORS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headers {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_request_headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_response_headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_allow_methods: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_allow_headers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_allow_origin_list_regex: Vec<String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub access_control_max_age: i64,

    /// `None` means the snippet never stated it, which is not the same as `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control_allow_credentials: Option<bool>,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectScheme {
    pub scheme: String,
    pub permanent: bool,
}
