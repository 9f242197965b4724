/// ingress-nginx annotation keys understood by the converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    ConfigurationSnippet,
    SslRedirect,
    ForceSslRedirect,
    UpstreamVhost,
    BackendProtocol,
    GrpcBackend,
    ProxyBuffering,
    ServiceUpstream,
    EnableOpentracing,
    EnableOpentelemetry,
}

impl Annotation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Annotation::ConfigurationSnippet => "nginx.ingress.kubernetes.io/configuration-snippet",
            Annotation::SslRedirect => "nginx.ingress.kubernetes.io/ssl-redirect",
            Annotation::ForceSslRedirect => "nginx.ingress.kubernetes.io/force-ssl-redirect",
            Annotation::UpstreamVhost => "nginx.ingress.kubernetes.io/upstream-vhost",
            Annotation::BackendProtocol => "nginx.ingress.kubernetes.io/backend-protocol",
            Annotation::GrpcBackend => "nginx.ingress.kubernetes.io/grpc-backend",
            Annotation::ProxyBuffering => "nginx.ingress.kubernetes.io/proxy-buffering",
            Annotation::ServiceUpstream => "nginx.ingress.kubernetes.io/service-upstream",
            Annotation::EnableOpentracing => "nginx.ingress.kubernetes.io/enable-opentracing",
            Annotation::EnableOpentelemetry => "nginx.ingress.kubernetes.io/enable-opentelemetry",
        }
    }
}
