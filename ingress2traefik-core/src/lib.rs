pub mod cli;
pub mod convert;
pub mod ingress;
pub mod logging;
pub mod report;
pub mod traefik;
