pub mod config;
pub mod convert;
pub mod envelope;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod security;
pub mod server;
pub mod skill;
