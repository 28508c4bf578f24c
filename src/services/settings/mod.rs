// Settings service module
// TOML configuration file plus environment overrides

pub mod service;

pub use service::{apply_overrides, SettingsService};
