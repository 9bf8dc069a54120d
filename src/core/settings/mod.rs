pub mod settings_models;
pub mod settings_service;

pub use settings_models::{checkbox, SettingsSnapshot};
pub use settings_service::{AttachmentFetcher, FetchError, SettingsService};
