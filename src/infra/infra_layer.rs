// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

pub mod json_file;

#[path = "admins/json_store.rs"]
pub mod admins;

#[path = "macros/json_store.rs"]
pub mod macros;

#[path = "settings/http_fetcher.rs"]
pub mod settings;

pub use admins::JsonAdminStore;
pub use macros::JsonMacroStore;
pub use settings::HttpAttachmentFetcher;
