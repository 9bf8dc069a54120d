// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "admins/admin_service.rs"]
pub mod admins;

#[path = "macros/mod.rs"]
pub mod macros;

#[path = "settings/mod.rs"]
pub mod settings;

#[path = "dispatch/mod.rs"]
pub mod dispatch;
