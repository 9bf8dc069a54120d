pub mod macro_models;
pub mod macro_service;
pub mod macro_store;

pub use macro_models::Macro;
pub use macro_service::{MacroError, MacroService};
pub use macro_store::MacroStore;
