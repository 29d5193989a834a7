//! PYRE Configurator Library
//!
//! Core engine and TUI for configuring the PYRE ceramic grill: the immutable
//! option catalog, a validated per-session state machine, pure pricing and
//! scene derivation, and the ratatui wizard that consumes them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod input;
pub mod pricing;
pub mod scene;
pub mod session;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{
    BaseOption, Catalog, CatalogList, ColorOption, EntryRef, ModuleOption, OptionCategory,
    BASE_PRICE, DEFAULT_COLOR_ID, NO_BASE_ID,
};
pub use error::{PyreTuiError, Result, SelectionError};
pub use pricing::{build_quote, total_price, LineItem, LineItemKind, Quote};
pub use scene::{derive_scene, Attachments, ScenePlan};
pub use session::{Configuration, ConfiguratorSession, WizardStep};
