//! Core primitives for folio (no DOM dependencies).

mod category;
mod config;
mod content;
mod gallery;
mod location;
mod prefs;
mod text;

pub use category::*;
pub use config::*;
pub use content::*;
pub use gallery::*;
pub use location::*;
pub use prefs::*;
pub use text::*;
