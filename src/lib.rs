//! folio - a JSON-driven portfolio site rendered client-side.
//!
//! The page pipeline fetches one content document, fills the home or project
//! page template, and drives an image lightbox from user input. All DOM access
//! goes through the [`dom::Document`] trait, so the same code runs in the
//! browser (see the `web` module on `wasm32`) and against an in-memory
//! document in tests and in the `folio` preview binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use folio::prelude::*;
//!
//! let content = ContentSchema::from_json(&std::fs::read_to_string("data.json")?)?;
//! let location = Location::parse("project.html?id=p1");
//! let doc = MemoryDocument::for_location(&location, &SiteConfig::default());
//! let mut page = Page::new(doc, MemoryPreferenceStore::new(), SiteConfig::default(), location);
//! page.load(content);
//! page.dispatch(PageEvent::Click(ClickTarget::GalleryCell(0)));
//! ```

#![deny(missing_docs)]

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod core;
pub mod dom;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;
