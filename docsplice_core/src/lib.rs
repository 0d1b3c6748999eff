//! `docsplice_core` extracts documentation written as structured comment
//! blocks in Lua sources and splices the rendered markdown into fixed regions
//! of a target document such as `README.md`.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Lua source file
//!   → Scanner (config blocks `--[=[@doc ... --]=]`, type blocks `---@doc.type`)
//!   → Decoder (TOML body → schema validation, `@class`/`@alias` → type doc)
//!   → Project (walks the corpus, sorts docs by category then name)
//!   → Renderers (one markdown fragment per doc)
//!   → Splicer (replaces lines between `<!-- auto-generate-s:KIND -->` markers)
//! ```
//!
//! ## Doc blocks
//!
//! ```lua
//! --[=[@doc
//!   category = "api"
//!   name = "delete_thread"
//!   desc = "Delete the specified thread."
//!
//!   [[args]]
//!   name = "thread_id"
//!   type = "string"
//!   desc = "thread id"
//! --]=]
//!
//! ---@doc.type
//! ---@class MyPlugin.Config
//! ---@field timeout integer
//!
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsplice_core::generate;
//! use docsplice_core::write_result;
//! use std::path::Path;
//!
//! let result = generate(Path::new(".")).unwrap();
//! if result.is_changed() {
//!     write_result(&result).unwrap();
//! }
//! ```

pub use config::*;
pub use doc::*;
pub use engine::*;
pub use error::*;
pub use render::*;
pub use splice::*;

pub mod config;
pub mod decoder;
mod doc;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod project;
pub mod provider;
mod render;
pub mod scanner;
mod splice;

#[cfg(test)]
mod __fixtures;
