//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `data`: String entries, locations and resource files
//! - `parsers`: `strings.xml` extraction and source reference scanning
//! - `resources`: Discovery and loading of base/locale resource files
//! - `file_scanner`: Recursive source file discovery
//! - `editor`: Line-based removal of string declarations
//! - `context`: `CheckContext`, the per-run analysis state

pub mod context;
pub mod data;
pub mod editor;
pub mod file_scanner;
pub mod parsers;
pub mod resources;

pub use context::CheckContext;
pub use data::*;
