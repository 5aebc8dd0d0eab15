//! Actions for processing issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute / simulate (file modification or dry run)
//! ```
//!
//! ## Actions
//!
//! - [`RemoveString`]: Delete unused `<string>` declarations (clean)

mod operation;
mod remove_string;
mod traits;

pub use operation::{Operation, OperationResult};
pub use remove_string::RemoveString;
pub use traits::{Action, ActionStats};
