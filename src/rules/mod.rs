//! Rule implementations.
//!
//! Each rule has a pure function that takes only the inputs it needs and a
//! thin `*_issues(ctx)` wrapper reading them from the `CheckContext`.
//!
//! ## Module Structure
//!
//! - `duplicate`: Names declared more than once in the base file
//! - `missing`: Base names missing from each locale file
//! - `unused`: Base names never referenced from source code

pub mod duplicate;
pub mod missing;
pub mod unused;
