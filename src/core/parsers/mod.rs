//! File parsers for resource and source files.
//!
//! - `xml`: Android `strings.xml` parser (string entry extraction)
//! - `source`: Java/Kotlin source scanner (`R.string.<name>` references)

pub mod source;
pub mod xml;
