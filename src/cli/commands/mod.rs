pub mod analyze;
pub mod clean;
mod command_result;
pub mod helper;
pub mod init;

pub use command_result::*;
