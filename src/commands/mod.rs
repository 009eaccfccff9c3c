//! CLI command implementations

pub mod admin;
pub mod init;
pub mod list;
pub mod reset;
