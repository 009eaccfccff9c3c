//! Configuration module

mod studio;

pub use studio::StudioConfig;
