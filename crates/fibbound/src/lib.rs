//! fibbound library — application logic for the bound analyzer CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
