//! Utilities shared by the genkan packages.

pub mod logger;
