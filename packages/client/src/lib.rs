//! Welcome screen of the genkan video-conferencing client.
//!
//! The welcome screen offers an animated, randomly generated room name as
//! placeholder and resolves the user's input (a room name, or a server URL
//! followed by `/room`) into the conference to join.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
pub mod error;
