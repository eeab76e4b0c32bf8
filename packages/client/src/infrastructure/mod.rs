//! Infrastructure layer: implementations of the domain collaborator traits.

pub mod navigator;
pub mod normalizer;
pub mod room_name;
