//! Random room name generation.

pub mod word_list;

pub use word_list::WordListRoomNameGenerator;
