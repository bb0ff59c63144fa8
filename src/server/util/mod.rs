//! Small parsing helpers shared by controllers and models.

pub mod parse;
