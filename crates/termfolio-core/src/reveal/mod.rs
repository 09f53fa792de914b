//! Text reveal effects for section headers

pub mod scramble;

pub use scramble::Scramble;
