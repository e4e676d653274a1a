//! Buffer model and the text-editing actions built on it.

pub mod buffer;
pub mod selection;
pub mod wrap;

pub use buffer::{Buffer, Position, PositionRange, Selection};
