pub mod common;
pub mod index;
pub mod java;
pub mod resolver;

pub use common::ImportDeclaration;
pub use index::{build_index, ImportIndex};
pub use resolver::{resolve, ResolvedType};
