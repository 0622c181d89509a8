mod definition;
mod field;
mod graph;

pub use definition::*;
pub use field::*;
pub use graph::*;
