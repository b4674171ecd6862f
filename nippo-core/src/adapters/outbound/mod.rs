mod gsheets;
mod memory;
mod scripted;

pub use gsheets::*;
pub use memory::*;
pub use scripted::*;
