mod value_range;

pub use value_range::*;
