mod field_source;
mod sheet_store;

pub use field_source::*;
pub use sheet_store::*;
