mod form_session;
mod sheet_writer;

pub use form_session::*;
pub use sheet_writer::*;
