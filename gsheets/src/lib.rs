mod auth;
mod client;
mod sheets_url;
pub mod domain;

pub(crate) use sheets_url::*;

pub use auth::*;
pub use client::*;
