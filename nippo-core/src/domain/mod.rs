mod error;

pub mod hours;
pub mod models;
pub mod ports;
pub mod services;
pub mod session;

pub use error::*;
