//! Registration data model.

pub mod account;

pub use account::*;
