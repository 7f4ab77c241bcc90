//! These traits define what the application can do.

pub mod add_account;

pub use add_account::*;
