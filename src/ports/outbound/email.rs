//! Email format port.

/// Port deciding whether a string is a well-formed email address.
///
/// Implementations must be total: malformed input yields `false`.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}
