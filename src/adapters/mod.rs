//! Default implementations of the outbound ports.

mod argon2;
mod email;
mod memory;

pub use argon2::Argon2Encryptor;
pub use email::StandardEmailValidator;
pub use memory::MemoryAccountRepository;
