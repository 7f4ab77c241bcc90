//! Traits at the edges of the registration pipeline.

pub mod inbound;
pub mod outbound;
