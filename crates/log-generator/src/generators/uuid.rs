//! UUID value generator.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Random (version 4) UUID drawn from `rng` instead of the OS source.
pub fn generate_uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Generate a fresh request identifier.
pub fn generate_request_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    generate_uuid_v4(rng)
}
