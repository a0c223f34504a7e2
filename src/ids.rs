//! Random order and transaction identifiers.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated identifiers.
pub const ID_LENGTH: usize = 10;

/// Source of fresh order and transaction identifiers.
///
/// Implementations are shared across threads; each call must return an
/// independent value.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Generates 10-character `[A-Za-z0-9]` identifiers from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect()
    }
}
