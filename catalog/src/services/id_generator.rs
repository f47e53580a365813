//! Random numeric id generation

use rand::Rng;

use crate::traits::IdGenerator;

/// Largest id handed out by [`RandomIdGenerator`]
pub const MAX_GENERATED_ID: u64 = 99_999;

/// Real id generator drawing uniformly from `0..=MAX_GENERATED_ID`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> u64 {
        rand::thread_rng().gen_range(0..=MAX_GENERATED_ID)
    }
}
