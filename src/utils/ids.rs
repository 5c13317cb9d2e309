//! Client-side id generation for todos that the remote service never persists.

use crate::constants::{LOCAL_ID_MAX, LOCAL_ID_MIN};
use rand::Rng;

/// Produces candidate ids for locally added todos.
pub trait IdSource: Send {
    fn next_id(&mut self) -> i64;
}

/// Uniform random ids in `LOCAL_ID_MIN..=LOCAL_ID_MAX`
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> i64 {
        rand::thread_rng().gen_range(LOCAL_ID_MIN..=LOCAL_ID_MAX)
    }
}

/// Deterministic ids counting up from a starting value
#[derive(Debug)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(LOCAL_ID_MIN)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
