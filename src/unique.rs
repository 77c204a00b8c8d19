use ahash::AHashSet;

use crate::error::{IdentityError, Result};

pub const MAX_RETRIES: u32 = 1000;

/// Remembers keys already handed out in a batch.
#[derive(Debug, Default)]
pub struct UniqueTracker {
    seen: AHashSet<String>,
}

impl UniqueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` was not seen before.
    pub fn try_insert(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_string())
    }

    /// Calls `gen` until it yields a value whose key is new.
    /// Retries up to MAX_RETRIES times.
    pub fn generate_unique<T, F, K>(&mut self, mut gen: F, key: K) -> Result<T>
    where
        F: FnMut() -> Result<T>,
        K: Fn(&T) -> &str,
    {
        for _ in 0..MAX_RETRIES {
            let value = gen()?;
            if self.try_insert(key(&value)) {
                return Ok(value);
            }
        }
        Err(IdentityError::UniqueExhausted(MAX_RETRIES))
    }
}
