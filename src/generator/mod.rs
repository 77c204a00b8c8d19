pub mod address;
pub mod contact;
pub mod names;
pub mod place;
pub mod record;
pub mod vocab;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::types::{Address, Identity, IdentityRequest, Person};

/// A portable, reproducible random source: equal seeds give equal records
/// on every platform.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Owns one random source and hands out records from it.
///
/// Hold one per thread or task; generators share no state with each other.
#[derive(Debug, Clone)]
pub struct IdentityGenerator<R> {
    rng: R,
}

impl IdentityGenerator<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> IdentityGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn person(&mut self) -> Person {
        names::person(&mut self.rng)
    }

    pub fn email(&mut self, first_name: &str, last_name: &str, domain: Option<&str>) -> String {
        contact::email(&mut self.rng, first_name, last_name, domain)
    }

    pub fn address(&mut self, country: &str, guarantee_nonexistent: bool) -> Result<Address> {
        address::address(&mut self.rng, country, guarantee_nonexistent)
    }

    pub fn phone(&mut self, country: &str) -> String {
        contact::phone(&mut self.rng, country)
    }

    pub fn identity(&mut self, request: &IdentityRequest) -> Result<Identity> {
        record::identity(&mut self.rng, request)
    }

    pub fn batch(
        &mut self,
        request: &IdentityRequest,
        count: usize,
        unique_emails: bool,
    ) -> Result<Vec<Identity>> {
        record::generate_batch(&mut self.rng, request, count, unique_emails)
    }

    pub fn each<F>(
        &mut self,
        request: &IdentityRequest,
        count: usize,
        unique_emails: bool,
        sink: F,
    ) -> Result<()>
    where
        F: FnMut(Identity) -> Result<()>,
    {
        record::generate_each(&mut self.rng, request, count, unique_emails, sink)
    }
}
