use rand::Rng;

use crate::generator::pick;
use crate::generator::vocab::{FIRST_NAMES, LAST_NAMES};
use crate::types::Person;

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

/// First and last name drawn independently, with replacement.
pub fn person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    let first_name = first_name(rng);
    let last_name = last_name(rng);
    Person {
        first_name,
        last_name,
    }
}
