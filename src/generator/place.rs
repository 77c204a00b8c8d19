use rand::Rng;

use crate::generator::pick;
use crate::generator::vocab::{
    CITY_PREFIXES, CITY_SUFFIXES, FICTITIOUS_WORDS, STREET_SUFFIXES, STREET_WORDS,
};

const FICTITIOUS_STREET_P: f64 = 0.3;
const SINGLE_WORD_STREET_P: f64 = 0.5;
const FICTITIOUS_CITY_P: f64 = 0.2;

/// House number, street name and suffix, e.g. `"482 Maple Ridge Ave"`.
///
/// About a third of streets are built from the fictitious vocabulary
/// ("Mock Sandbox"); the rest use one or two realistic street words.
pub fn street_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = if rng.gen_bool(FICTITIOUS_STREET_P) {
        format!("{} {}", pick(rng, FICTITIOUS_WORDS), pick(rng, FICTITIOUS_WORDS))
    } else if rng.gen_bool(SINGLE_WORD_STREET_P) {
        pick(rng, STREET_WORDS).to_string()
    } else {
        format!("{} {}", pick(rng, STREET_WORDS), pick(rng, STREET_WORDS))
    };
    let number = rng.gen_range(10..=9999u32);
    format!("{} {} {}", number, base, pick(rng, STREET_SUFFIXES))
}

/// `"Springfield"`-style prefix+suffix names, occasionally `"<Word>town"`.
pub fn city_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.gen_bool(FICTITIOUS_CITY_P) {
        format!("{}town", pick(rng, FICTITIOUS_WORDS))
    } else {
        format!("{}{}", pick(rng, CITY_PREFIXES), pick(rng, CITY_SUFFIXES))
    }
}
