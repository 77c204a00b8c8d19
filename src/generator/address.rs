use rand::Rng;

use crate::error::Result;
use crate::generator::pick;
use crate::generator::place::{city_name, street_line};
use crate::generator::vocab::{
    AU_SENTINEL_POSTCODE, AU_SENTINEL_REGION, AU_STATES, CA_ALLOWED_LETTERS,
    CA_FORBIDDEN_LETTERS, CA_PROVINCES, CA_SENTINEL_REGION, US_SENTINEL_POSTCODE,
    US_SENTINEL_REGION, US_STATES,
};
use crate::types::{Address, Country};

/// Builds an address for `country` (code or alias, case-insensitive).
///
/// With `guarantee_nonexistent` the region and postcode are reserved values
/// that no postal system routes:
///
/// - US: `ZZ` / `00000`
/// - CA: `ZZ` / a postal code whose first letter is one of `DFIOQU`
/// - AU: `XX` / `0000`
///
/// Otherwise both are drawn from the real region list and a well-formed
/// postcode range. Street and city are cosmetic in either mode.
///
/// Fails with `UnsupportedCountry` before drawing anything from `rng`.
pub fn address<R: Rng + ?Sized>(
    rng: &mut R,
    country: &str,
    guarantee_nonexistent: bool,
) -> Result<Address> {
    let country: Country = country.parse()?;
    Ok(address_for(rng, country, guarantee_nonexistent))
}

pub fn address_for<R: Rng + ?Sized>(
    rng: &mut R,
    country: Country,
    guarantee_nonexistent: bool,
) -> Address {
    tracing::debug!(%country, guarantee_nonexistent, "generating address");
    let line1 = street_line(rng);
    let city = city_name(rng);
    let (region, postcode) = match country {
        Country::Us => us_region_postcode(rng, guarantee_nonexistent),
        Country::Ca => ca_region_postcode(rng, guarantee_nonexistent),
        Country::Au => au_region_postcode(rng, guarantee_nonexistent),
    };
    Address {
        line1,
        line2: String::new(),
        city,
        region,
        postcode,
        country,
    }
}

fn us_region_postcode<R: Rng + ?Sized>(rng: &mut R, nonexistent: bool) -> (String, String) {
    if nonexistent {
        (US_SENTINEL_REGION.to_string(), US_SENTINEL_POSTCODE.to_string())
    } else {
        let state = pick(rng, US_STATES).to_string();
        (state, rng.gen_range(10000..=99999u32).to_string())
    }
}

fn ca_region_postcode<R: Rng + ?Sized>(rng: &mut R, nonexistent: bool) -> (String, String) {
    if nonexistent {
        (CA_SENTINEL_REGION.to_string(), ca_postal_code(rng, false))
    } else {
        let province = pick(rng, CA_PROVINCES).to_string();
        (province, ca_postal_code(rng, true))
    }
}

fn au_region_postcode<R: Rng + ?Sized>(rng: &mut R, nonexistent: bool) -> (String, String) {
    if nonexistent {
        (AU_SENTINEL_REGION.to_string(), AU_SENTINEL_POSTCODE.to_string())
    } else {
        let state = pick(rng, AU_STATES).to_string();
        (state, rng.gen_range(1000..=9999u32).to_string())
    }
}

/// `A1A 1A1`. The first letter comes from the allowed set when `valid`,
/// from the forbidden set otherwise; every other letter is always allowed.
pub fn ca_postal_code<R: Rng + ?Sized>(rng: &mut R, valid: bool) -> String {
    let first_pool = if valid { CA_ALLOWED_LETTERS } else { CA_FORBIDDEN_LETTERS };
    let mut letter = |pool: &[u8]| pool[rng.gen_range(0..pool.len())] as char;

    let first = letter(first_pool);
    let second = letter(CA_ALLOWED_LETTERS);
    let third = letter(CA_ALLOWED_LETTERS);
    let d1 = rng.gen_range(0..10u8);
    let d2 = rng.gen_range(0..10u8);
    let d3 = rng.gen_range(0..10u8);
    format!("{}{}{} {}{}{}", first, d1, second, d2, third, d3)
}
