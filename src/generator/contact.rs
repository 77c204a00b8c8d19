use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::generator::pick;
use crate::generator::vocab::{NANP_AREA_CODES, RESERVED_EMAIL_DOMAINS};
use crate::types::Country;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Stand-in for a name component that slugs to nothing.
const EMPTY_SLUG_PLACEHOLDER: &str = "user";

/// Lower-case `s`, collapse every run of non-alphanumerics to a single `.`
/// and strip leading/trailing dots.
pub fn slug(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, ".")
        .trim_matches('.')
        .to_string()
}

fn slug_or_placeholder(s: &str) -> String {
    let slugged = slug(s);
    if slugged.is_empty() {
        EMPTY_SLUG_PLACEHOLDER.to_string()
    } else {
        slugged
    }
}

/// Builds `<local>@<domain>` from one of five local-part templates.
///
/// `domain` overrides the reserved example domains; a blank override is
/// ignored. Names that slug to nothing become `user`.
pub fn email<R: Rng + ?Sized>(
    rng: &mut R,
    first_name: &str,
    last_name: &str,
    domain: Option<&str>,
) -> String {
    let first = slug_or_placeholder(first_name);
    let last = slug_or_placeholder(last_name);

    let local = match rng.gen_range(0..5u8) {
        0 => format!("{}.{}{}", first, last, rng.gen_range(10..=9999u32)),
        1 => format!("{}{}{}", first, last, rng.gen_range(10..=999u32)),
        2 => {
            let initial = first.chars().next().unwrap_or('u');
            format!("{}{}{}", initial, last, rng.gen_range(10..=9999u32))
        }
        3 => format!("{}_{}{}", first, last, rng.gen_range(10..=999u32)),
        _ => format!("{}{}", first, rng.gen_range(10..=999u32)),
    };

    let domain = match domain.map(|d| d.trim().trim_start_matches('@')) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => pick(rng, RESERVED_EMAIL_DOMAINS).to_string(),
    };

    format!("{}@{}", local, domain)
}

/// Display format used by [`phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// `(AAA) EEE-SSSS`, shared by the US and Canada.
    Nanp,
    /// `04xx xxx xxx`.
    AuMobile,
}

impl PhoneFormat {
    /// Lenient resolution: Australian aliases get the mobile format and every
    /// other input, recognised or not, falls back to NANP.
    ///
    /// Unlike address generation this never rejects a country.
    pub fn for_country(country: &str) -> Self {
        match country.trim().to_uppercase().as_str() {
            "AU" | "AUS" | "AUSTRALIA" => PhoneFormat::AuMobile,
            _ => PhoneFormat::Nanp,
        }
    }
}

pub fn phone<R: Rng + ?Sized>(rng: &mut R, country: &str) -> String {
    let format = PhoneFormat::for_country(country);
    if format == PhoneFormat::Nanp && country.parse::<Country>().is_err() {
        tracing::debug!(country, "unrecognised country, using NANP phone format");
    }
    phone_in_format(rng, format)
}

pub fn phone_in_format<R: Rng + ?Sized>(rng: &mut R, format: PhoneFormat) -> String {
    match format {
        PhoneFormat::Nanp => nanp_phone(rng),
        PhoneFormat::AuMobile => au_mobile(rng),
    }
}

fn nanp_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = NANP_AREA_CODES[rng.gen_range(0..NANP_AREA_CODES.len())];
    // exchange codes never start with 0 or 1
    let exchange = rng.gen_range(200..=999u16);
    let subscriber = rng.gen_range(0..=9999u16);
    format!("({}) {}-{:04}", area, exchange, subscriber)
}

fn au_mobile<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "04{} {} {}",
        rng.gen_range(10..=99u16),
        rng.gen_range(100..=999u16),
        rng.gen_range(100..=999u16)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("  Mary-Jane  O'Neil "), "mary.jane.o.neil");
        assert_eq!(slug("--Quinn--"), "quinn");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn empty_names_use_placeholder() {
        assert_eq!(slug_or_placeholder(""), "user");
        assert_eq!(slug_or_placeholder("Riley"), "riley");
    }

    #[test]
    fn phone_format_resolution() {
        assert_eq!(PhoneFormat::for_country("au"), PhoneFormat::AuMobile);
        assert_eq!(PhoneFormat::for_country(" Australia "), PhoneFormat::AuMobile);
        assert_eq!(PhoneFormat::for_country("CA"), PhoneFormat::Nanp);
        assert_eq!(PhoneFormat::for_country("FR"), PhoneFormat::Nanp);
    }
}
