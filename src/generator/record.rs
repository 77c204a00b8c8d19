use rand::Rng;

use crate::error::Result;
use crate::generator::address::address_for;
use crate::generator::contact::{email, phone};
use crate::generator::names::person;
use crate::types::{Country, Identity, IdentityRequest};
use crate::unique::UniqueTracker;

/// Composes one full identity from the independent field generators.
///
/// The country is resolved first, so an unsupported one fails before any
/// field is produced.
pub fn identity<R: Rng + ?Sized>(rng: &mut R, request: &IdentityRequest) -> Result<Identity> {
    let country: Country = request.country.parse()?;
    Ok(identity_for(rng, country, request))
}

fn identity_for<R: Rng + ?Sized>(
    rng: &mut R,
    country: Country,
    request: &IdentityRequest,
) -> Identity {
    let p = person(rng);
    let address = address_for(rng, country, request.guarantee_nonexistent);
    let email = email(rng, &p.first_name, &p.last_name, request.email_domain.as_deref());
    let phone = phone(rng, country.code());
    Identity {
        first_name: p.first_name,
        last_name: p.last_name,
        email,
        phone,
        address,
    }
}

/// Generates `count` identities and hands each to `sink` as soon as it is
/// built, so nothing is buffered. Stops at the first error from `sink`.
///
/// `unique_emails` is a caller-level batch option: an identity whose email
/// repeats an earlier one is regenerated, up to the tracker's retry limit.
/// Single-field generation never retries.
pub fn generate_each<R, F>(
    rng: &mut R,
    request: &IdentityRequest,
    count: usize,
    unique_emails: bool,
    mut sink: F,
) -> Result<()>
where
    R: Rng + ?Sized,
    F: FnMut(Identity) -> Result<()>,
{
    let country: Country = request.country.parse()?;
    let mut tracker = UniqueTracker::new();

    for i in 0..count {
        let record = if unique_emails {
            tracker.generate_unique(
                || Ok(identity_for(&mut *rng, country, request)),
                |r: &Identity| r.email.as_str(),
            )?
        } else {
            identity_for(rng, country, request)
        };
        tracing::debug!(index = i, email = %record.email, "identity generated");
        sink(record)?;
    }

    Ok(())
}

/// Collects [`generate_each`] into a `Vec`. The vector grows as records
/// arrive; `count` is not reserved up front.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    request: &IdentityRequest,
    count: usize,
    unique_emails: bool,
) -> Result<Vec<Identity>> {
    let mut out = Vec::new();
    generate_each(rng, request, count, unique_emails, |record| {
        out.push(record);
        Ok(())
    })?;
    Ok(out)
}
