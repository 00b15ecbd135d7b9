//! Country-code lookups over [`HumanPerson`], one per style.
//!
//! All of these are the same fold; they exist side by side so the styles can
//! be compared (and property tested against each other).

use super::resolver::Chain;
use crate::model::HumanPerson;
use tracing::debug;

/// Field names of the country-code chain, indexed by [`Chain::absent_at`].
pub const COUNTRY_CODE_PATH: [&str; 4] = ["person", "address", "country", "code"];

/// Resolves the country code with the [`Chain`] builder.
///
/// Logs, at `debug`, which link was missing when the chain comes up empty.
pub fn country_code(person: Option<HumanPerson>) -> Option<String> {
    let chain = Chain::new(person)
        .step(|person| person.address)
        .step(|address| address.country)
        .step(|country| country.code);

    match chain.absent_at() {
        Some(step) => debug!(step, missing = COUNTRY_CODE_PATH[step], "Chain short-circuited"),
        None => debug!(depth = chain.depth(), "Chain resolved"),
    }
    chain.resolve()
}

/// Monadic style: each `?` binds the present value or returns `None`.
pub fn country_code_bound(person: Option<HumanPerson>) -> Option<String> {
    let person = person?;
    let address = person.address?;
    let country = address.country?;
    let code = country.code?;
    Some(code)
}

/// Imperative style: nested presence checks with early return.
pub fn country_code_imperative(person: Option<HumanPerson>) -> Option<String> {
    if let Some(person) = person {
        if let Some(address) = person.address {
            if let Some(country) = address.country {
                return country.code;
            }
        }
    }
    None
}

/// Flat-map style: one `and_then` per link.
pub fn country_code_flat_mapped(person: Option<HumanPerson>) -> Option<String> {
    person
        .and_then(|person| person.address)
        .and_then(|address| address.country)
        .and_then(|country| country.code)
}

/// Borrowing variant for callers that keep ownership of the record.
pub fn country_code_ref(person: &HumanPerson) -> Option<&str> {
    person.address.as_ref()?.country.as_ref()?.code.as_deref()
}
