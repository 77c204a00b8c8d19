pub mod config;
pub mod error;
pub mod generator;
pub mod types;
pub mod unique;

pub use error::{IdentityError, Result};
pub use generator::address::address;
pub use generator::contact::{email, phone, PhoneFormat};
pub use generator::names::person;
pub use generator::record::{generate_batch, generate_each, identity};
pub use generator::{seeded_rng, IdentityGenerator};
pub use types::{Address, Country, Identity, IdentityRequest, Person};
