//! Business rule validation for manufactured home registry registrations.
//!
//! One entry point per registration category. Each validator takes the
//! proposed request, the home's current snapshot where one exists, the
//! caller context, and the registry collaborators, and returns a
//! [`ValidationReport`](mhr_model::ValidationReport) with every rule
//! violation found. Validators never mutate registry state.

pub mod checks;
mod context;
pub mod messages;
mod store;
mod validators;

pub use context::{AccountGroup, ValidationContext};
pub use store::{Draft, ParcelLookup, RegistrationStore, StoreError};
pub use validators::{
    validate_admin_registration, validate_exemption, validate_new_registration, validate_permit,
    validate_transfer,
};
