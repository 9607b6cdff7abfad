//! Validation check modules.
//!
//! Each module covers one family of business rules. Checks are pure
//! functions over the model types: they return the issues they found and
//! never mutate registry state.

pub mod charset;
pub mod checksum;
pub mod death;
pub mod description;
pub mod doc_id;
pub mod location;
pub mod owners;
pub mod ppr;
pub mod state;
