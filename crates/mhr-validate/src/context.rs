//! Caller context for a validation run.

use chrono::{DateTime, Utc};

/// Account category of the submitting caller. Some rules only apply to
/// particular account categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountGroup {
    /// Manufacturer account: may register new homes and one transport
    /// permit per home.
    Manufacturer,
    /// Qualified supplier (lawyer/notary): restricted transfer shapes.
    QualifiedSupplier,
    /// Home dealership account.
    Dealership,
}

/// Immutable facts about the caller, fixed for the duration of one
/// validation run.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// Registry staff bypass several client-facing rules and unlock the
    /// staff-only registration types.
    pub is_staff: bool,
    pub account_group: Option<AccountGroup>,
    /// The single clock reading used by every date rule in the run.
    pub now: DateTime<Utc>,
}

impl ValidationContext {
    pub fn staff(now: DateTime<Utc>) -> Self {
        Self {
            is_staff: true,
            account_group: None,
            now,
        }
    }

    pub fn client(now: DateTime<Utc>) -> Self {
        Self {
            is_staff: false,
            account_group: None,
            now,
        }
    }

    pub fn with_account_group(mut self, group: AccountGroup) -> Self {
        self.account_group = Some(group);
        self
    }

    pub fn is_manufacturer(&self) -> bool {
        self.account_group == Some(AccountGroup::Manufacturer)
    }

    pub fn is_qualified_supplier(&self) -> bool {
        self.account_group == Some(AccountGroup::QualifiedSupplier)
    }

    pub fn is_dealership(&self) -> bool {
        self.account_group == Some(AccountGroup::Dealership)
    }
}
