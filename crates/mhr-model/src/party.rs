//! Party and address value types shared by owners, submitting parties,
//! and giving notice parties.

use serde::{Deserialize, Serialize};

/// Civic address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub street_additional: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl Address {
    /// Returns true when the postal code is absent or blank.
    pub fn postal_code_blank(&self) -> bool {
        self.postal_code
            .as_deref()
            .map(|code| code.trim().is_empty())
            .unwrap_or(true)
    }
}

/// Individual name split into components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first: String,
    #[serde(default)]
    pub middle: Option<String>,
    pub last: String,
}

/// A submitting or giving notice party: a business name or a person name
/// with an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub person_name: Option<PersonName>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

impl Party {
    /// Full party name, uppercased, for permit count lookups.
    /// Business name wins over person name when both are present.
    pub fn lookup_name(&self) -> Option<String> {
        if let Some(name) = self.business_name.as_deref()
            && !name.trim().is_empty()
        {
            return Some(name.trim().to_uppercase());
        }
        let person = self.person_name.as_ref()?;
        if person.first.trim().is_empty() || person.last.trim().is_empty() {
            return None;
        }
        let mut name = person.first.trim().to_uppercase();
        name.push(' ');
        if let Some(middle) = person.middle.as_deref()
            && !middle.trim().is_empty()
        {
            name.push_str(&middle.trim().to_uppercase());
            name.push(' ');
        }
        name.push_str(&person.last.trim().to_uppercase());
        Some(name)
    }
}
