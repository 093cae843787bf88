//! Google People API response parsing.
//!
//! The People API returns richly nested `person` resources; the platform
//! frontend only needs a flat `{id, name, email, phone}` shape. Entries
//! with neither a name nor an email are dropped.

use serde::{Deserialize, Serialize};

/// Simplified contact returned to the platform.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Top-level `people/me/connections` response.
#[derive(Debug, Deserialize)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<Person>,
}

/// A single `person` resource, limited to the fields we request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub names: Vec<PersonName>,
    #[serde(default)]
    pub email_addresses: Vec<PersonEmail>,
    #[serde(default)]
    pub phone_numbers: Vec<PersonPhone>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonEmail {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonPhone {
    #[serde(default)]
    pub value: String,
}

/// Flatten a connections response into frontend-shaped contacts.
///
/// Takes the first (primary) name, email, and phone of each person and
/// keeps only entries with at least a name or an email.
pub fn simplify_connections(response: ConnectionsResponse) -> Vec<Contact> {
    response
        .connections
        .into_iter()
        .filter_map(|person| {
            let contact = Contact {
                id: person
                    .resource_name
                    .strip_prefix("people/")
                    .unwrap_or(&person.resource_name)
                    .to_string(),
                name: person
                    .names
                    .into_iter()
                    .next()
                    .map(|n| n.display_name)
                    .unwrap_or_default(),
                email: person
                    .email_addresses
                    .into_iter()
                    .next()
                    .map(|e| e.value)
                    .unwrap_or_default(),
                phone: person
                    .phone_numbers
                    .into_iter()
                    .next()
                    .map(|p| p.value)
                    .unwrap_or_default(),
            };

            if contact.name.is_empty() && contact.email.is_empty() {
                None
            } else {
                Some(contact)
            }
        })
        .collect()
}
