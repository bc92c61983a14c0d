use std::fmt;

use super::fields::{next_field, non_empty, parse_integer};
use super::{Record, RecordId};
use crate::ParseError;

/// A customer company.
///
/// Persisted as `id|company_name|contact_person|phone|email|address`. The address runs to
/// the end of the line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Client {
    id: RecordId,
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Client {
    pub fn new(
        id: RecordId,
        company_name: impl Into<String>,
        contact_person: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            contact_person: contact_person.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Company: {}, Contact person: {}, Phone: {}",
            self.id, self.company_name, self.contact_person, self.phone
        )
    }
}

impl Record for Client {
    const KIND: &'static str = "client";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn serialize(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id, self.company_name, self.contact_person, self.phone, self.email, self.address
        )
    }

    fn deserialize(line: &str) -> Result<Self, ParseError> {
        let mut fields = non_empty(line)?.splitn(6, '|');

        Ok(Self {
            id: parse_integer("id", next_field(&mut fields, "id")?)?,
            company_name: next_field(&mut fields, "company_name")?.to_string(),
            contact_person: next_field(&mut fields, "contact_person")?.to_string(),
            phone: next_field(&mut fields, "phone")?.to_string(),
            email: next_field(&mut fields, "email")?.to_string(),
            address: next_field(&mut fields, "address")?.to_string(),
        })
    }
}
