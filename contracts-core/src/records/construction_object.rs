use std::fmt;

use super::fields::{next_field, non_empty, parse_integer, parse_number, parse_variant};
use super::{ObjectType, Record, RecordId};
use crate::ParseError;

/// A building site that contracts are carried out on.
///
/// Persisted as `id|name|address|object_type|area`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionObject {
    id: RecordId,
    pub name: String,
    pub address: String,
    pub object_type: ObjectType,
    /// Floor area in square metres.
    pub area: f64,
}

impl ConstructionObject {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        address: impl Into<String>,
        object_type: ObjectType,
        area: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            object_type,
            area,
        }
    }
}

impl fmt::Display for ConstructionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Address: {}, Type: {}, Area: {}",
            self.id, self.name, self.address, self.object_type, self.area
        )
    }
}

impl Record for ConstructionObject {
    const KIND: &'static str = "construction object";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn serialize(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id, self.name, self.address, self.object_type, self.area
        )
    }

    fn deserialize(line: &str) -> Result<Self, ParseError> {
        let mut fields = non_empty(line)?.splitn(5, '|');

        Ok(Self {
            id: parse_integer("id", next_field(&mut fields, "id")?)?,
            name: next_field(&mut fields, "name")?.to_string(),
            address: next_field(&mut fields, "address")?.to_string(),
            object_type: parse_variant("object_type", next_field(&mut fields, "object_type")?)?,
            area: parse_number("area", next_field(&mut fields, "area")?)?,
        })
    }
}
