use std::fmt;

use super::fields::{
    ensure_exhausted, next_field, non_empty, parse_integer, parse_number, parse_variant,
};
use super::{ContractStatus, Date, Record, RecordId, WorkType};
use crate::ParseError;

/// An agreement to carry out work for a client on a construction object.
///
/// `client_id` and `object_id` are soft references: nothing checks that the records they
/// name exist, and readers must cope with dangling ids.
///
/// Persisted as `id client_id object_id day month year duration amount` separated by
/// spaces, immediately followed by `|work_type|status|manager`.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    id: RecordId,
    pub client_id: RecordId,
    pub object_id: RecordId,
    pub start_date: Date,
    /// Term in days.
    pub duration: u32,
    pub amount: f64,
    pub work_type: WorkType,
    pub status: ContractStatus,
    pub manager: String,
}

impl Contract {
    pub fn new(
        id: RecordId,
        client_id: RecordId,
        object_id: RecordId,
        start_date: Date,
        duration: u32,
        amount: f64,
        work_type: WorkType,
        status: ContractStatus,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            id,
            client_id,
            object_id,
            start_date,
            duration,
            amount,
            work_type,
            status,
            manager: manager.into(),
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract #{}, client ID: {}, object ID: {}, start date: {}, term: {} days, \
             amount: {:.0}, work type: {}, status: {}, manager: {}",
            self.id,
            self.client_id,
            self.object_id,
            self.start_date,
            self.duration,
            self.amount,
            self.work_type,
            self.status,
            self.manager
        )
    }
}

impl Record for Contract {
    const KIND: &'static str = "contract";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn serialize(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}|{}|{}|{}",
            self.id,
            self.client_id,
            self.object_id,
            self.start_date.day(),
            self.start_date.month(),
            self.start_date.year(),
            self.duration,
            self.amount,
            self.work_type,
            self.status,
            self.manager
        )
    }

    fn deserialize(line: &str) -> Result<Self, ParseError> {
        let (numbers, text) = non_empty(line)?
            .split_once('|')
            .ok_or(ParseError::MissingField("work_type"))?;

        let mut numbers = numbers.split_whitespace();
        let id = parse_integer("id", next_field(&mut numbers, "id")?)?;
        let client_id = parse_integer("client_id", next_field(&mut numbers, "client_id")?)?;
        let object_id = parse_integer("object_id", next_field(&mut numbers, "object_id")?)?;
        let day = parse_integer("day", next_field(&mut numbers, "day")?)?;
        let month = parse_integer("month", next_field(&mut numbers, "month")?)?;
        let year = parse_integer("year", next_field(&mut numbers, "year")?)?;
        let duration = parse_integer("duration", next_field(&mut numbers, "duration")?)?;
        let amount = parse_number("amount", next_field(&mut numbers, "amount")?)?;
        ensure_exhausted(numbers)?;

        let mut text = text.splitn(3, '|');
        let work_type = parse_variant("work_type", next_field(&mut text, "work_type")?)?;
        let status = parse_variant("status", next_field(&mut text, "status")?)?;
        let manager = next_field(&mut text, "manager")?.to_string();

        Ok(Self {
            id,
            client_id,
            object_id,
            start_date: Date::new(day, month, year),
            duration,
            amount,
            work_type,
            status,
            manager,
        })
    }
}
