use std::fmt;

use crate::ParseError;

/// Identifier shared by every stored record. Unique within one repository only.
pub type RecordId = i32;

/// Capabilities every persisted entity provides to a [`Repository`](crate::Repository).
///
/// `deserialize` is the left inverse of `serialize` for any record built through the
/// public constructors, as long as no text field contains the format's delimiter.
/// Delimiters inside text are not escaped.
pub trait Record: fmt::Display + Sized {
    /// Short name of the record kind, used in log output.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Human-readable one-line description for console output.
    fn render(&self) -> String {
        self.to_string()
    }

    /// Encodes the record as a single line, without the trailing newline.
    fn serialize(&self) -> String;

    fn deserialize(line: &str) -> Result<Self, ParseError>;
}
