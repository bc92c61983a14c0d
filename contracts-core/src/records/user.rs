use std::fmt;

use super::fields::{ensure_exhausted, next_field, non_empty, parse_flag, parse_integer};
use super::{ObfuscatedPassword, Record, RecordId};
use crate::ParseError;

/// An account that can sign in to the console.
///
/// Persisted as `id login obfuscated_password is_admin` separated by single spaces, with
/// `is_admin` written as `0` or `1`. Logins and passwords must not contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: RecordId,
    pub login: String,
    pub password: ObfuscatedPassword,
    pub is_admin: bool,
}

impl User {
    /// Creates a user from a plaintext password.
    pub fn new(id: RecordId, login: impl Into<String>, password: &str, is_admin: bool) -> Self {
        Self {
            id,
            login: login.into(),
            password: ObfuscatedPassword::from_plain(password),
            is_admin,
        }
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = ObfuscatedPassword::from_plain(password);
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password.matches(password)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Login: {}, Admin: {}",
            self.id,
            self.login,
            if self.is_admin { "yes" } else { "no" }
        )
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn serialize(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            self.login,
            self.password.as_ref(),
            u8::from(self.is_admin)
        )
    }

    fn deserialize(line: &str) -> Result<Self, ParseError> {
        let mut fields = non_empty(line)?.split_whitespace();

        let id = parse_integer("id", next_field(&mut fields, "id")?)?;
        let login = next_field(&mut fields, "login")?.to_string();
        let password = ObfuscatedPassword::from_obfuscated(next_field(&mut fields, "password")?);
        let is_admin = parse_flag("is_admin", next_field(&mut fields, "is_admin")?)?;
        ensure_exhausted(fields)?;

        Ok(Self {
            id,
            login,
            password,
            is_admin,
        })
    }
}
