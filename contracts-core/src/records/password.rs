use std::fmt;

const SHIFT: u8 = 3;

/// A password stored with a reversible Caesar shift over ASCII letters.
///
/// This keeps `users.dat` byte-compatible with existing data. It hides the password from
/// a casual glance at the file and nothing more.
#[derive(Clone, PartialEq, Eq)]
pub struct ObfuscatedPassword(String);

impl ObfuscatedPassword {
    pub fn from_plain(plain: &str) -> Self {
        Self(shift(plain, SHIFT))
    }

    /// Wraps an already obfuscated value, as read from disk.
    pub fn from_obfuscated(obfuscated: impl Into<String>) -> Self {
        Self(obfuscated.into())
    }

    pub fn matches(&self, plain: &str) -> bool {
        shift(plain, SHIFT) == self.0
    }

    pub fn reveal(&self) -> String {
        shift(&self.0, 26 - SHIFT)
    }
}

impl AsRef<str> for ObfuscatedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObfuscatedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ObfuscatedPassword(***)")
    }
}

fn shift(text: &str, by: u8) -> String {
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_lowercase() {
                b'a'
            } else if c.is_ascii_uppercase() {
                b'A'
            } else {
                return c;
            };
            char::from(base + (c as u8 - base + by) % 26)
        })
        .collect()
}
