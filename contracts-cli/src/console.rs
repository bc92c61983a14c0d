use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Context, Result};
use contracts_core::Date;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::validation;

/// Raised when stdin reaches end-of-file while a prompt is waiting for an answer.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Line-oriented terminal session. Every `ask_*` method reprompts until it gets a
/// valid answer, so callers never see malformed input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Reads one line with surrounding whitespace removed. May be empty.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_number<N>(&mut self, prompt: &str, range: RangeInclusive<N>) -> Result<N>
    where
        N: FromStr + PartialOrd + ToString + Clone,
    {
        loop {
            let answer = self.read_line(prompt)?;
            match validation::parse_in_range(&answer, range.clone()) {
                Ok(number) => return Ok(number),
                Err(e) => self.say(format!("Error: {e}. Please try again."))?,
            }
        }
    }

    /// Asks until `check` accepts a non-empty answer, printing `hint` after each rejection.
    pub fn ask_checked(
        &mut self,
        prompt: &str,
        check: fn(&str) -> bool,
        hint: &str,
    ) -> Result<String> {
        loop {
            let answer = self.read_line(prompt)?;
            if answer.is_empty() {
                self.say("Error: the field cannot be empty.")?;
            } else if check(&answer) {
                return Ok(answer);
            } else {
                self.say(format!("Error: {hint}"))?;
            }
        }
    }

    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(prompt, validation::is_free_text, "the field must not contain '|'.")
    }

    pub fn ask_name(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(
            prompt,
            validation::is_alpha_text,
            "only letters, spaces, '-', '.', ',' and '_' are allowed.",
        )
    }

    pub fn ask_email(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(
            prompt,
            validation::is_email,
            "the email must look like example@domain.com.",
        )
    }

    pub fn ask_phone(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(
            prompt,
            validation::is_phone,
            "only digits, spaces, '+', '-', '(' and ')' are allowed.",
        )
    }

    pub fn ask_login(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(
            prompt,
            validation::is_login,
            "only letters, digits, '_' and '-' are allowed.",
        )
    }

    pub fn ask_password(&mut self, prompt: &str) -> Result<String> {
        self.ask_checked(
            prompt,
            validation::is_password,
            "the password must not contain spaces.",
        )
    }

    pub fn ask_date(&mut self, prompt: &str) -> Result<Date> {
        loop {
            let answer = self.read_line(prompt)?;
            match validation::parse_date(&answer) {
                Some(date) => return Ok(date),
                None => {
                    self.say("Error: enter an existing date as DD.MM.YYYY, e.g. 15.12.2023.")?
                }
            }
        }
    }

    /// Prints a numbered menu and returns the picked option; 0 is always `zero_label`.
    pub fn menu(&mut self, title: &str, options: &[&str], zero_label: &str) -> Result<usize> {
        self.say(format!("\n__________{title}__________"))?;
        for (index, option) in options.iter().enumerate() {
            self.say(format!("{}. {option}", index + 1))?;
        }
        self.say(format!("0. {zero_label}"))?;
        self.ask_number("Choose an action: ", 0..=options.len())
    }

    /// Lets the user pick one variant of a fixed vocabulary.
    pub fn choose<E>(&mut self, title: &str) -> Result<E>
    where
        E: IntoEnumIterator + Display,
    {
        let variants: Vec<E> = E::iter().collect();
        self.say(format!("\n{title}:"))?;
        for (index, variant) in variants.iter().enumerate() {
            self.say(format!("{}. {variant}", index + 1))?;
        }
        let picked = self.ask_number("Enter a number: ", 1..=variants.len())?;
        variants
            .into_iter()
            .nth(picked - 1)
            .context("menu choice out of range")
    }

    /// Like [`choose`](Self::choose) but 0 keeps `current`.
    pub fn choose_or_keep<E>(&mut self, title: &str, current: E) -> Result<E>
    where
        E: IntoEnumIterator + Display,
    {
        let variants: Vec<E> = E::iter().collect();
        self.say(format!("\nCurrent {title}: {current}"))?;
        self.say(format!("Choose a new {title} (0 keeps the current one):"))?;
        for (index, variant) in variants.iter().enumerate() {
            self.say(format!("{}. {variant}", index + 1))?;
        }
        let picked = self.ask_number("Enter a number: ", 0..=variants.len())?;
        Ok(match picked {
            0 => current,
            n => variants.into_iter().nth(n - 1).unwrap_or(current),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_core::ContractStatus;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn ask_number_reprompts_until_valid() {
        let mut console = console("abc\n\n99\n3\n");
        let value: i32 = console.ask_number("Pick: ", 1..=5).unwrap();

        assert_eq!(value, 3);
        let out = printed(&console);
        assert_eq!(out.matches("Pick: ").count(), 4);
        assert!(out.contains("'abc' is not a valid number"));
        assert!(out.contains("between 1 and 5"));
    }

    #[test]
    fn closed_input_is_reported() {
        let mut console = console("");
        let err = console.read_line("> ").unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }

    #[test]
    fn checked_prompts_reject_invalid_answers() {
        let mut console = console("bad mail\nivanov@stroygarant.by\n");
        let email = console.ask_email("Email: ").unwrap();

        assert_eq!(email, "ivanov@stroygarant.by");
        assert!(printed(&console).contains("example@domain.com"));
    }

    #[test]
    fn ask_date_validates_the_calendar() {
        let mut console = console("30.02.2024\n01.04.2024\n");
        assert_eq!(console.ask_date("Date: ").unwrap(), Date::new(1, 4, 2024));
    }

    #[test]
    fn choose_returns_the_numbered_variant() {
        let mut console = console("2\n");
        let status: ContractStatus = console.choose("Select a status").unwrap();
        assert_eq!(status, ContractStatus::InProgress);
    }

    #[test]
    fn choose_or_keep_zero_keeps_current() {
        let mut console = console("0\n");
        let status = console
            .choose_or_keep("status", ContractStatus::Suspended)
            .unwrap();
        assert_eq!(status, ContractStatus::Suspended);
    }

    #[test]
    fn menu_lists_options_and_zero() {
        let mut console = console("2\n");
        let picked = console
            .menu("MAIN", &["Sign in", "Register"], "Exit")
            .unwrap();

        assert_eq!(picked, 2);
        let out = printed(&console);
        assert!(out.contains("1. Sign in\n2. Register\n0. Exit\n"));
    }
}
