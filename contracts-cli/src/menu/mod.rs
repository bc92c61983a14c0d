//! Interactive menus. Every screen is a plain loop over [`Console::menu`]; option 0 always
//! leaves the current screen.

mod admin;
mod data;
mod edit;
mod query;
mod user;

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::Result;
use contracts_core::{Record, RecordId, Repository, User};
use tracing::{error, info, warn};

use crate::console::Console;
use crate::context::AppContext;

const ID_RANGE: RangeInclusive<RecordId> = 1..=RecordId::MAX;
const AMOUNT_RANGE: RangeInclusive<f64> = 0.0..=1e9;
const AREA_RANGE: RangeInclusive<f64> = 0.1..=100_000.0;
const DURATION_RANGE: RangeInclusive<u32> = 1..=3650;

const NO_CONTRACTS: &str = "No contracts to show.";

/// Runs the main menu until the user picks "Exit".
pub fn run<R: BufRead, W: Write>(ctx: &mut AppContext, console: &mut Console<R, W>) -> Result<()> {
    loop {
        match console.menu("CONTRACTS LEDGER", &["Sign in", "Register"], "Exit")? {
            1 => sign_in(ctx, console)?,
            2 => register(ctx, console)?,
            _ => {
                console.say("Exiting...")?;
                return Ok(());
            }
        }
    }
}

fn sign_in<R: BufRead, W: Write>(ctx: &mut AppContext, console: &mut Console<R, W>) -> Result<()> {
    let login = console.ask_login("Login: ")?;
    let password = console.ask_password("Password: ")?;

    let Some(user) = ctx.authenticate(&login, &password) else {
        console.say("Invalid login or password.")?;
        return Ok(());
    };
    let (user_id, is_admin) = (user.id(), user.is_admin);

    info!(%login, is_admin, "signed in");
    console.say(format!("Welcome, {login}!"))?;
    if is_admin {
        admin::menu(ctx, console, user_id)
    } else {
        user::menu(ctx, console)
    }
}

fn register<R: BufRead, W: Write>(ctx: &mut AppContext, console: &mut Console<R, W>) -> Result<()> {
    let login = console.ask_login("Login: ")?;
    if ctx.users.find_all().iter().any(|user| user.login == login) {
        console.say("A user with this login already exists.")?;
        return Ok(());
    }
    let Some(id) = allocate_id(console, &ctx.users)? else {
        return Ok(());
    };
    let password = console.ask_password("Password: ")?;

    ctx.users.add(User::new(id, login.as_str(), &password, false));
    if persist(console, &ctx.users)? {
        info!(%login, id, "registered user");
        console.say("Registration successful!")?;
    }
    Ok(())
}

/// Saves `repo`. A failed save is logged and reported, and the session carries on with the
/// in-memory state. Returns whether the save succeeded.
fn persist<T: Record, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &Repository<T>,
) -> Result<bool> {
    match repo.save_to_file() {
        Ok(()) => Ok(true),
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::new(e));
            error!(kind = T::KIND, error = %message, "save failed");
            console.say(format!("Error: {message}"))?;
            Ok(false)
        }
    }
}

/// The id for the next record of `repo`, or `None` after telling the user that every id
/// is taken.
fn allocate_id<T: Record, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &Repository<T>,
) -> Result<Option<RecordId>> {
    let id = repo.next_id();
    if id.is_none() {
        warn!(kind = T::KIND, path = %repo.path().display(), "no record id left");
        console.say(format!("Error: no free {} id is left.", T::KIND))?;
    }
    Ok(id)
}

/// Prints one record per line, or `empty` when there is nothing to print.
fn show<'a, T, R, W>(
    console: &mut Console<R, W>,
    records: impl IntoIterator<Item = &'a T>,
    empty: &str,
) -> Result<()>
where
    T: Record + 'a,
    R: BufRead,
    W: Write,
{
    let mut any = false;
    for record in records {
        console.say(record.render())?;
        any = true;
    }
    if !any {
        console.say(empty)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::AppConfig;

    pub(crate) type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    /// A seeded context in a fresh directory. Keep the `TempDir` alive for the test.
    pub(crate) fn seeded_context() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let ctx = AppContext::open(&config).unwrap();
        (dir, ctx)
    }

    pub(crate) fn console(lines: &[&str]) -> TestConsole {
        let mut input = lines.join("\n");
        input.push('\n');
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub(crate) fn printed(console: &TestConsole) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn exit_leaves_the_main_loop() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["0"]);

        run(&mut ctx, &mut console).unwrap();

        assert!(printed(&console).contains("Exiting..."));
    }

    #[test]
    fn closed_input_surfaces_as_input_closed() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["1", "admin"]);

        let err = run(&mut ctx, &mut console).unwrap_err();

        assert!(err.downcast_ref::<crate::console::InputClosed>().is_some());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["1", "admin", "nope", "0"]);

        run(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Invalid login or password."));
        assert!(!out.contains("Welcome"));
    }

    #[test]
    fn registration_persists_a_regular_user() {
        let (dir, mut ctx) = seeded_context();
        let mut console = console(&["2", "foreman", "secret1", "0"]);

        run(&mut ctx, &mut console).unwrap();

        assert!(printed(&console).contains("Registration successful!"));
        let user = ctx.authenticate("foreman", "secret1").unwrap();
        assert_eq!(user.id(), 3);
        assert!(!user.is_admin);

        let stored = std::fs::read_to_string(dir.path().join("users.dat")).unwrap();
        assert!(stored.contains("3 foreman vhfuhw1 0"));
    }

    #[test]
    fn registration_refuses_taken_logins() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["2", "admin", "0"]);

        run(&mut ctx, &mut console).unwrap();

        assert!(printed(&console).contains("already exists"));
        assert_eq!(ctx.users.len(), 2);
    }

    #[test]
    fn regular_user_lands_in_user_menu() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["1", "user", "user123", "0", "0"]);

        run(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Welcome, user!"));
        assert!(out.contains("USER MENU"));
        assert!(!out.contains("ADMIN MENU"));
    }

    #[test]
    fn failed_save_is_reported_and_session_continues() {
        let (dir, mut ctx) = seeded_context();
        let users_path = dir.path().join("users.dat");
        std::fs::remove_file(&users_path).unwrap();
        std::fs::create_dir(&users_path).unwrap();
        let mut console = console(&["2", "foreman", "secret1", "0"]);

        run(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Error: Failed to write"));
        assert_eq!(out.matches("os error").count(), 1);
        assert!(out.contains("Exiting..."));
        assert!(ctx.authenticate("foreman", "secret1").is_some());
    }
}
