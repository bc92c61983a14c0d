use std::io::{BufRead, Write};

use anyhow::Result;
use contracts_core::{ContractsReport, RecordId};
use tracing::info;

use super::{data, persist, query, show, ID_RANGE};
use crate::console::Console;
use crate::context::AppContext;

/// Full menu for administrators. `signed_in` is the account running the session.
pub(super) fn menu<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
    signed_in: RecordId,
) -> Result<()> {
    loop {
        let choice = console.menu(
            "ADMIN MENU",
            &[
                "Data management",
                "Account management",
                "Contracts report",
                "Most profitable contract",
            ],
            "Sign out",
        )?;
        match choice {
            1 => data::menu(ctx, console)?,
            2 => accounts(ctx, console, signed_in)?,
            3 => {
                let report = ContractsReport::generate(&ctx.contracts, &ctx.clients, &ctx.objects);
                console.say(report)?;
            }
            4 => query::most_profitable(ctx, console)?,
            _ => return Ok(()),
        }
    }
}

fn accounts<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
    signed_in: RecordId,
) -> Result<()> {
    loop {
        match console.menu("ACCOUNTS", &["View users", "Delete user"], "Back")? {
            1 => {
                console.say("\nUsers:")?;
                show(console, ctx.users.find_all(), "No users to show.")?;
            }
            2 => {
                let id = console.ask_number("User ID: ", ID_RANGE)?;
                if id == signed_in {
                    console.say("You cannot delete the account you are signed in with.")?;
                } else if ctx.users.remove(id) {
                    if persist(console, &ctx.users)? {
                        info!(id, "deleted user");
                        console.say("User deleted.")?;
                    }
                } else {
                    console.say("User not found.")?;
                }
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::tests::{console, printed, seeded_context};

    #[test]
    fn report_lists_contracts_and_totals() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["3", "0"]);

        menu(&mut ctx, &mut console, 1).unwrap();

        let out = printed(&console);
        assert!(out.contains(
            "Contract 1: СтройГарант - Жилой комплекс Северный - 250000 rub. - в работе"
        ));
        assert!(out.contains("Total contracts: 2"));
        assert!(out.contains("Contracts in progress: 1"));
        assert!(out.contains("Total amount: 430000 rub."));
    }

    #[test]
    fn deletes_other_users_only() {
        let (dir, mut ctx) = seeded_context();
        let mut console = console(&["2", "2", "1", "2", "2", "2", "7", "0", "0"]);

        menu(&mut ctx, &mut console, 1).unwrap();

        let out = printed(&console);
        assert!(out.contains("You cannot delete the account you are signed in with."));
        assert!(out.contains("User deleted."));
        assert!(out.contains("User not found."));
        assert_eq!(ctx.users.len(), 1);

        let stored = std::fs::read_to_string(dir.path().join("users.dat")).unwrap();
        assert_eq!(stored, "1 admin dgplq123 1\n");
    }
}
