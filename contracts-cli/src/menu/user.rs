use std::io::{BufRead, Write};

use anyhow::Result;

use super::{query, show, NO_CONTRACTS};
use crate::console::Console;
use crate::context::AppContext;

/// Read-only menu for regular accounts.
pub(super) fn menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let choice = console.menu(
            "USER MENU",
            &[
                "View contracts",
                "Search contracts by status",
                "Sort contracts by amount",
                "Most profitable contract",
            ],
            "Sign out",
        )?;
        match choice {
            1 => {
                console.say("\nAll contracts:")?;
                show(console, ctx.contracts.find_all(), NO_CONTRACTS)?;
            }
            2 => query::contracts_by_status(ctx, console)?,
            3 => {
                let sorted = ctx.contracts.sort(|a, b| a.amount.total_cmp(&b.amount));
                console.say("\nContracts sorted by amount (ascending):")?;
                show(console, sorted, NO_CONTRACTS)?;
            }
            4 => query::most_profitable(ctx, console)?,
            _ => return Ok(()),
        }
    }
}
