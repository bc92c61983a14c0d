//! Searches, sorts and the most profitable contract. None of these change any data.

use std::io::{BufRead, Write};

use anyhow::Result;
use contracts_core::{most_profitable as find_most_profitable, ContractStatus};

use super::{show, AMOUNT_RANGE, NO_CONTRACTS};
use crate::console::Console;
use crate::context::AppContext;

pub(super) fn contracts_by_status<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    let status: ContractStatus = console.choose("Contract status")?;
    let found = ctx.contracts.search(|contract| contract.status == status);
    console.say(format!("Found {} contract(s) with status '{status}':", found.len()))?;
    show(console, found, NO_CONTRACTS)
}

pub(super) fn most_profitable<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(contract) = find_most_profitable(&ctx.contracts) else {
        return console.say(NO_CONTRACTS);
    };
    console.say("\n====== MOST PROFITABLE CONTRACT ======")?;
    console.say(contract)?;
    console.say("======================================")
}

pub(super) fn search_menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let choice = console.menu(
            "SEARCH",
            &[
                "Contracts with amount at least",
                "Clients by company name",
                "Objects by type",
                "Contracts by manager",
            ],
            "Back",
        )?;
        match choice {
            1 => {
                let min: f64 = console.ask_number("Minimum amount: ", AMOUNT_RANGE)?;
                let found = ctx.contracts.search(|contract| contract.amount >= min);
                console.say(format!(
                    "\nFound {} contract(s) with amount >= {min:.0}:",
                    found.len()
                ))?;
                show(console, found, NO_CONTRACTS)?;
            }
            2 => {
                let text = console.ask_text("Company name contains: ")?;
                let found = ctx
                    .clients
                    .search(|client| client.company_name.contains(text.as_str()));
                console.say(format!(
                    "\nFound {} client(s) whose company name contains '{text}':",
                    found.len()
                ))?;
                show(console, found, "No clients to show.")?;
            }
            3 => {
                let text = console.ask_text("Object type contains: ")?;
                let found = ctx
                    .objects
                    .search(|object| object.object_type.as_ref().contains(text.as_str()));
                console.say(format!(
                    "\nFound {} object(s) whose type contains '{text}':",
                    found.len()
                ))?;
                show(console, found, "No objects to show.")?;
            }
            4 => {
                let text = console.ask_text("Manager contains: ")?;
                let found = ctx
                    .contracts
                    .search(|contract| contract.manager.contains(text.as_str()));
                console.say(format!(
                    "\nFound {} contract(s) whose manager contains '{text}':",
                    found.len()
                ))?;
                show(console, found, NO_CONTRACTS)?;
            }
            _ => return Ok(()),
        }
    }
}

pub(super) fn sort_menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let choice = console.menu(
            "SORT",
            &[
                "Contracts by start date (ascending)",
                "Contracts by amount (descending)",
                "Clients by company name",
                "Objects by area (ascending)",
                "Contracts by term (descending)",
            ],
            "Back",
        )?;
        match choice {
            1 => {
                let sorted = ctx.contracts.sort(|a, b| a.start_date.cmp(&b.start_date));
                console.say("\nContracts sorted by start date (ascending):")?;
                show(console, sorted, NO_CONTRACTS)?;
            }
            2 => {
                let sorted = ctx.contracts.sort(|a, b| b.amount.total_cmp(&a.amount));
                console.say("\nContracts sorted by amount (descending):")?;
                show(console, sorted, NO_CONTRACTS)?;
            }
            3 => {
                let sorted = ctx.clients.sort(|a, b| a.company_name.cmp(&b.company_name));
                console.say("\nClients sorted by company name:")?;
                show(console, sorted, "No clients to show.")?;
            }
            4 => {
                let sorted = ctx.objects.sort(|a, b| a.area.total_cmp(&b.area));
                console.say("\nObjects sorted by area (ascending):")?;
                show(console, sorted, "No objects to show.")?;
            }
            5 => {
                let sorted = ctx.contracts.sort(|a, b| b.duration.cmp(&a.duration));
                console.say("\nContracts sorted by term (descending):")?;
                show(console, sorted, NO_CONTRACTS)?;
            }
            _ => return Ok(()),
        }
    }
}
