//! In-place edits. Each prompt shows the current value; a blank answer keeps it and an
//! answer that fails validation is reported and also keeps it.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::Result;
use contracts_core::{Record, RecordId, Repository};
use tracing::info;

use super::{persist, AMOUNT_RANGE, AREA_RANGE, DURATION_RANGE, ID_RANGE};
use crate::console::Console;
use crate::context::AppContext;
use crate::validation;

pub(super) fn menu<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        match console.menu("EDIT", &["Client", "Object", "Contract"], "Back")? {
            1 => edit_client(ctx, console)?,
            2 => edit_object(ctx, console)?,
            3 => edit_contract(ctx, console)?,
            _ => return Ok(()),
        }
    }
}

fn edit_client<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some((id, mut client)) = pick(console, &ctx.clients, "Client")? else {
        return Ok(());
    };
    let names = text(validation::is_alpha_text);

    if let Some(name) = revise(console, "company name", &client.company_name, &names)? {
        client.company_name = name;
    }
    if let Some(person) = revise(console, "contact person", &client.contact_person, &names)? {
        client.contact_person = person;
    }
    if let Some(phone) = revise(console, "phone", &client.phone, text(validation::is_phone))? {
        client.phone = phone;
    }
    if let Some(email) = revise(console, "email", &client.email, text(validation::is_email))? {
        client.email = email;
    }
    let address = revise(console, "address", &client.address, text(validation::is_free_text))?;
    if let Some(address) = address {
        client.address = address;
    }

    commit(console, &mut ctx.clients, id, client, "Client updated.")
}

fn edit_object<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some((id, mut object)) = pick(console, &ctx.objects, "Object")? else {
        return Ok(());
    };

    if let Some(name) = revise(console, "name", &object.name, text(validation::is_alpha_text))? {
        object.name = name;
    }
    let address = revise(console, "address", &object.address, text(validation::is_free_text))?;
    if let Some(address) = address {
        object.address = address;
    }
    object.object_type = console.choose_or_keep("object type", object.object_type)?;
    if let Some(area) = revise(console, "area", object.area, number(AREA_RANGE))? {
        object.area = area;
    }

    commit(console, &mut ctx.objects, id, object, "Object updated.")
}

fn edit_contract<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some((id, mut contract)) = pick(console, &ctx.contracts, "Contract")? else {
        return Ok(());
    };

    contract.work_type = console.choose_or_keep("work type", contract.work_type)?;
    contract.status = console.choose_or_keep("status", contract.status)?;
    let manager = revise(console, "manager", &contract.manager, text(validation::is_alpha_text))?;
    if let Some(manager) = manager {
        contract.manager = manager;
    }
    let date = revise(console, "start date", contract.start_date, validation::parse_date)?;
    if let Some(date) = date {
        contract.start_date = date;
    }
    let term = revise(console, "term in days", contract.duration, number(DURATION_RANGE))?;
    if let Some(term) = term {
        contract.duration = term;
    }
    let amount = format!("{:.0}", contract.amount);
    if let Some(amount) = revise(console, "amount", amount, number(AMOUNT_RANGE))? {
        contract.amount = amount;
    }

    commit(console, &mut ctx.contracts, id, contract, "Contract updated.")
}

/// Asks for an id and returns a copy of the record to edit, or `None` after telling the user
/// it does not exist.
fn pick<T, R, W>(
    console: &mut Console<R, W>,
    repo: &Repository<T>,
    label: &str,
) -> Result<Option<(RecordId, T)>>
where
    T: Record + Clone,
    R: BufRead,
    W: Write,
{
    let id = console.ask_number(&format!("{label} ID to edit: "), ID_RANGE)?;
    match repo.find(id) {
        Some(record) => {
            console.say(record.render())?;
            Ok(Some((id, record.clone())))
        }
        None => {
            console.say(format!("{label} not found."))?;
            Ok(None)
        }
    }
}

fn commit<T: Record, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &mut Repository<T>,
    id: RecordId,
    record: T,
    done: &str,
) -> Result<()> {
    repo.update(id, record);
    if persist(console, repo)? {
        info!(kind = T::KIND, id, "updated record");
        console.say(done)?;
    }
    Ok(())
}

/// Offers to replace one field. Returns the new value, or `None` to keep `current`.
fn revise<T, R, W>(
    console: &mut Console<R, W>,
    label: &str,
    current: impl Display,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    let prompt = format!("New {label} (current: {current}, Enter to keep): ");
    let answer = console.read_line(&prompt)?;
    if answer.is_empty() {
        return Ok(None);
    }
    match parse(&answer) {
        Some(value) => Ok(Some(value)),
        None => {
            console.say(format!("Error: invalid {label}, the current value is kept."))?;
            Ok(None)
        }
    }
}

fn text(check: fn(&str) -> bool) -> impl Fn(&str) -> Option<String> {
    move |answer: &str| check(answer).then(|| answer.to_string())
}

fn number<N>(range: RangeInclusive<N>) -> impl Fn(&str) -> Option<N>
where
    N: FromStr + PartialOrd + ToString + Clone,
{
    move |answer: &str| validation::parse_in_range(answer, range.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_core::{ContractStatus, ObjectType, WorkType};

    use crate::menu::tests::{console, printed, seeded_context};

    #[test]
    fn blank_answers_keep_every_client_field() {
        let (_dir, mut ctx) = seeded_context();
        let before = ctx.clients.find(1).unwrap().clone();
        let mut console = console(&["1", "1", "", "", "", "", "", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        assert!(printed(&console).contains("Client updated."));
        assert_eq!(ctx.clients.find(1).unwrap(), &before);
    }

    #[test]
    fn invalid_answers_are_reported_and_ignored() {
        let (dir, mut ctx) = seeded_context();
        let mut console = console(&[
            "1",
            "2",
            "New Co",
            "",
            "not a phone",
            "",
            "Гродно, ул. Новая 1",
            "0",
        ]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Error: invalid phone, the current value is kept."));
        let client = ctx.clients.find(2).unwrap();
        assert_eq!(client.company_name, "New Co");
        assert_eq!(client.phone, "+375297654321");
        assert_eq!(client.address, "Гродно, ул. Новая 1");

        let stored = std::fs::read_to_string(dir.path().join("clients.dat")).unwrap();
        assert!(stored.contains("2|New Co|Сидорова Анна|+375297654321|"));
    }

    #[test]
    fn edits_object_type_and_area() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["2", "1", "", "", "3", "-1", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        let object = ctx.objects.find(1).unwrap();
        assert_eq!(object.object_type, ObjectType::OfficeBuilding);
        assert_eq!(object.area, 2500.5);
        assert!(printed(&console).contains("Error: invalid area"));
    }

    #[test]
    fn edits_contract_fields() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["3", "2", "0", "2", "", "31.04.2024", "200", "199999", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        let contract = ctx.contracts.find(2).unwrap();
        assert_eq!(contract.work_type, WorkType::Finishing);
        assert_eq!(contract.status, ContractStatus::InProgress);
        assert_eq!(contract.manager, "Ковалева И.С.");
        assert_eq!(contract.start_date.to_string(), "01.04.2024");
        assert_eq!(contract.duration, 200);
        assert_eq!(contract.amount, 199999.0);
        assert_eq!(contract.id(), 2);
    }

    #[test]
    fn unknown_id_is_reported() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["3", "42", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        assert!(printed(&console).contains("Contract not found."));
    }
}
