use std::io::{BufRead, Write};

use anyhow::Result;
use contracts_core::{
    Client, ConstructionObject, Contract, ContractStatus, ObjectType, Record, Repository, WorkType,
};
use tracing::info;

use super::{
    allocate_id, edit, persist, query, show, AMOUNT_RANGE, AREA_RANGE, DURATION_RANGE, ID_RANGE,
    NO_CONTRACTS,
};
use crate::console::Console;
use crate::context::AppContext;

pub(super) fn menu<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        let choice = console.menu(
            "DATA MANAGEMENT",
            &["View", "Add", "Delete", "Edit", "Search", "Sort"],
            "Back",
        )?;
        match choice {
            1 => view(ctx, console)?,
            2 => add(ctx, console)?,
            3 => delete(ctx, console)?,
            4 => edit::menu(ctx, console)?,
            5 => query::search_menu(ctx, console)?,
            6 => query::sort_menu(ctx, console)?,
            _ => return Ok(()),
        }
    }
}

fn view<R: BufRead, W: Write>(ctx: &AppContext, console: &mut Console<R, W>) -> Result<()> {
    loop {
        match console.menu("VIEW", &["Clients", "Objects", "Contracts"], "Back")? {
            1 => {
                console.say("\nClients:")?;
                show(console, ctx.clients.find_all(), "No clients to show.")?;
            }
            2 => {
                console.say("\nObjects:")?;
                show(console, ctx.objects.find_all(), "No objects to show.")?;
            }
            3 => {
                console.say("\nContracts:")?;
                show(console, ctx.contracts.find_all(), NO_CONTRACTS)?;
            }
            _ => return Ok(()),
        }
    }
}

fn add<R: BufRead, W: Write>(ctx: &mut AppContext, console: &mut Console<R, W>) -> Result<()> {
    loop {
        match console.menu("ADD", &["Client", "Object", "Contract"], "Back")? {
            1 => {
                if let Some(client) = read_client(ctx, console)? {
                    insert(console, &mut ctx.clients, client, "Client added.")?;
                }
            }
            2 => {
                if let Some(object) = read_object(ctx, console)? {
                    insert(console, &mut ctx.objects, object, "Object added.")?;
                }
            }
            3 => {
                if let Some(contract) = read_contract(ctx, console)? {
                    insert(console, &mut ctx.contracts, contract, "Contract added.")?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn insert<T: Record, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &mut Repository<T>,
    record: T,
    done: &str,
) -> Result<()> {
    let id = record.id();
    repo.add(record);
    if persist(console, repo)? {
        info!(kind = T::KIND, id, "added record");
        console.say(done)?;
    }
    Ok(())
}

fn read_client<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<Option<Client>> {
    let Some(id) = allocate_id(console, &ctx.clients)? else {
        return Ok(None);
    };
    console.say(format!("Generated ID: {id}"))?;
    Ok(Some(Client::new(
        id,
        console.ask_name("Company: ")?,
        console.ask_name("Contact person: ")?,
        console.ask_phone("Phone: ")?,
        console.ask_email("Email: ")?,
        console.ask_text("Address: ")?,
    )))
}

fn read_object<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<Option<ConstructionObject>> {
    let Some(id) = allocate_id(console, &ctx.objects)? else {
        return Ok(None);
    };
    console.say(format!("Generated ID: {id}"))?;
    let name = console.ask_name("Name: ")?;
    let address = console.ask_text("Address: ")?;
    let object_type: ObjectType = console.choose("Object type")?;
    let area = console.ask_number("Area: ", AREA_RANGE)?;
    Ok(Some(ConstructionObject::new(id, name, address, object_type, area)))
}

/// Client and object ids are not checked against their repositories; the lists are
/// printed as a hint only.
fn read_contract<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<Option<Contract>> {
    let Some(id) = allocate_id(console, &ctx.contracts)? else {
        return Ok(None);
    };
    console.say(format!("Generated contract number: {id}"))?;

    console.say("\nExisting clients:")?;
    for client in ctx.clients.find_all() {
        console.say(format!("ID: {}, Company: {}", client.id(), client.company_name))?;
    }
    let client_id = console.ask_number("Client ID: ", ID_RANGE)?;

    console.say("\nExisting objects:")?;
    for object in ctx.objects.find_all() {
        console.say(format!("ID: {}, Name: {}", object.id(), object.name))?;
    }
    let object_id = console.ask_number("Object ID: ", ID_RANGE)?;

    let start_date = console.ask_date("Start date (DD.MM.YYYY): ")?;
    let duration = console.ask_number("Term (days): ", DURATION_RANGE)?;
    let amount = console.ask_number("Amount: ", AMOUNT_RANGE)?;
    let work_type: WorkType = console.choose("Work type")?;
    let status: ContractStatus = console.choose("Contract status")?;
    let manager = console.ask_name("Manager: ")?;

    Ok(Some(Contract::new(
        id, client_id, object_id, start_date, duration, amount, work_type, status, manager,
    )))
}

fn delete<R: BufRead, W: Write>(ctx: &mut AppContext, console: &mut Console<R, W>) -> Result<()> {
    loop {
        match console.menu("DELETE", &["Client", "Object", "Contract"], "Back")? {
            1 => remove(console, &mut ctx.clients, "Client")?,
            2 => remove(console, &mut ctx.objects, "Object")?,
            3 => remove(console, &mut ctx.contracts, "Contract")?,
            _ => return Ok(()),
        }
    }
}

/// Contracts that reference a removed client or object are left alone.
fn remove<T: Record, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &mut Repository<T>,
    label: &str,
) -> Result<()> {
    let id = console.ask_number(&format!("{label} ID: "), ID_RANGE)?;
    if !repo.remove(id) {
        return console.say(format!("{label} not found."));
    }
    if persist(console, repo)? {
        info!(kind = T::KIND, id, "deleted record");
        console.say(format!("{label} deleted."))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::tests::{console, printed, seeded_context};

    #[test]
    fn adds_client_after_reprompting_bad_fields() {
        let (dir, mut ctx) = seeded_context();
        let mut console = console(&[
            "2", "1", "Acme 2000", "Acme", "Jane Roe", "call me", "+1 555 0100", "jane@acme",
            "jane@acme.com", "1 Main St", "0", "0",
        ]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Generated ID: 3"));
        assert!(out.contains("Client added."));
        assert_eq!(ctx.clients.find(3).unwrap().company_name, "Acme");

        let stored = std::fs::read_to_string(dir.path().join("clients.dat")).unwrap();
        assert!(stored.ends_with("3|Acme|Jane Roe|+1 555 0100|jane@acme.com|1 Main St\n"));
    }

    #[test]
    fn adds_contract_with_validated_date() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&[
            "2", "3", "1", "2", "30.02.2024", "29.02.2024", "0", "90", "-5", "75000.5", "3",
            "1", "Petrov", "0", "0",
        ]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Generated contract number: 3"));
        assert!(out.contains("Contract added."));

        let contract = ctx.contracts.find(3).unwrap();
        assert_eq!((contract.client_id, contract.object_id), (1, 2));
        assert_eq!(contract.start_date.to_string(), "29.02.2024");
        assert_eq!(contract.duration, 90);
        assert_eq!(contract.amount, 75000.5);
        assert_eq!(contract.work_type, WorkType::Repair);
        assert_eq!(contract.status, ContractStatus::Planned);
        assert_eq!(contract.manager, "Petrov");
    }

    #[test]
    fn adds_object_with_chosen_type() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&[
            "2",
            "2",
            "Depot",
            "Brest, Lenina 1",
            "4",
            "0",
            "950",
            "0",
            "0",
        ]);

        menu(&mut ctx, &mut console).unwrap();

        let object = ctx.objects.find(3).unwrap();
        assert_eq!(object.object_type, ObjectType::IndustrialFacility);
        assert_eq!(object.area, 950.0);
    }

    #[test]
    fn adding_stops_when_ids_run_out() {
        let (dir, mut ctx) = seeded_context();
        let path = dir.path().join("clients.dat");
        std::fs::write(&path, "2147483647|Acme|Jane|+1|a@b.by|Street\n").unwrap();
        ctx.clients.load_from_file();
        let mut console = console(&["2", "1", "0", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Error: no free client id is left."));
        assert!(!out.contains("Client added."));
        assert_eq!(ctx.clients.len(), 1);
    }

    #[test]
    fn deleting_a_client_keeps_its_contracts() {
        let (dir, mut ctx) = seeded_context();
        let mut console = console(&["3", "1", "1", "1", "9", "0", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Client deleted."));
        assert!(out.contains("Client not found."));
        assert!(ctx.clients.find(1).is_none());
        assert_eq!(ctx.contracts.len(), 2);

        let stored = std::fs::read_to_string(dir.path().join("clients.dat")).unwrap();
        assert!(!stored.contains("СтройГарант"));
    }

    #[test]
    fn views_every_collection() {
        let (_dir, mut ctx) = seeded_context();
        let mut console = console(&["1", "1", "2", "3", "0", "0"]);

        menu(&mut ctx, &mut console).unwrap();

        let out = printed(&console);
        assert!(out.contains("Company: МонтажСервис"));
        assert!(out.contains("Name: Жилой комплекс Северный"));
        assert!(out.contains("Contract #2"));
    }
}
