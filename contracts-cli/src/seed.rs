//! Demo records written on first run, when a store has nothing in it yet.

use anyhow::{Context, Result};
use contracts_core::{
    Client, ConstructionObject, Contract, ContractStatus, Date, ObjectType, Record, Repository,
    User, WorkType,
};
use tracing::info;

pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "admin", "admin123", true),
        User::new(2, "user", "user123", false),
    ]
}

pub fn default_clients() -> Vec<Client> {
    vec![
        Client::new(
            1,
            "СтройГарант",
            "Иванов Петр",
            "+375291234567",
            "ivanov@stroygarant.by",
            "Минск, ул. Строителей 15",
        ),
        Client::new(
            2,
            "МонтажСервис",
            "Сидорова Анна",
            "+375297654321",
            "sidorova@montag.by",
            "Гродно, пр-т Космонавтов 25",
        ),
    ]
}

pub fn default_objects() -> Vec<ConstructionObject> {
    vec![
        ConstructionObject::new(
            1,
            "Жилой комплекс Северный",
            "Минск, Северная 45",
            ObjectType::ApartmentBuilding,
            2500.5,
        ),
        ConstructionObject::new(
            2,
            "Торговый центр Восток",
            "Гродно, Восток 33",
            ObjectType::ShoppingCenter,
            1800.0,
        ),
    ]
}

pub fn default_contracts() -> Vec<Contract> {
    vec![
        Contract::new(
            1,
            1,
            1,
            Date::new(15, 3, 2024),
            180,
            250000.0,
            WorkType::ResidentialConstruction,
            ContractStatus::InProgress,
            "Смирнов А.В.",
        ),
        Contract::new(
            2,
            2,
            2,
            Date::new(1, 4, 2024),
            120,
            180000.0,
            WorkType::Finishing,
            ContractStatus::Planned,
            "Ковалева И.С.",
        ),
    ]
}

/// Adds `records` and saves, but only if `repo` is empty. Returns whether it seeded.
pub fn seed_if_empty<T: Record>(repo: &mut Repository<T>, records: Vec<T>) -> Result<bool> {
    if !repo.is_empty() {
        return Ok(false);
    }

    let count = records.len();
    for record in records {
        repo.add(record);
    }
    repo.save_to_file()
        .with_context(|| format!("Failed to seed {} records", T::KIND))?;

    info!(kind = T::KIND, count, path = %repo.path().display(), "seeded default records");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_only_empty_repositories() {
        let dir = tempfile::tempdir().unwrap();
        let mut users = Repository::new(dir.path().join("users.dat"));

        assert!(seed_if_empty(&mut users, default_users()).unwrap());
        assert_eq!(users.len(), 2);
        assert!(!seed_if_empty(&mut users, default_users()).unwrap());
        assert_eq!(users.len(), 2);

        let mut reloaded: Repository<User> = Repository::new(dir.path().join("users.dat"));
        reloaded.load_from_file();
        assert_eq!(reloaded.find_all(), users.find_all());
    }

    #[test]
    fn default_contracts_reference_default_clients_and_objects() {
        let clients = default_clients();
        let objects = default_objects();
        for contract in default_contracts() {
            assert!(clients.iter().any(|c| c.id() == contract.client_id));
            assert!(objects.iter().any(|o| o.id() == contract.object_id));
        }
    }
}
