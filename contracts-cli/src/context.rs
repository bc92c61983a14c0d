use anyhow::Result;
use contracts_core::{Client, ConstructionObject, Contract, Record, Repository, User};
use tracing::warn;

use crate::config::AppConfig;
use crate::seed;

/// Every repository the application works with, built once in `main` and handed to the
/// menus by reference.
#[derive(Debug)]
pub struct AppContext {
    pub users: Repository<User>,
    pub clients: Repository<Client>,
    pub objects: Repository<ConstructionObject>,
    pub contracts: Repository<Contract>,
    /// Record kinds whose data file exists but could not be read on the last load.
    unreadable: Vec<&'static str>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            users: Repository::new(config.users_path()),
            clients: Repository::new(config.clients_path()),
            objects: Repository::new(config.objects_path()),
            contracts: Repository::new(config.contracts_path()),
            unreadable: Vec::new(),
        }
    }

    /// Builds the context, loads every store and, if configured, seeds empty ones.
    ///
    /// Loading never fails; only saving seeded records can.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let mut context = Self::new(config);
        context.load();
        if config.seed_defaults {
            context.seed()?;
        }
        Ok(context)
    }

    /// Loads every store. An unreadable file leaves its store empty.
    pub fn load(&mut self) {
        self.unreadable.clear();
        load(&mut self.users, &mut self.unreadable);
        load(&mut self.clients, &mut self.unreadable);
        load(&mut self.objects, &mut self.unreadable);
        load(&mut self.contracts, &mut self.unreadable);
    }

    /// Seeds empty stores, except those whose file could not be read: writing demo records
    /// there would replace data that is only temporarily out of reach.
    pub fn seed(&mut self) -> Result<()> {
        seed_store(&mut self.users, seed::default_users(), &self.unreadable)?;
        seed_store(&mut self.clients, seed::default_clients(), &self.unreadable)?;
        seed_store(&mut self.objects, seed::default_objects(), &self.unreadable)?;
        seed_store(&mut self.contracts, seed::default_contracts(), &self.unreadable)?;
        Ok(())
    }

    /// The first user whose login and password both match.
    pub fn authenticate(&self, login: &str, password: &str) -> Option<&User> {
        self.users
            .find_all()
            .iter()
            .find(|user| user.login == login && user.check_password(password))
    }
}

fn load<T: Record>(repo: &mut Repository<T>, unreadable: &mut Vec<&'static str>) {
    let summary = repo.load_from_file();
    if summary.read_error.is_some() {
        unreadable.push(T::KIND);
    }
    if summary.skipped > 0 {
        warn!(
            kind = T::KIND,
            skipped = summary.skipped,
            path = %repo.path().display(),
            "some lines could not be read and were dropped"
        );
    }
}

fn seed_store<T: Record>(
    repo: &mut Repository<T>,
    records: Vec<T>,
    unreadable: &[&'static str],
) -> Result<bool> {
    if unreadable.contains(&T::KIND) {
        warn!(kind = T::KIND, path = %repo.path().display(), "not seeding an unreadable store");
        return Ok(false);
    }
    seed::seed_if_empty(repo, records)
}
