use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::storage::RecordFile;
use crate::{Record, RecordId, RepositoryError};

/// Outcome of [`Repository::load_from_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    /// Non-blank lines that failed to parse and were dropped.
    pub skipped: usize,
    /// Set when the file exists but could not be read. The store then loads as empty.
    pub read_error: Option<io::ErrorKind>,
}

/// An ordered, in-memory collection of one record type, bound to a flat file.
///
/// The repository never writes on its own: callers invoke [`save_to_file`] after every
/// mutation to keep the file in step with memory. Lookups hand out borrows, so changing a
/// stored record requires [`find_mut`] or [`update`].
///
/// [`save_to_file`]: Repository::save_to_file
/// [`find_mut`]: Repository::find_mut
/// [`update`]: Repository::update
#[derive(Debug)]
pub struct Repository<T> {
    records: Vec<T>,
    file: RecordFile,
}

impl<T: Record> Repository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            file: RecordFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Appends a record. Ids are not checked for uniqueness; use [`next_id`](Self::next_id).
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Replaces the record with `id` in place, keeping its position. The stored record
    /// keeps `id` whatever id `record` carried. Returns `false` if no such record exists.
    pub fn update(&mut self, id: RecordId, mut record: T) -> bool {
        match self.find_mut(id) {
            Some(slot) => {
                record.set_id(id);
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// All records in insertion order.
    pub fn find_all(&self) -> &[T] {
        &self.records
    }

    pub fn search<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).collect()
    }

    /// Returns the records ordered by `compare`, leaving the stored order untouched.
    /// Records that compare equal keep their insertion order.
    pub fn sort<C>(&self, mut compare: C) -> Vec<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted: Vec<&T> = self.records.iter().collect();
        sorted.sort_by(|a, b| compare(a, b));
        sorted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One past the largest id in the repository, or 1 when it is empty. `None` once the
    /// largest id is `RecordId::MAX`.
    pub fn next_id(&self) -> Option<RecordId> {
        match self.records.iter().map(Record::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Rewrites the bound file with every record, one per line.
    pub fn save_to_file(&self) -> Result<(), RepositoryError> {
        self.file.write_lines(self.records.iter().map(Record::serialize))?;
        debug!(
            kind = T::KIND,
            path = %self.path().display(),
            count = self.records.len(),
            "saved records"
        );
        Ok(())
    }

    /// Replaces the in-memory records with the contents of the bound file.
    ///
    /// Never fails. A missing file loads as empty, and so does one that cannot be read, in
    /// which case [`LoadSummary::read_error`] says why. Lines that do not parse are logged and
    /// dropped; blank lines are ignored.
    pub fn load_from_file(&mut self) -> LoadSummary {
        let bytes = match self.file.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                self.records.clear();
                debug!(kind = T::KIND, path = %self.path().display(), "no data file yet");
                return LoadSummary::default();
            }
            Err(e) => {
                self.records.clear();
                warn!(
                    kind = T::KIND,
                    path = %self.path().display(),
                    error = %e,
                    "cannot read data file, starting empty"
                );
                return LoadSummary {
                    read_error: Some(e.kind()),
                    ..LoadSummary::default()
                };
            }
        };

        self.records.clear();
        let mut summary = LoadSummary::default();

        for (index, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_number = index + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let parsed = std::str::from_utf8(raw)
                .map_err(|e| e.to_string())
                .and_then(|line| T::deserialize(line).map_err(|e| e.to_string()));

            match parsed {
                Ok(record) => {
                    self.records.push(record);
                    summary.loaded += 1;
                }
                Err(reason) => {
                    warn!(
                        kind = T::KIND,
                        path = %self.path().display(),
                        line = line_number,
                        %reason,
                        "skipping malformed line"
                    );
                    summary.skipped += 1;
                }
            }
        }

        debug!(
            kind = T::KIND,
            path = %self.path().display(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "loaded records"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Client, Contract, ContractStatus, Date, WorkType};

    fn client(id: RecordId, company: &str) -> Client {
        Client::new(id, company, "Contact", "+375 29 000", "a@b.by", "Street 1")
    }

    fn contract(id: RecordId, amount: f64) -> Contract {
        Contract::new(
            id,
            1,
            1,
            Date::new(1, 1, 2024),
            30,
            amount,
            WorkType::Repair,
            ContractStatus::Planned,
            "Manager",
        )
    }

    fn repo_with(ids: &[RecordId]) -> Repository<Client> {
        let mut repo = Repository::new("unused.dat");
        for id in ids {
            repo.add(client(*id, &format!("Company {id}")));
        }
        repo
    }

    #[test]
    fn add_then_find_returns_the_record() {
        let mut repo = Repository::new("unused.dat");
        repo.add(client(5, "Acme"));

        assert_eq!(repo.find(5), Some(&client(5, "Acme")));
        assert_eq!(repo.find(6), None);
    }

    #[test]
    fn remove_reports_whether_a_record_existed() {
        let mut repo = repo_with(&[1, 2, 3]);

        assert!(!repo.remove(99));
        assert_eq!(repo.len(), 3);

        assert!(repo.remove(2));
        assert_eq!(repo.find(2), None);
        assert_eq!(repo.len(), 2);
        assert!(!repo.remove(2));
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let repo = repo_with(&[3, 1, 2]);
        let ids: Vec<_> = repo.find_all().iter().map(Record::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn search_returns_matching_subset_in_order() {
        let repo = repo_with(&[4, 1, 6, 3, 2]);
        let ids: Vec<_> = repo
            .search(|c| c.id() % 2 == 0)
            .into_iter()
            .map(Record::id)
            .collect();
        assert_eq!(ids, vec![4, 6, 2]);
    }

    #[test]
    fn sort_does_not_touch_stored_order() {
        let mut repo = Repository::new("unused.dat");
        repo.add(contract(1, 250000.0));
        repo.add(contract(2, 180000.0));
        repo.add(contract(3, 90000.0));

        let ascending: Vec<_> = repo
            .sort(|a, b| a.amount.total_cmp(&b.amount))
            .into_iter()
            .map(|c| c.amount)
            .collect();
        assert_eq!(ascending, vec![90000.0, 180000.0, 250000.0]);

        let descending: Vec<_> = repo
            .sort(|a, b| b.amount.total_cmp(&a.amount))
            .into_iter()
            .map(|c| c.amount)
            .collect();
        assert_eq!(descending, vec![250000.0, 180000.0, 90000.0]);

        let stored: Vec<_> = repo.find_all().iter().map(|c| c.amount).collect();
        assert_eq!(stored, vec![250000.0, 180000.0, 90000.0]);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(repo_with(&[]).next_id(), Some(1));
        assert_eq!(repo_with(&[2, 7, 3]).next_id(), Some(8));
    }

    #[test]
    fn next_id_runs_out_at_the_largest_id() {
        assert_eq!(repo_with(&[RecordId::MAX - 1]).next_id(), Some(RecordId::MAX));
        assert_eq!(repo_with(&[1, RecordId::MAX]).next_id(), None);
    }

    #[test]
    fn update_replaces_in_place_and_pins_the_id() {
        let mut repo = repo_with(&[1, 2, 3]);

        assert!(repo.update(2, client(40, "Renamed")));
        assert_eq!(repo.find(2).map(|c| c.company_name.as_str()), Some("Renamed"));
        assert_eq!(repo.find(40), None);
        let ids: Vec<_> = repo.find_all().iter().map(Record::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(!repo.update(9, client(9, "Ghost")));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn find_mut_edits_the_stored_record() {
        let mut repo = repo_with(&[1]);
        if let Some(stored) = repo.find_mut(1) {
            stored.phone = "+375 44 111".to_string();
        }
        assert_eq!(repo.find(1).unwrap().phone, "+375 44 111");
    }
}
