use std::fmt;

use crate::{Client, ConstructionObject, Contract, ContractStatus, Record, RecordId, Repository};

/// Placeholder shown when a contract points at a client or object that no longer exists.
pub const NOT_AVAILABLE: &str = "N/A";

/// One contract as it appears in a [`ContractsReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub contract_id: RecordId,
    /// `None` when the contract's client id does not resolve.
    pub client_name: Option<String>,
    /// `None` when the contract's object id does not resolve.
    pub object_name: Option<String>,
    pub amount: f64,
    pub status: ContractStatus,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract {}: {} - {} - {:.0} rub. - {}",
            self.contract_id,
            self.client_name.as_deref().unwrap_or(NOT_AVAILABLE),
            self.object_name.as_deref().unwrap_or(NOT_AVAILABLE),
            self.amount,
            self.status
        )
    }
}

/// Read-only summary of every contract, joined with client and object names.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractsReport {
    pub lines: Vec<ReportLine>,
    pub total_amount: f64,
    pub in_progress: usize,
}

impl ContractsReport {
    pub fn generate(
        contracts: &Repository<Contract>,
        clients: &Repository<Client>,
        objects: &Repository<ConstructionObject>,
    ) -> Self {
        let lines: Vec<ReportLine> = contracts
            .find_all()
            .iter()
            .map(|contract| ReportLine {
                contract_id: contract.id(),
                client_name: clients
                    .find(contract.client_id)
                    .map(|client| client.company_name.clone()),
                object_name: objects
                    .find(contract.object_id)
                    .map(|object| object.name.clone()),
                amount: contract.amount,
                status: contract.status,
            })
            .collect();

        let total_amount: f64 = lines.iter().map(|line| line.amount).sum();
        let in_progress = lines
            .iter()
            .filter(|line| line.status == ContractStatus::InProgress)
            .count();

        Self {
            lines,
            total_amount,
            in_progress,
        }
    }

    pub fn total_contracts(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for ContractsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== CONTRACTS REPORT ==========")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "Total contracts: {}", self.total_contracts())?;
        writeln!(f, "Contracts in progress: {}", self.in_progress)?;
        writeln!(f, "Total amount: {:.0} rub.", self.total_amount)?;
        write!(f, "======================================")
    }
}

/// The contract with the largest amount. The earliest one wins a tie.
pub fn most_profitable(contracts: &Repository<Contract>) -> Option<&Contract> {
    contracts
        .find_all()
        .iter()
        .fold(None, |best: Option<&Contract>, contract| match best {
            Some(current) if current.amount >= contract.amount => Some(current),
            _ => Some(contract),
        })
}
