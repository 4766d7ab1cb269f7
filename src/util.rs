use chrono::NaiveDate;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use iso_currency::Currency;
use tracing::info;

use crate::{
    config::FactoringConfig,
    data::{
        datasources::{
            key_value_datasource::{
                FileKeyValueDatasourceImpl, KeyValueDatasource, MemoryKeyValueDatasourceImpl,
            },
            notes_csv_datasource::{NotesCsvDatasource as _, NotesCsvDatasourceImpl},
            parties_ron_datasource::{PartiesRonDatasource as _, PartiesRonDatasourceImpl},
        },
        repositories::{
            contract_repository_impl::ContractRepositoryImpl,
            note_repository_impl::NoteRepositoryImpl, party_repository_impl::PartyRepositoryImpl,
        },
    },
    domain::{
        logic::entries_builder::financial_entries,
        repositories::party_repository::PartyRepository as _,
        usecases::{
            contract_usecase::ContractUsecase as _,
            note_lifecycle_usecase::{NoteLifecycleUsecase as _, NoteLifecycleUsecaseImpl},
        },
    },
    entities::{
        Attachment, Contract, ContractFields, ContractId, ContractUsage, FinancialEntry,
        NoteFields, NoteId, NoteRecord, NoteStatus, Party, PartyRole,
    },
    presentation::note_fmt::{format_breakdown, NoteRow},
    repositories::{AttachmentStore, ContractRepository, NoteRepository},
};

type Usecase<S> = NoteLifecycleUsecaseImpl<
    Box<dyn NoteRepository>,
    Box<dyn ContractRepository>,
    PartyRepositoryImpl,
    S,
>;

/// Entry point for managing factored notes and the contracts they are drawn
/// against: record lifecycle, listing, import, and display helpers.
pub struct FactoringUtil<S: AttachmentStore> {
    usecase: Usecase<S>,
    currency: Currency,
}

impl<S: AttachmentStore> FactoringUtil<S> {
    /// Notes and contracts kept in memory only.
    pub fn new(parties: Vec<Party>, attachments: S) -> Self {
        let defaults = FactoringConfig::default();
        let notes = NoteRepositoryImpl::new(MemoryKeyValueDatasourceImpl::new(), defaults.notes_key)
            .expect("empty in-memory store should always load");
        let contracts = ContractRepositoryImpl::new(
            MemoryKeyValueDatasourceImpl::new(),
            defaults.contracts_key,
        )
        .expect("empty in-memory store should always load");
        Self::with_repositories(notes, contracts, parties, attachments)
    }

    /// Notes and contracts stored by caller-provided repositories.
    pub fn with_repositories<R, C>(
        notes: R,
        contracts: C,
        parties: Vec<Party>,
        attachments: S,
    ) -> Self
    where
        R: NoteRepository + 'static,
        C: ContractRepository + 'static,
    {
        Self {
            usecase: NoteLifecycleUsecaseImpl::new(
                Box::new(notes),
                Box::new(contracts),
                PartyRepositoryImpl::new(parties),
                attachments,
            ),
            currency: Currency::BRL,
        }
    }

    pub fn from_config(config: &FactoringConfig, attachments: S) -> Result<Self, ServerError> {
        let datasource = || -> Box<dyn KeyValueDatasource> {
            match &config.data_dir {
                Some(dir) => Box::new(FileKeyValueDatasourceImpl::new(dir)),
                None => Box::new(MemoryKeyValueDatasourceImpl::new()),
            }
        };
        let notes = NoteRepositoryImpl::new(datasource(), config.notes_key.clone())?;
        let contracts = ContractRepositoryImpl::new(datasource(), config.contracts_key.clone())?;
        let parties = match &config.parties {
            Some(path) => PartiesRonDatasourceImpl::new().from_file(path)?,
            None => Vec::new(),
        };
        info!(
            data_dir = ?config.data_dir,
            notes_key = %config.notes_key,
            contracts_key = %config.contracts_key,
            parties = parties.len(),
            "Factoring store opened"
        );
        Ok(Self::with_repositories(notes, contracts, parties, attachments))
    }

    /// Parses a RON party registry.
    pub fn parties_from_ron(s: &str) -> Result<Vec<Party>, ServerError> {
        PartiesRonDatasourceImpl::new().from_string(s)
    }

    pub fn attachments(&self) -> &S {
        self.usecase.attachments()
    }

    pub fn assignors(&self) -> Result<Vec<Party>, ServerError> {
        self.usecase.parties().list(PartyRole::Assignor)
    }

    pub fn debtors(&self) -> Result<Vec<Party>, ServerError> {
        self.usecase.parties().list(PartyRole::Debtor)
    }

    // Lifecycle.
    // ---

    pub fn create_note(&mut self, fields: NoteFields) -> Result<NoteRecord, ServerError> {
        self.usecase.create_note(fields)
    }

    pub fn update_note(
        &mut self,
        id: &NoteId,
        fields: NoteFields,
    ) -> Result<NoteRecord, ServerError> {
        self.usecase.update_note(id, fields)
    }

    pub fn delete_note(&mut self, id: &NoteId) -> Result<(), ServerError> {
        self.usecase.delete_note(id)
    }

    pub fn set_status(
        &mut self,
        id: &NoteId,
        status: NoteStatus,
    ) -> Result<NoteRecord, ServerError> {
        self.usecase.set_status(id, status)
    }

    // Queries.
    // ---

    pub fn find_note(&self, id: &NoteId) -> Result<NoteRecord, ServerError> {
        self.usecase.find_note(id)
    }

    pub fn list_notes(&self) -> Result<Vec<NoteRecord>, ServerError> {
        self.usecase.list_notes()
    }

    pub fn search_notes(&self, query: &str) -> Result<Vec<NoteRecord>, ServerError> {
        self.usecase.search_notes(query)
    }

    pub fn financial_entries(
        &self,
        id: &NoteId,
        today: NaiveDate,
    ) -> Result<[FinancialEntry; 2], ServerError> {
        Ok(financial_entries(&self.usecase.find_note(id)?, today))
    }

    // Contracts.
    // ---

    pub fn create_contract(&mut self, fields: ContractFields) -> Result<Contract, ServerError> {
        self.usecase.create_contract(fields)
    }

    pub fn set_credit_limit(
        &mut self,
        id: &ContractId,
        credit_limit: Decimal,
    ) -> Result<Contract, ServerError> {
        self.usecase.set_credit_limit(id, credit_limit)
    }

    pub fn attach_to_contract(
        &mut self,
        id: &ContractId,
        attachments: Vec<Attachment>,
    ) -> Result<Contract, ServerError> {
        self.usecase.attach_to_contract(id, attachments)
    }

    /// Refused while any note still references the contract.
    pub fn delete_contract(&mut self, id: &ContractId) -> Result<(), ServerError> {
        self.usecase.delete_contract(id)
    }

    pub fn find_contract(&self, id: &ContractId) -> Result<Contract, ServerError> {
        self.usecase.find_contract(id)
    }

    pub fn list_contracts(&self) -> Result<Vec<Contract>, ServerError> {
        self.usecase.list_contracts()
    }

    /// Contracts whose id or assignor name contains `query`.
    pub fn search_contracts(&self, query: &str) -> Result<Vec<Contract>, ServerError> {
        self.usecase.search_contracts(query)
    }

    pub fn contract_usage(&self, id: &ContractId) -> Result<ContractUsage, ServerError> {
        self.usecase.contract_usage(id)
    }

    // Import.
    // ---

    pub fn import_notes_csv(&mut self, csv: &str) -> Result<Vec<NoteRecord>, ServerError> {
        let batch = NotesCsvDatasourceImpl::new().from_string(csv)?;
        self.usecase.import_notes(batch)
    }

    pub fn import_notes_csv_file<P>(&mut self, path: P) -> Result<Vec<NoteRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let batch = NotesCsvDatasourceImpl::new().from_file(path)?;
        self.usecase.import_notes(batch)
    }

    // Display.
    // ---

    /// Table rows for the notes matching `query` (all notes if empty).
    pub fn note_rows(&self, query: &str) -> Result<Vec<NoteRow>, ServerError> {
        Ok(self
            .usecase
            .search_notes(query)?
            .iter()
            .map(|n| NoteRow::new(n, self.currency))
            .collect())
    }

    pub fn breakdown(&self, id: &NoteId) -> Result<String, ServerError> {
        let note = self.usecase.find_note(id)?;
        Ok(format_breakdown(note.settlement(), self.currency))
    }
}
