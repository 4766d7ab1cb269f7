use chrono::Utc;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::{
    domain::{
        logic::{
            contract_usage::{contract_usage, filter_contracts},
            contract_validator::{validate_contract, validate_credit_limit},
            note_validator::describe_violations,
        },
        repositories::{
            attachment_store::AttachmentStore, contract_repository::ContractRepository,
            note_repository::NoteRepository, party_repository::PartyRepository,
        },
        usecases::note_lifecycle_usecase::NoteLifecycleUsecaseImpl,
    },
    entities::{
        Attachment, Contract, ContractField, ContractFields, ContractId, ContractUsage,
        FieldViolation, PartyRef, PartyRole,
    },
    errors::{ContractInUse, ContractNotFound, InvalidContractFields},
};

pub(crate) trait ContractUsecase {
    fn create_contract(&mut self, fields: ContractFields) -> Result<Contract, ServerError>;

    fn set_credit_limit(
        &mut self,
        id: &ContractId,
        credit_limit: Decimal,
    ) -> Result<Contract, ServerError>;

    /// Appends files to the contract. Handles it already holds are ignored.
    fn attach_to_contract(
        &mut self,
        id: &ContractId,
        attachments: Vec<Attachment>,
    ) -> Result<Contract, ServerError>;

    /// Fails with `ContractInUse` while any note references the contract.
    fn delete_contract(&mut self, id: &ContractId) -> Result<(), ServerError>;

    fn find_contract(&self, id: &ContractId) -> Result<Contract, ServerError>;

    fn list_contracts(&self) -> Result<Vec<Contract>, ServerError>;

    fn search_contracts(&self, query: &str) -> Result<Vec<Contract>, ServerError>;

    fn contract_usage(&self, id: &ContractId) -> Result<ContractUsage, ServerError>;
}

impl<R, C, P, S> NoteLifecycleUsecaseImpl<R, C, P, S>
where
    R: NoteRepository,
    C: ContractRepository,
    P: PartyRepository,
    S: AttachmentStore,
{
    fn existing_contract(&self, id: &ContractId) -> Result<Contract, ServerError> {
        self.contracts
            .find_by_id(id)?
            .ok_or_else(|| ContractNotFound::new(&id.to_string()))
    }
}

fn append_new(mut held: Vec<Attachment>, incoming: Vec<Attachment>) -> Vec<Attachment> {
    for attachment in incoming {
        if !held.iter().any(|a| a.handle == attachment.handle) {
            held.push(attachment);
        }
    }
    held
}

impl<R, C, P, S> ContractUsecase for NoteLifecycleUsecaseImpl<R, C, P, S>
where
    R: NoteRepository,
    C: ContractRepository,
    P: PartyRepository,
    S: AttachmentStore,
{
    #[instrument(skip(self, input))]
    fn create_contract(&mut self, input: ContractFields) -> Result<Contract, ServerError> {
        let (valid, mut violations) = match validate_contract(&input) {
            Ok(valid) => (Some(valid), Vec::new()),
            Err(violations) => (None, violations),
        };
        let assignor = match input.assignor_id.as_ref().filter(|id| !id.0.trim().is_empty()) {
            Some(id) => {
                let found = self.parties.find(PartyRole::Assignor, id)?;
                if found.is_none() {
                    violations.push(FieldViolation::UnknownParty(ContractField::AssignorId));
                }
                found
            }
            None => None,
        };
        let (valid, assignor) = match (valid, assignor) {
            (Some(valid), Some(assignor))
                if violations.is_empty() && valid.assignor_id == assignor.id =>
            {
                (valid, assignor)
            }
            _ => return Err(InvalidContractFields::new(&describe_violations(&violations))),
        };

        let now = Utc::now();
        let contract = self.contracts.create(Contract {
            id: ContractId::generate(),
            assignor: PartyRef {
                id: assignor.id,
                name: assignor.legal_name,
                tax_id: assignor.tax_id,
            },
            operation: valid.operation,
            credit_limit: valid.credit_limit,
            attachments: append_new(Vec::new(), input.attachments),
            created_at: now,
            updated_at: now,
        })?;
        info!(
            contract_id = %contract.id,
            assignor = %contract.assignor.id,
            credit_limit = %contract.credit_limit,
            "Contract created"
        );
        Ok(contract)
    }

    #[instrument(skip(self), fields(contract_id = %id))]
    fn set_credit_limit(
        &mut self,
        id: &ContractId,
        credit_limit: Decimal,
    ) -> Result<Contract, ServerError> {
        let credit_limit = validate_credit_limit(credit_limit)
            .map_err(|v| InvalidContractFields::new(&v.to_string()))?;
        let mut contract = self.existing_contract(id)?;
        let previous = contract.credit_limit;
        contract.credit_limit = credit_limit;
        contract.updated_at = Utc::now();
        let contract = self.contracts.update(contract)?;
        info!(
            contract_id = %contract.id,
            from = %previous,
            to = %contract.credit_limit,
            "Contract limit changed"
        );
        Ok(contract)
    }

    #[instrument(skip(self, attachments), fields(contract_id = %id))]
    fn attach_to_contract(
        &mut self,
        id: &ContractId,
        attachments: Vec<Attachment>,
    ) -> Result<Contract, ServerError> {
        let mut contract = self.existing_contract(id)?;
        contract.attachments = append_new(contract.attachments, attachments);
        contract.updated_at = Utc::now();
        let contract = self.contracts.update(contract)?;
        info!(
            contract_id = %contract.id,
            attachments = contract.attachments.len(),
            "Contract attachments updated"
        );
        Ok(contract)
    }

    #[instrument(skip(self), fields(contract_id = %id))]
    fn delete_contract(&mut self, id: &ContractId) -> Result<(), ServerError> {
        self.existing_contract(id)?;
        if self.notes.list()?.iter().any(|n| n.contract_id == Some(*id)) {
            return Err(ContractInUse::new(&id.to_string()));
        }
        let removed = self.contracts.delete(id)?;
        self.release_all(&removed.attachments);
        info!(
            contract_id = %removed.id,
            released_attachments = removed.attachments.len(),
            "Contract deleted"
        );
        Ok(())
    }

    fn find_contract(&self, id: &ContractId) -> Result<Contract, ServerError> {
        self.existing_contract(id)
    }

    fn list_contracts(&self) -> Result<Vec<Contract>, ServerError> {
        self.contracts.list()
    }

    fn search_contracts(&self, query: &str) -> Result<Vec<Contract>, ServerError> {
        Ok(filter_contracts(self.contracts.list()?, query))
    }

    fn contract_usage(&self, id: &ContractId) -> Result<ContractUsage, ServerError> {
        let contract = self.existing_contract(id)?;
        Ok(contract_usage(&contract, &self.notes.list()?))
    }
}
