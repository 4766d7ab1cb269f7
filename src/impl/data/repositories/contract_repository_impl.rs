use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::{
        datasources::key_value_datasource::KeyValueDatasource,
        models::contract_model::ContractModel,
    },
    domain::repositories::contract_repository::ContractRepository,
    entities::{Contract, ContractId},
    errors::{ContractNotFound, DuplicateContractId, InvalidJson},
};

/// Contract list stored as one JSON document, committed the same way as
/// notes: the next list is written before it replaces the in-memory one.
pub(crate) struct ContractRepositoryImpl<DS: KeyValueDatasource> {
    datasource: DS,
    key: String,
    contracts: Vec<Contract>,
}

impl<DS: KeyValueDatasource> ContractRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS, key: impl Into<String>) -> Result<Self, ServerError> {
        let key = key.into();
        let contracts: Vec<Contract> = match datasource.get(&key)? {
            Some(raw) => serde_json::from_str::<Vec<ContractModel>>(&raw)
                .map_err(|e| InvalidJson::with_debug("contract list", &e))?
                .into_iter()
                .map(Into::into)
                .collect(),
            None => Vec::new(),
        };
        debug!(key = %key, count = contracts.len(), "Contract list loaded");
        Ok(Self {
            datasource,
            key,
            contracts,
        })
    }

    fn commit(&mut self, next: Vec<Contract>) -> Result<(), ServerError> {
        let models: Vec<ContractModel> = next.iter().map(Into::into).collect();
        let raw = serde_json::to_string(&models)
            .map_err(|e| InvalidJson::with_debug("contract list", &e))?;
        self.datasource.set(&self.key, &raw)?;
        self.contracts = next;
        Ok(())
    }

    fn position(&self, id: &ContractId) -> Result<usize, ServerError> {
        self.contracts
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| ContractNotFound::new(&id.to_string()))
    }
}

impl<DS: KeyValueDatasource> ContractRepository for ContractRepositoryImpl<DS> {
    fn create(&mut self, contract: Contract) -> Result<Contract, ServerError> {
        if self.contracts.iter().any(|c| c.id == contract.id) {
            return Err(DuplicateContractId::new(&contract.id.to_string()));
        }
        let mut next = Vec::with_capacity(self.contracts.len() + 1);
        next.push(contract.clone());
        next.extend(self.contracts.iter().cloned());
        self.commit(next)?;
        Ok(contract)
    }

    fn update(&mut self, contract: Contract) -> Result<Contract, ServerError> {
        let i = self.position(&contract.id)?;
        let mut next = self.contracts.clone();
        next[i] = contract.clone();
        self.commit(next)?;
        Ok(contract)
    }

    fn delete(&mut self, id: &ContractId) -> Result<Contract, ServerError> {
        let i = self.position(id)?;
        let mut next = self.contracts.clone();
        let removed = next.remove(i);
        self.commit(next)?;
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<Contract>, ServerError> {
        Ok(self.contracts.clone())
    }

    fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, ServerError> {
        Ok(self.contracts.iter().find(|c| c.id == *id).cloned())
    }
}
