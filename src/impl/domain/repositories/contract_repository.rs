use fractic_server_error::ServerError;

use crate::entities::{Contract, ContractId};

/// Storage of contracts, with the same all-or-nothing guarantee as
/// [`NoteRepository`](super::note_repository::NoteRepository).
pub trait ContractRepository {
    fn create(&mut self, contract: Contract) -> Result<Contract, ServerError>;

    /// Fails with `ContractNotFound` if no contract has the same id.
    fn update(&mut self, contract: Contract) -> Result<Contract, ServerError>;

    fn delete(&mut self, id: &ContractId) -> Result<Contract, ServerError>;

    /// All contracts, newest first.
    fn list(&self) -> Result<Vec<Contract>, ServerError>;

    fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, ServerError>;
}

impl<T: ContractRepository + ?Sized> ContractRepository for Box<T> {
    fn create(&mut self, contract: Contract) -> Result<Contract, ServerError> {
        (**self).create(contract)
    }

    fn update(&mut self, contract: Contract) -> Result<Contract, ServerError> {
        (**self).update(contract)
    }

    fn delete(&mut self, id: &ContractId) -> Result<Contract, ServerError> {
        (**self).delete(id)
    }

    fn list(&self) -> Result<Vec<Contract>, ServerError> {
        (**self).list()
    }

    fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, ServerError> {
        (**self).find_by_id(id)
    }
}
