use fractic_server_error::ServerError;

use crate::{
    domain::repositories::party_repository::PartyRepository,
    entities::{Party, PartyId, PartyRole},
};

pub(crate) struct PartyRepositoryImpl {
    parties: Vec<Party>,
}

impl PartyRepositoryImpl {
    pub(crate) fn new(parties: Vec<Party>) -> Self {
        Self { parties }
    }
}

impl PartyRepository for PartyRepositoryImpl {
    fn find(&self, role: PartyRole, id: &PartyId) -> Result<Option<Party>, ServerError> {
        Ok(self
            .parties
            .iter()
            .find(|p| p.role == role && p.id == *id)
            .cloned())
    }

    fn list(&self, role: PartyRole) -> Result<Vec<Party>, ServerError> {
        Ok(self
            .parties
            .iter()
            .filter(|p| p.role == role)
            .cloned()
            .collect())
    }
}
