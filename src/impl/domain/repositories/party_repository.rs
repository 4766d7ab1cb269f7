use fractic_server_error::ServerError;

use crate::entities::{Party, PartyId, PartyRole};

pub(crate) trait PartyRepository {
    fn find(&self, role: PartyRole, id: &PartyId) -> Result<Option<Party>, ServerError>;

    fn list(&self, role: PartyRole) -> Result<Vec<Party>, ServerError>;
}
