use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::party_model::PartyModel,
    entities::Party,
    errors::{InvalidRon, ReadError},
};

/// Party registry written as a RON list of records.
pub(crate) trait PartiesRonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Party>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<Party>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PartiesRonDatasourceImpl;

impl PartiesRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PartiesRonDatasource for PartiesRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Party>, ServerError> {
        let models: Vec<PartyModel> =
            from_str(s).map_err(|e| InvalidRon::with_debug("party registry", &e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<Party>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{PartyId, PartyRole, RiskLevel};

    const REGISTRY: &str = r#"[
        (
            id: "c1",
            role: Assignor,
            legal_name: "Agro Silva LTDA",
            tax_id: "12.345.678/0001-99",
            address: "Rua das Laranjeiras, 100 - PR",
            bank_account: Some("Banco 001 Ag 0001 CC 12345-6"),
            risk: "sem_risco",
            created_on: "2025-06-20",
        ),
        (
            id: "s1",
            role: Debtor,
            legal_name: "Mercado XPTO",
            tax_id: "11.222.333/0001-44",
            risk: true,
            created_on: "2025-07-02",
        ),
    ]"#;

    #[test]
    fn parses_registry() {
        let parties = PartiesRonDatasourceImpl::new().from_string(REGISTRY).unwrap();
        assert_eq!(parties.len(), 2);

        let assignor = &parties[0];
        assert_eq!(assignor.id, PartyId::from("c1"));
        assert_eq!(assignor.role, PartyRole::Assignor);
        assert_eq!(assignor.risk, RiskLevel::Low);
        assert_eq!(
            assignor.bank_account.as_deref(),
            Some("Banco 001 Ag 0001 CC 12345-6")
        );
        assert_eq!(
            assignor.created_on,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
        );

        let debtor = &parties[1];
        assert_eq!(debtor.role, PartyRole::Debtor);
        assert_eq!(debtor.risk, RiskLevel::High);
        assert_eq!(debtor.address, "");
        assert_eq!(debtor.bank_account, None);
    }

    #[test]
    fn rejects_invalid_dates() {
        let registry = r#"[(id: "c1", role: Assignor, legal_name: "X", tax_id: "1", created_on: "20/06/2025")]"#;
        assert!(PartiesRonDatasourceImpl::new().from_string(registry).is_err());
    }
}
