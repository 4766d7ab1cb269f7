use crate::{
    data::models::{iso_date_model::ISODateModel, risk_level_model::RiskLevelModel},
    entities::{Party, PartyId, PartyRole},
};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PartyModel {
    id: String,
    role: PartyRole,
    legal_name: String,
    tax_id: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    bank_account: Option<String>,
    #[serde(default)]
    risk: RiskLevelModel,
    created_on: ISODateModel,
}

impl From<PartyModel> for Party {
    fn from(model: PartyModel) -> Self {
        Party {
            id: PartyId(model.id),
            role: model.role,
            legal_name: model.legal_name,
            tax_id: model.tax_id,
            address: model.address,
            bank_account: model.bank_account,
            risk: model.risk.into(),
            created_on: model.created_on.into(),
        }
    }
}
