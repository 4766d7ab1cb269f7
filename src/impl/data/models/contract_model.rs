use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    data::models::note_model::{AttachmentModel, PartyRefModel},
    entities::{Contract, ContractId, OperationKind},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ContractModel {
    id: Uuid,
    assignor: PartyRefModel,
    operation: OperationKindModel,
    credit_limit: Decimal,
    #[serde(default)]
    attachments: Vec<AttachmentModel>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OperationKindModel {
    Advance,
    Other,
}

impl From<&Contract> for ContractModel {
    fn from(contract: &Contract) -> Self {
        ContractModel {
            id: contract.id.0,
            assignor: (&contract.assignor).into(),
            operation: match contract.operation {
                OperationKind::Advance => OperationKindModel::Advance,
                OperationKind::Other => OperationKindModel::Other,
            },
            credit_limit: contract.credit_limit,
            attachments: contract.attachments.iter().map(Into::into).collect(),
            created_at: contract.created_at,
            updated_at: contract.updated_at,
        }
    }
}

impl From<ContractModel> for Contract {
    fn from(model: ContractModel) -> Self {
        Contract {
            id: ContractId(model.id),
            assignor: model.assignor.into(),
            operation: match model.operation {
                OperationKindModel::Advance => OperationKind::Advance,
                OperationKindModel::Other => OperationKind::Other,
            },
            credit_limit: model.credit_limit,
            attachments: model.attachments.into_iter().map(Into::into).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
