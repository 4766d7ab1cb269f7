use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::entities::{Attachment, FieldName, PartyId, PartyRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractId(pub(crate) Uuid);

impl ContractId {
    pub(crate) fn generate() -> Self {
        ContractId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ContractId {
    fn from(uuid: Uuid) -> Self {
        ContractId(uuid)
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Antecipação: early payment of receivables.
    #[default]
    Advance,
    Other,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Advance => "advance",
            OperationKind::Other => "other",
        }
    }
}

/// Framework agreement with an assignor, setting the credit limit its notes
/// are drawn against.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    pub assignor: PartyRef,
    pub operation: OperationKind,
    pub credit_limit: Decimal,
    /// Signed agreement, amendments and other files, in upload order.
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form input for registering a contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractFields {
    pub assignor_id: Option<PartyId>,
    /// Defaults to [`OperationKind::Advance`].
    pub operation: Option<OperationKind>,
    pub credit_limit: Option<Decimal>,
    pub attachments: Vec<Attachment>,
}

/// How much of a contract's limit is taken by its pending notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractUsage {
    pub credit_limit: Decimal,
    /// Face value of the pending notes issued under the contract.
    pub committed: Decimal,
    /// Negative when the contract is over its limit.
    pub available: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractField {
    AssignorId,
    CreditLimit,
}

impl FieldName for ContractField {
    fn name(&self) -> &'static str {
        match self {
            ContractField::AssignorId => "assignor_id",
            ContractField::CreditLimit => "credit_limit",
        }
    }
}
