use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::entities::{Attachment, ContractId, PartyId, SettlementResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub(crate) Uuid);

impl NoteId {
    pub(crate) fn generate() -> Self {
        NoteId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NoteId {
    fn from(uuid: Uuid) -> Self {
        NoteId(uuid)
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// No transition table is enforced: any status can be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteStatus {
    Pending,
    Paid,
    Cancelled,
}

impl NoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Pending => "pending",
            NoteStatus::Paid => "paid",
            NoteStatus::Cancelled => "cancelled",
        }
    }
}

/// Snapshot of a party taken when the note was last saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyRef {
    pub id: PartyId,
    pub name: String,
    pub tax_id: String,
}

/// A factored invoice.
///
/// `elapsed_days` and `settlement` are derived from the dates and financial
/// inputs; they are only ever written by the lifecycle usecase, which
/// recomputes them on every create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRecord {
    pub id: NoteId,
    pub number: String,
    pub assignor: PartyRef,
    pub debtor: PartyRef,
    pub issuance_date: NaiveDate,
    pub due_date: NaiveDate,
    pub face_value: Decimal,
    pub monthly_rate_percent: Decimal,
    pub fixed_fee: Option<Decimal>,
    pub admin_fee_percent: Option<Decimal>,
    pub tax_percent: Option<Decimal>,
    pub contract_id: Option<ContractId>,
    pub(crate) elapsed_days: u32,
    pub(crate) settlement: SettlementResult,
    pub status: NoteStatus,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteRecord {
    pub fn elapsed_days(&self) -> u32 {
        self.elapsed_days
    }

    pub fn settlement(&self) -> &SettlementResult {
        &self.settlement
    }

    pub fn net_payable(&self) -> Decimal {
        self.settlement.net_payable
    }

    pub fn nominal_receivable(&self) -> Decimal {
        self.settlement.nominal_receivable
    }
}
