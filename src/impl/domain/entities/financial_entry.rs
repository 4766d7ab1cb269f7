use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{NoteId, PartyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Disbursement owed to the assignor (contas a pagar).
    Payable,
    /// Collection expected from the debtor (contas a receber).
    Receivable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    Pending,
    Overdue,
    Settled,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialEntry {
    pub kind: EntryKind,
    pub note_id: NoteId,
    pub party_id: PartyId,
    pub description: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: EntryStatus,
}
