use chrono::NaiveDate;

use crate::entities::{EntryKind, EntryStatus, FinancialEntry, NoteRecord, NoteStatus};

/// Payable (net amount to the assignor, on issuance) and receivable (face
/// value from the debtor, at maturity) generated by a factored note.
pub fn financial_entries(note: &NoteRecord, today: NaiveDate) -> [FinancialEntry; 2] {
    let payable = FinancialEntry {
        kind: EntryKind::Payable,
        note_id: note.id,
        party_id: note.assignor.id.clone(),
        description: format!("Repasse {} ({})", note.assignor.name, note.number),
        date: note.issuance_date,
        amount: note.net_payable(),
        status: entry_status(note.status, note.issuance_date, today),
    };
    let receivable = FinancialEntry {
        kind: EntryKind::Receivable,
        note_id: note.id,
        party_id: note.debtor.id.clone(),
        description: format!("Recebimento {} ({})", note.debtor.name, note.number),
        date: note.due_date,
        amount: note.nominal_receivable(),
        status: entry_status(note.status, note.due_date, today),
    };
    [payable, receivable]
}

fn entry_status(note_status: NoteStatus, date: NaiveDate, today: NaiveDate) -> EntryStatus {
    match note_status {
        NoteStatus::Paid => EntryStatus::Settled,
        NoteStatus::Cancelled => EntryStatus::Cancelled,
        NoteStatus::Pending if date < today => EntryStatus::Overdue,
        NoteStatus::Pending => EntryStatus::Pending,
    }
}
