use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::{
    entities::{NoteRecord, SettlementResult},
    presentation::utils::{format_amount, format_percent},
};

/// A note as displayed in the notes table: every cell already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: String,
    pub number: String,
    pub assignor: String,
    pub debtor: String,
    pub issuance_date: String,
    pub due_date: String,
    pub elapsed_days: String,
    pub face_value: String,
    pub monthly_rate: String,
    pub total_discount: String,
    pub net_payable: String,
    pub receivable: String,
    pub status: String,
    pub attachments: Vec<String>,
}

impl NoteRow {
    pub fn new(note: &NoteRecord, currency: Currency) -> Self {
        let money = |v: Decimal| format_amount(v, currency);
        NoteRow {
            id: note.id.to_string(),
            number: note.number.clone(),
            assignor: format!("{} ({})", note.assignor.name, note.assignor.tax_id),
            debtor: format!("{} ({})", note.debtor.name, note.debtor.tax_id),
            issuance_date: note.issuance_date.format("%Y-%m-%d").to_string(),
            due_date: note.due_date.format("%Y-%m-%d").to_string(),
            elapsed_days: note.elapsed_days.to_string(),
            face_value: money(note.face_value),
            monthly_rate: format_percent(note.monthly_rate_percent),
            total_discount: money(note.settlement.total_discount),
            net_payable: money(note.settlement.net_payable),
            receivable: money(note.settlement.nominal_receivable),
            status: note.status.as_str().to_string(),
            attachments: note
                .attachments
                .iter()
                .map(|a| {
                    format!(
                        "{}: {} ({} KB)",
                        a.kind.as_str(),
                        a.name,
                        a.size_bytes.div_ceil(1024)
                    )
                })
                .collect(),
        }
    }
}

/// Line-by-line breakdown of a settlement, for audit and detail views.
pub fn format_breakdown(settlement: &SettlementResult, currency: Currency) -> String {
    let lines = [
        ("Financial discount", settlement.financial_discount),
        ("Fixed fee", settlement.fixed_fee),
        ("Administrative fee", settlement.admin_discount),
        ("IOF", settlement.tax_discount),
        ("Total discount", settlement.total_discount),
        ("Net payable", settlement.net_payable),
        ("Receivable", settlement.nominal_receivable),
    ];
    let amounts: Vec<(&str, String)> = lines
        .iter()
        .map(|(label, value)| (*label, format_amount(*value, currency)))
        .collect();
    let label_width = amounts.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let amount_width = amounts.iter().map(|(_, a)| a.len()).max().unwrap_or(0);
    amounts
        .iter()
        .map(|(label, amount)| format!("{label:<label_width$}  {amount:>amount_width$}"))
        .collect::<Vec<_>>()
        .join("\n")
}
