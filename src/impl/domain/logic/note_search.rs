use regex::Regex;

use crate::entities::NoteRecord;

/// Case-insensitive filter over note number, party names and tax ids. Tax
/// ids also match on their digits alone, so "12345678" finds
/// "12.345.678/0001-99".
pub(crate) struct NoteSearch {
    needle: String,
    needle_digits: String,
    non_digits: Regex,
}

impl NoteSearch {
    pub(crate) fn new(query: &str) -> Self {
        let non_digits = Regex::new(r"\D").expect("hardcoded regex should be valid");
        let needle = query.trim().to_lowercase();
        let needle_digits = non_digits.replace_all(&needle, "").into_owned();
        Self {
            needle,
            needle_digits,
            non_digits,
        }
    }

    pub(crate) fn matches(&self, note: &NoteRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let text_match = [
            &note.number,
            &note.assignor.name,
            &note.debtor.name,
            &note.assignor.tax_id,
            &note.debtor.tax_id,
        ]
        .iter()
        .any(|v| v.to_lowercase().contains(&self.needle));
        text_match || self.tax_id_digits_match(note)
    }

    fn tax_id_digits_match(&self, note: &NoteRecord) -> bool {
        if self.needle_digits.is_empty() {
            return false;
        }
        [&note.assignor.tax_id, &note.debtor.tax_id]
            .iter()
            .any(|tax_id| {
                self.non_digits
                    .replace_all(tax_id, "")
                    .contains(&self.needle_digits)
            })
    }

    pub(crate) fn filter(&self, notes: Vec<NoteRecord>) -> Vec<NoteRecord> {
        notes.into_iter().filter(|n| self.matches(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        domain::logic::settlement_calculator::compute_settlement,
        entities::{NoteId, NoteStatus, PartyRef, SettlementInput},
    };

    fn note(number: &str, assignor: &str, assignor_tax_id: &str, debtor: &str) -> NoteRecord {
        let now = Utc::now();
        NoteRecord {
            id: NoteId::generate(),
            number: number.to_string(),
            assignor: PartyRef {
                id: "c1".into(),
                name: assignor.to_string(),
                tax_id: assignor_tax_id.to_string(),
            },
            debtor: PartyRef {
                id: "s1".into(),
                name: debtor.to_string(),
                tax_id: "11.222.333/0001-44".to_string(),
            },
            issuance_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            face_value: Decimal::ONE_HUNDRED,
            monthly_rate_percent: Decimal::ONE,
            fixed_fee: None,
            admin_fee_percent: None,
            tax_percent: None,
            contract_id: None,
            elapsed_days: 5,
            settlement: compute_settlement(&SettlementInput::default()),
            status: NoteStatus::Pending,
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = vec![
            note("NF-1", "Agro Silva LTDA", "12.345.678/0001-99", "Mercado XPTO"),
            note("NF-2", "Transporte Neo ME", "98.765.432/0001-00", "Padaria Sol"),
        ];
        assert_eq!(NoteSearch::new("   ").filter(notes).len(), 2);
    }

    #[test]
    fn matches_number_and_names_case_insensitively() {
        let n = note("NF-1001", "Agro Silva LTDA", "12.345.678/0001-99", "Mercado XPTO");
        assert!(NoteSearch::new("nf-1001").matches(&n));
        assert!(NoteSearch::new("AGRO").matches(&n));
        assert!(NoteSearch::new("xpto").matches(&n));
        assert!(!NoteSearch::new("neo").matches(&n));
    }

    #[test]
    fn matches_tax_ids_with_or_without_punctuation() {
        let n = note("NF-1", "Agro Silva LTDA", "12.345.678/0001-99", "Mercado XPTO");
        assert!(NoteSearch::new("12.345.678").matches(&n));
        assert!(NoteSearch::new("12345678000199").matches(&n));
        assert!(NoteSearch::new("11222333").matches(&n));
        assert!(!NoteSearch::new("99999999").matches(&n));
    }
}
