use rust_decimal::Decimal;

use crate::entities::{Contract, ContractUsage, NoteRecord, NoteStatus};

/// Share of the contract's credit limit taken by its pending notes. Paid and
/// cancelled notes no longer count against the limit.
pub fn contract_usage(contract: &Contract, notes: &[NoteRecord]) -> ContractUsage {
    let committed = notes
        .iter()
        .filter(|n| n.contract_id == Some(contract.id) && n.status == NoteStatus::Pending)
        .map(|n| n.face_value)
        .sum::<Decimal>();
    ContractUsage {
        credit_limit: contract.credit_limit,
        committed,
        available: contract.credit_limit - committed,
    }
}

/// Contracts whose id or assignor name contains `query`, ignoring case.
pub(crate) fn filter_contracts(contracts: Vec<Contract>, query: &str) -> Vec<Contract> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contracts;
    }
    contracts
        .into_iter()
        .filter(|c| {
            c.id.to_string().contains(&needle) || c.assignor.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::{
        domain::logic::settlement_calculator::compute_settlement,
        entities::{ContractId, NoteId, OperationKind, PartyRef, SettlementInput},
    };

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn assignor(name: &str) -> PartyRef {
        PartyRef {
            id: "c1".into(),
            name: name.to_string(),
            tax_id: "12.345.678/0001-99".to_string(),
        }
    }

    fn contract(name: &str, limit: &str) -> Contract {
        let now = Utc::now();
        Contract {
            id: ContractId::generate(),
            assignor: assignor(name),
            operation: OperationKind::Advance,
            credit_limit: d(limit),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn note(contract_id: Option<ContractId>, face_value: &str, status: NoteStatus) -> NoteRecord {
        let now = Utc::now();
        NoteRecord {
            id: NoteId::generate(),
            number: "NF-1".to_string(),
            assignor: assignor("Agro Silva LTDA"),
            debtor: PartyRef {
                id: "s1".into(),
                name: "Mercado XPTO".to_string(),
                tax_id: "11.222.333/0001-44".to_string(),
            },
            issuance_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            face_value: d(face_value),
            monthly_rate_percent: Decimal::ONE,
            fixed_fee: None,
            admin_fee_percent: None,
            tax_percent: None,
            contract_id,
            elapsed_days: 5,
            settlement: compute_settlement(&SettlementInput::default()),
            status,
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn only_pending_notes_of_the_contract_count() {
        let c = contract("Agro Silva LTDA", "50000");
        let notes = vec![
            note(Some(c.id), "21000", NoteStatus::Pending),
            note(Some(c.id), "8000", NoteStatus::Paid),
            note(Some(c.id), "1000", NoteStatus::Cancelled),
            note(Some(ContractId::generate()), "9999", NoteStatus::Pending),
            note(None, "5000", NoteStatus::Pending),
            note(Some(c.id), "4000.50", NoteStatus::Pending),
        ];
        let usage = contract_usage(&c, &notes);
        assert_eq!(usage.credit_limit, d("50000"));
        assert_eq!(usage.committed, d("25000.50"));
        assert_eq!(usage.available, d("24999.50"));
    }

    #[test]
    fn available_goes_negative_over_the_limit() {
        let c = contract("Agro Silva LTDA", "10000");
        let usage = contract_usage(&c, &[note(Some(c.id), "12500", NoteStatus::Pending)]);
        assert_eq!(usage.available, d("-2500"));
    }

    #[test]
    fn filters_by_assignor_name_or_id() {
        let agro = contract("Agro Silva LTDA", "1000");
        let neo = contract("Transporte Neo ME", "1000");
        let id_prefix = agro.id.to_string()[..8].to_string();
        let all = vec![agro.clone(), neo.clone()];

        assert_eq!(filter_contracts(all.clone(), "  ").len(), 2);
        assert_eq!(filter_contracts(all.clone(), "NEO"), vec![neo]);
        assert_eq!(filter_contracts(all, &id_prefix), vec![agro]);
    }
}
