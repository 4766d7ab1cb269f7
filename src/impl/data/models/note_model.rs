use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{
    Attachment, AttachmentHandle, AttachmentKind, ContractId, NoteId, NoteRecord, NoteStatus,
    PartyId, PartyRef, SettlementResult,
};

/// Stored shape of a note. Computed amounts are persisted unrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct NoteModel {
    id: Uuid,
    number: String,
    assignor: PartyRefModel,
    debtor: PartyRefModel,
    issuance_date: NaiveDate,
    due_date: NaiveDate,
    face_value: Decimal,
    monthly_rate_percent: Decimal,
    #[serde(default)]
    fixed_fee: Option<Decimal>,
    #[serde(default)]
    admin_fee_percent: Option<Decimal>,
    #[serde(default)]
    tax_percent: Option<Decimal>,
    #[serde(default)]
    contract_id: Option<Uuid>,
    elapsed_days: u32,
    settlement: SettlementModel,
    status: NoteStatusModel,
    #[serde(default)]
    attachments: Vec<AttachmentModel>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PartyRefModel {
    id: String,
    name: String,
    tax_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettlementModel {
    financial_discount: Decimal,
    fixed_fee: Decimal,
    admin_discount: Decimal,
    tax_discount: Decimal,
    total_discount: Decimal,
    net_payable: Decimal,
    nominal_receivable: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum NoteStatusModel {
    Pending,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AttachmentKindModel {
    Invoice,
    BankSlip,
    Amendment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AttachmentModel {
    kind: AttachmentKindModel,
    name: String,
    size_bytes: u64,
    handle: String,
}

impl From<&NoteRecord> for NoteModel {
    fn from(note: &NoteRecord) -> Self {
        NoteModel {
            id: note.id.0,
            number: note.number.clone(),
            assignor: (&note.assignor).into(),
            debtor: (&note.debtor).into(),
            issuance_date: note.issuance_date,
            due_date: note.due_date,
            face_value: note.face_value,
            monthly_rate_percent: note.monthly_rate_percent,
            fixed_fee: note.fixed_fee,
            admin_fee_percent: note.admin_fee_percent,
            tax_percent: note.tax_percent,
            contract_id: note.contract_id.map(|c| c.0),
            elapsed_days: note.elapsed_days,
            settlement: (&note.settlement).into(),
            status: note.status.into(),
            attachments: note.attachments.iter().map(Into::into).collect(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl From<NoteModel> for NoteRecord {
    fn from(model: NoteModel) -> Self {
        NoteRecord {
            id: NoteId(model.id),
            number: model.number,
            assignor: model.assignor.into(),
            debtor: model.debtor.into(),
            issuance_date: model.issuance_date,
            due_date: model.due_date,
            face_value: model.face_value,
            monthly_rate_percent: model.monthly_rate_percent,
            fixed_fee: model.fixed_fee,
            admin_fee_percent: model.admin_fee_percent,
            tax_percent: model.tax_percent,
            contract_id: model.contract_id.map(ContractId),
            elapsed_days: model.elapsed_days,
            settlement: model.settlement.into(),
            status: model.status.into(),
            attachments: model.attachments.into_iter().map(Into::into).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&PartyRef> for PartyRefModel {
    fn from(party: &PartyRef) -> Self {
        PartyRefModel {
            id: party.id.0.clone(),
            name: party.name.clone(),
            tax_id: party.tax_id.clone(),
        }
    }
}

impl From<PartyRefModel> for PartyRef {
    fn from(model: PartyRefModel) -> Self {
        PartyRef {
            id: PartyId(model.id),
            name: model.name,
            tax_id: model.tax_id,
        }
    }
}

impl From<&SettlementResult> for SettlementModel {
    fn from(s: &SettlementResult) -> Self {
        SettlementModel {
            financial_discount: s.financial_discount,
            fixed_fee: s.fixed_fee,
            admin_discount: s.admin_discount,
            tax_discount: s.tax_discount,
            total_discount: s.total_discount,
            net_payable: s.net_payable,
            nominal_receivable: s.nominal_receivable,
        }
    }
}

impl From<SettlementModel> for SettlementResult {
    fn from(m: SettlementModel) -> Self {
        SettlementResult {
            financial_discount: m.financial_discount,
            fixed_fee: m.fixed_fee,
            admin_discount: m.admin_discount,
            tax_discount: m.tax_discount,
            total_discount: m.total_discount,
            net_payable: m.net_payable,
            nominal_receivable: m.nominal_receivable,
        }
    }
}

impl From<NoteStatus> for NoteStatusModel {
    fn from(status: NoteStatus) -> Self {
        match status {
            NoteStatus::Pending => NoteStatusModel::Pending,
            NoteStatus::Paid => NoteStatusModel::Paid,
            NoteStatus::Cancelled => NoteStatusModel::Cancelled,
        }
    }
}

impl From<NoteStatusModel> for NoteStatus {
    fn from(model: NoteStatusModel) -> Self {
        match model {
            NoteStatusModel::Pending => NoteStatus::Pending,
            NoteStatusModel::Paid => NoteStatus::Paid,
            NoteStatusModel::Cancelled => NoteStatus::Cancelled,
        }
    }
}

impl From<&Attachment> for AttachmentModel {
    fn from(a: &Attachment) -> Self {
        AttachmentModel {
            kind: match a.kind {
                AttachmentKind::Invoice => AttachmentKindModel::Invoice,
                AttachmentKind::BankSlip => AttachmentKindModel::BankSlip,
                AttachmentKind::Amendment => AttachmentKindModel::Amendment,
            },
            name: a.name.clone(),
            size_bytes: a.size_bytes,
            handle: a.handle.0.clone(),
        }
    }
}

impl From<AttachmentModel> for Attachment {
    fn from(m: AttachmentModel) -> Self {
        Attachment {
            kind: match m.kind {
                AttachmentKindModel::Invoice => AttachmentKind::Invoice,
                AttachmentKindModel::BankSlip => AttachmentKind::BankSlip,
                AttachmentKindModel::Amendment => AttachmentKind::Amendment,
            },
            name: m.name,
            size_bytes: m.size_bytes,
            handle: AttachmentHandle(m.handle),
        }
    }
}
