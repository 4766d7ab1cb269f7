use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{Attachment, ContractId, NoteRecord, PartyId};

/// Form input for creating or editing a note.
///
/// On create, every required field must be present. On update, absent fields
/// keep the stored value and present ones overwrite it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    pub assignor_id: Option<PartyId>,
    pub debtor_id: Option<PartyId>,
    pub number: Option<String>,
    pub issuance_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub face_value: Option<Decimal>,
    pub monthly_rate_percent: Option<Decimal>,
    pub fixed_fee: Option<Decimal>,
    pub admin_fee_percent: Option<Decimal>,
    pub tax_percent: Option<Decimal>,
    /// Must belong to the note's assignor.
    pub contract_id: Option<ContractId>,
    /// New files, at most one kept per kind.
    pub attachments: Vec<Attachment>,
}

impl NoteFields {
    /// Inputs of an existing record (attachments excluded), overlaid with the
    /// fields present in `patch`.
    pub(crate) fn merged(record: &NoteRecord, patch: &NoteFields) -> NoteFields {
        NoteFields {
            assignor_id: patch
                .assignor_id
                .clone()
                .or_else(|| Some(record.assignor.id.clone())),
            debtor_id: patch
                .debtor_id
                .clone()
                .or_else(|| Some(record.debtor.id.clone())),
            number: patch.number.clone().or_else(|| Some(record.number.clone())),
            issuance_date: patch.issuance_date.or(Some(record.issuance_date)),
            due_date: patch.due_date.or(Some(record.due_date)),
            face_value: patch.face_value.or(Some(record.face_value)),
            monthly_rate_percent: patch
                .monthly_rate_percent
                .or(Some(record.monthly_rate_percent)),
            fixed_fee: patch.fixed_fee.or(record.fixed_fee),
            admin_fee_percent: patch.admin_fee_percent.or(record.admin_fee_percent),
            tax_percent: patch.tax_percent.or(record.tax_percent),
            contract_id: patch.contract_id.or(record.contract_id),
            attachments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteField {
    AssignorId,
    DebtorId,
    Number,
    IssuanceDate,
    DueDate,
    FaceValue,
    MonthlyRate,
    FixedFee,
    AdminFee,
    Tax,
    ContractId,
}

impl NoteField {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteField::AssignorId => "assignor_id",
            NoteField::DebtorId => "debtor_id",
            NoteField::Number => "number",
            NoteField::IssuanceDate => "issuance_date",
            NoteField::DueDate => "due_date",
            NoteField::FaceValue => "face_value",
            NoteField::MonthlyRate => "monthly_rate",
            NoteField::FixedFee => "fixed_fee",
            NoteField::AdminFee => "admin_fee",
            NoteField::Tax => "tax",
            NoteField::ContractId => "contract_id",
        }
    }
}

/// Input field that a [`FieldViolation`] can point at.
pub trait FieldName {
    fn name(&self) -> &'static str;
}

impl FieldName for NoteField {
    fn name(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldViolation<F = NoteField> {
    Missing(F),
    Negative(F),
    /// Zero where a strictly positive value is required.
    NotPositive(F),
    OutOfRange(F),
    UnknownParty(F),
    UnknownContract(F),
    /// The contract exists but belongs to another assignor.
    ForeignContract(F),
}

impl<F: Copy> FieldViolation<F> {
    pub fn field(&self) -> F {
        match self {
            FieldViolation::Missing(f)
            | FieldViolation::Negative(f)
            | FieldViolation::NotPositive(f)
            | FieldViolation::OutOfRange(f)
            | FieldViolation::UnknownParty(f)
            | FieldViolation::UnknownContract(f)
            | FieldViolation::ForeignContract(f) => *f,
        }
    }
}

impl<F: FieldName + Copy> std::fmt::Display for FieldViolation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            FieldViolation::Missing(_) => "missing",
            FieldViolation::Negative(_) => "negative",
            FieldViolation::NotPositive(_) => "not positive",
            FieldViolation::OutOfRange(_) => "out of range",
            FieldViolation::UnknownParty(_) => "unknown party",
            FieldViolation::UnknownContract(_) => "unknown contract",
            FieldViolation::ForeignContract(_) => "contract of another assignor",
        };
        write!(f, "{} ({})", self.field().name(), reason)
    }
}
