use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{ContractId, FieldName, FieldViolation, NoteField, NoteFields, PartyId};

/// Largest accepted monetary input (R$ 1 trillion).
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);
/// Largest accepted percentage input (1000%).
const MAX_PERCENT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Note inputs that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidNoteFields {
    pub assignor_id: PartyId,
    pub debtor_id: PartyId,
    pub number: String,
    pub issuance_date: NaiveDate,
    pub due_date: NaiveDate,
    pub face_value: Decimal,
    pub monthly_rate_percent: Decimal,
    pub fixed_fee: Option<Decimal>,
    pub admin_fee_percent: Option<Decimal>,
    pub tax_percent: Option<Decimal>,
    /// Checked against the assignor by the caller.
    pub contract_id: Option<ContractId>,
}

pub(crate) struct NoteValidator<'a> {
    fields: &'a NoteFields,
    violations: Vec<FieldViolation>,
}

impl<'a> NoteValidator<'a> {
    pub(crate) fn new(fields: &'a NoteFields) -> Self {
        Self {
            fields,
            violations: Vec::new(),
        }
    }

    /// Checks presence and domain of every field, collecting all violations
    /// instead of stopping at the first one.
    pub(crate) fn validate(mut self) -> Result<ValidNoteFields, Vec<FieldViolation>> {
        let f = self.fields;
        let assignor_id = self.required_id(NoteField::AssignorId, f.assignor_id.as_ref());
        let debtor_id = self.required_id(NoteField::DebtorId, f.debtor_id.as_ref());
        let number = self.required_text(NoteField::Number, f.number.as_deref());
        let issuance_date = self.required(NoteField::IssuanceDate, f.issuance_date);
        let due_date = self.required(NoteField::DueDate, f.due_date);
        let face_value = self
            .required(NoteField::FaceValue, f.face_value)
            .and_then(|v| self.bounded(NoteField::FaceValue, v, MAX_AMOUNT));
        let monthly_rate_percent = self
            .required(NoteField::MonthlyRate, f.monthly_rate_percent)
            .and_then(|v| self.bounded(NoteField::MonthlyRate, v, MAX_PERCENT));
        let fixed_fee = self.optional(NoteField::FixedFee, f.fixed_fee, MAX_AMOUNT);
        let admin_fee_percent = self.optional(NoteField::AdminFee, f.admin_fee_percent, MAX_PERCENT);
        let tax_percent = self.optional(NoteField::Tax, f.tax_percent, MAX_PERCENT);

        match (
            assignor_id,
            debtor_id,
            number,
            issuance_date,
            due_date,
            face_value,
            monthly_rate_percent,
        ) {
            (
                Some(assignor_id),
                Some(debtor_id),
                Some(number),
                Some(issuance_date),
                Some(due_date),
                Some(face_value),
                Some(monthly_rate_percent),
            ) if self.violations.is_empty() => Ok(ValidNoteFields {
                assignor_id,
                debtor_id,
                number,
                issuance_date,
                due_date,
                face_value,
                monthly_rate_percent,
                fixed_fee,
                admin_fee_percent,
                tax_percent,
                contract_id: f.contract_id,
            }),
            _ => Err(self.violations),
        }
    }

    fn required<T>(&mut self, field: NoteField, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.violations.push(FieldViolation::Missing(field));
        }
        value
    }

    fn required_id(&mut self, field: NoteField, value: Option<&PartyId>) -> Option<PartyId> {
        let value = value.filter(|id| !id.0.trim().is_empty()).cloned();
        self.required(field, value)
    }

    fn required_text(&mut self, field: NoteField, value: Option<&str>) -> Option<String> {
        let value = value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self.required(field, value)
    }

    fn bounded(&mut self, field: NoteField, value: Decimal, max: Decimal) -> Option<Decimal> {
        if value.is_sign_negative() && !value.is_zero() {
            self.violations.push(FieldViolation::Negative(field));
            None
        } else if value > max {
            self.violations.push(FieldViolation::OutOfRange(field));
            None
        } else {
            Some(value)
        }
    }

    fn optional(
        &mut self,
        field: NoteField,
        value: Option<Decimal>,
        max: Decimal,
    ) -> Option<Decimal> {
        value.and_then(|v| self.bounded(field, v, max))
    }
}

/// Comma-separated description of the violations, ordered by field.
pub(crate) fn describe_violations<F>(violations: &[FieldViolation<F>]) -> String
where
    F: FieldName + Copy + Ord,
{
    let mut sorted = violations.to_vec();
    sorted.sort_by_key(|v| (v.field(), *v));
    sorted.dedup();
    sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
