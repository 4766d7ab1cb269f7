use rust_decimal::Decimal;

use crate::{
    domain::logic::note_validator::MAX_AMOUNT,
    entities::{ContractField, ContractFields, FieldViolation, OperationKind, PartyId},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidContractFields {
    pub assignor_id: PartyId,
    pub operation: OperationKind,
    pub credit_limit: Decimal,
}

pub(crate) type ContractViolation = FieldViolation<ContractField>;

/// Checks a contract form, reporting every problem at once. The assignor is
/// only checked for presence here.
pub(crate) fn validate_contract(
    fields: &ContractFields,
) -> Result<ValidContractFields, Vec<ContractViolation>> {
    let mut violations = Vec::new();
    let assignor_id = fields
        .assignor_id
        .as_ref()
        .filter(|id| !id.0.trim().is_empty())
        .cloned();
    if assignor_id.is_none() {
        violations.push(FieldViolation::Missing(ContractField::AssignorId));
    }
    let credit_limit = match fields.credit_limit {
        Some(limit) => match validate_credit_limit(limit) {
            Ok(limit) => Some(limit),
            Err(violation) => {
                violations.push(violation);
                None
            }
        },
        None => {
            violations.push(FieldViolation::Missing(ContractField::CreditLimit));
            None
        }
    };
    match (assignor_id, credit_limit) {
        (Some(assignor_id), Some(credit_limit)) => Ok(ValidContractFields {
            assignor_id,
            operation: fields.operation.unwrap_or_default(),
            credit_limit,
        }),
        _ => Err(violations),
    }
}

/// A credit limit must be strictly positive and within the accepted amount
/// range.
pub(crate) fn validate_credit_limit(limit: Decimal) -> Result<Decimal, ContractViolation> {
    if limit <= Decimal::ZERO {
        Err(FieldViolation::NotPositive(ContractField::CreditLimit))
    } else if limit > MAX_AMOUNT {
        Err(FieldViolation::OutOfRange(ContractField::CreditLimit))
    } else {
        Ok(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logic::note_validator::describe_violations;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn defaults_to_advance_operation() {
        let valid = validate_contract(&ContractFields {
            assignor_id: Some(PartyId::from("c1")),
            credit_limit: Some(d("150000")),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(valid.operation, OperationKind::Advance);
        assert_eq!(valid.credit_limit, d("150000"));
    }

    #[test]
    fn reports_missing_fields() {
        let violations = validate_contract(&ContractFields {
            assignor_id: Some(PartyId::from("  ")),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            describe_violations(&violations),
            "assignor_id (missing), credit_limit (missing)"
        );
    }

    #[test]
    fn credit_limit_must_be_positive_and_bounded() {
        assert_eq!(
            validate_credit_limit(Decimal::ZERO),
            Err(FieldViolation::NotPositive(ContractField::CreditLimit))
        );
        assert_eq!(
            validate_credit_limit(d("-10")),
            Err(FieldViolation::NotPositive(ContractField::CreditLimit))
        );
        assert_eq!(
            validate_credit_limit(d("1000000000000.01")),
            Err(FieldViolation::OutOfRange(ContractField::CreditLimit))
        );
        assert_eq!(validate_credit_limit(d("0.01")), Ok(d("0.01")));
    }
}
