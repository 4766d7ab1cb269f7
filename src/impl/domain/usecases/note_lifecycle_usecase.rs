use chrono::Utc;
use fractic_server_error::ServerError;
use tracing::{debug, info, instrument};

use crate::{
    domain::{
        logic::{
            attachment_merge::merge_attachments,
            date_interval::days_between,
            note_search::NoteSearch,
            note_validator::{describe_violations, NoteValidator, ValidNoteFields},
            settlement_calculator::compute_settlement,
        },
        repositories::{
            attachment_store::AttachmentStore, contract_repository::ContractRepository,
            note_repository::NoteRepository, party_repository::PartyRepository,
        },
    },
    entities::{
        Attachment, ContractId, FieldViolation, NoteField, NoteFields, NoteId, NoteRecord,
        NoteStatus, PartyId, PartyRef, PartyRole, SettlementInput,
    },
    errors::{InvalidNoteFields, NoteNotFound},
};

pub(crate) trait NoteLifecycleUsecase {
    fn create_note(&mut self, fields: NoteFields) -> Result<NoteRecord, ServerError>;

    fn update_note(&mut self, id: &NoteId, fields: NoteFields) -> Result<NoteRecord, ServerError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), ServerError>;

    fn set_status(&mut self, id: &NoteId, status: NoteStatus) -> Result<NoteRecord, ServerError>;

    fn find_note(&self, id: &NoteId) -> Result<NoteRecord, ServerError>;

    fn list_notes(&self) -> Result<Vec<NoteRecord>, ServerError>;

    fn search_notes(&self, query: &str) -> Result<Vec<NoteRecord>, ServerError>;

    /// Creates all notes or none: every entry is validated before the first
    /// one is stored.
    fn import_notes(&mut self, batch: Vec<NoteFields>) -> Result<Vec<NoteRecord>, ServerError>;
}

/// Owns the note and contract stores. Contract operations are implemented
/// in the sibling `contract_usecase` module.
pub(crate) struct NoteLifecycleUsecaseImpl<R, C, P, S>
where
    R: NoteRepository,
    C: ContractRepository,
    P: PartyRepository,
    S: AttachmentStore,
{
    pub(super) notes: R,
    pub(super) contracts: C,
    pub(super) parties: P,
    pub(super) attachments: S,
}

impl<R, C, P, S> NoteLifecycleUsecaseImpl<R, C, P, S>
where
    R: NoteRepository,
    C: ContractRepository,
    P: PartyRepository,
    S: AttachmentStore,
{
    pub(crate) fn new(notes: R, contracts: C, parties: P, attachments: S) -> Self {
        Self {
            notes,
            contracts,
            parties,
            attachments,
        }
    }

    pub(crate) fn parties(&self) -> &P {
        &self.parties
    }

    pub(crate) fn attachments(&self) -> &S {
        &self.attachments
    }

    /// Validates the fields and resolves both parties, reporting every
    /// problem at once.
    fn resolve(
        &self,
        fields: &NoteFields,
    ) -> Result<(ValidNoteFields, PartyRef, PartyRef), ServerError> {
        let (valid, mut violations) = match NoteValidator::new(fields).validate() {
            Ok(valid) => (Some(valid), Vec::new()),
            Err(violations) => (None, violations),
        };
        let assignor = self.resolve_party(
            PartyRole::Assignor,
            NoteField::AssignorId,
            fields.assignor_id.as_ref(),
            &mut violations,
        )?;
        let debtor = self.resolve_party(
            PartyRole::Debtor,
            NoteField::DebtorId,
            fields.debtor_id.as_ref(),
            &mut violations,
        )?;
        if let Some(contract_id) = &fields.contract_id {
            self.check_contract(contract_id, fields.assignor_id.as_ref(), &mut violations)?;
        }
        match (valid, assignor, debtor) {
            (Some(valid), Some(assignor), Some(debtor)) if violations.is_empty() => {
                Ok((valid, assignor, debtor))
            }
            _ => {
                let described = describe_violations(&violations);
                debug!(violations = %described, "Note fields rejected");
                Err(InvalidNoteFields::new(&described))
            }
        }
    }

    fn resolve_party(
        &self,
        role: PartyRole,
        field: NoteField,
        id: Option<&PartyId>,
        violations: &mut Vec<FieldViolation>,
    ) -> Result<Option<PartyRef>, ServerError> {
        let Some(id) = id.filter(|id| !id.0.trim().is_empty()) else {
            // Already reported as missing by the validator.
            return Ok(None);
        };
        match self.parties.find(role, id)? {
            Some(party) => Ok(Some(PartyRef {
                id: party.id,
                name: party.legal_name,
                tax_id: party.tax_id,
            })),
            None => {
                violations.push(FieldViolation::UnknownParty(field));
                Ok(None)
            }
        }
    }

    fn check_contract(
        &self,
        id: &ContractId,
        assignor_id: Option<&PartyId>,
        violations: &mut Vec<FieldViolation>,
    ) -> Result<(), ServerError> {
        match self.contracts.find_by_id(id)? {
            None => violations.push(FieldViolation::UnknownContract(NoteField::ContractId)),
            Some(contract) if assignor_id.is_some_and(|a| *a != contract.assignor.id) => {
                violations.push(FieldViolation::ForeignContract(NoteField::ContractId))
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Builds a fresh pending record. Returns it together with attachments
    /// superseded within the same submission.
    fn prepare_new(&self, fields: &NoteFields) -> Result<(NoteRecord, Vec<Attachment>), ServerError> {
        let (valid, assignor, debtor) = self.resolve(fields)?;
        let merged = merge_attachments(&[], &fields.attachments);
        let now = Utc::now();
        let record = build_record(
            NoteId::generate(),
            valid,
            assignor,
            debtor,
            NoteStatus::Pending,
            merged.kept,
            now,
            now,
        );
        Ok((record, merged.replaced))
    }

    fn existing(&self, id: &NoteId) -> Result<NoteRecord, ServerError> {
        self.notes
            .find_by_id(id)?
            .ok_or_else(|| NoteNotFound::new(&id.to_string()))
    }

    pub(super) fn release_all(&mut self, attachments: &[Attachment]) {
        for attachment in attachments {
            self.attachments.release(&attachment.handle);
        }
    }
}

impl<R, C, P, S> NoteLifecycleUsecase for NoteLifecycleUsecaseImpl<R, C, P, S>
where
    R: NoteRepository,
    C: ContractRepository,
    P: PartyRepository,
    S: AttachmentStore,
{
    #[instrument(skip(self, input))]
    fn create_note(&mut self, input: NoteFields) -> Result<NoteRecord, ServerError> {
        let (record, superseded) = self.prepare_new(&input)?;
        let record = self.notes.create(record)?;
        self.release_all(&superseded);
        info!(
            note_id = %record.id,
            number = %record.number,
            net_payable = %record.settlement.net_payable,
            "Note created"
        );
        Ok(record)
    }

    #[instrument(skip(self, patch), fields(note_id = %id))]
    fn update_note(&mut self, id: &NoteId, patch: NoteFields) -> Result<NoteRecord, ServerError> {
        let current = self.existing(id)?;
        let (valid, assignor, debtor) = self.resolve(&NoteFields::merged(&current, &patch))?;
        let merged = merge_attachments(&current.attachments, &patch.attachments);
        let record = build_record(
            current.id,
            valid,
            assignor,
            debtor,
            current.status,
            merged.kept,
            current.created_at,
            Utc::now(),
        );
        let record = self.notes.update(record)?;
        self.release_all(&merged.replaced);
        info!(
            note_id = %record.id,
            net_payable = %record.settlement.net_payable,
            replaced_attachments = merged.replaced.len(),
            "Note updated"
        );
        Ok(record)
    }

    #[instrument(skip(self), fields(note_id = %id))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), ServerError> {
        let removed = self.notes.delete(id)?;
        self.release_all(&removed.attachments);
        info!(
            note_id = %removed.id,
            released_attachments = removed.attachments.len(),
            "Note deleted"
        );
        Ok(())
    }

    #[instrument(skip(self), fields(note_id = %id))]
    fn set_status(&mut self, id: &NoteId, status: NoteStatus) -> Result<NoteRecord, ServerError> {
        let mut record = self.existing(id)?;
        let previous = record.status;
        record.status = status;
        record.updated_at = Utc::now();
        let record = self.notes.update(record)?;
        info!(
            note_id = %record.id,
            from = previous.as_str(),
            to = status.as_str(),
            "Note status changed"
        );
        Ok(record)
    }

    fn find_note(&self, id: &NoteId) -> Result<NoteRecord, ServerError> {
        self.existing(id)
    }

    fn list_notes(&self) -> Result<Vec<NoteRecord>, ServerError> {
        self.notes.list()
    }

    fn search_notes(&self, query: &str) -> Result<Vec<NoteRecord>, ServerError> {
        Ok(NoteSearch::new(query).filter(self.notes.list()?))
    }

    #[instrument(skip(self, batch), fields(rows = batch.len()))]
    fn import_notes(&mut self, batch: Vec<NoteFields>) -> Result<Vec<NoteRecord>, ServerError> {
        let prepared = batch
            .iter()
            .map(|fields| self.prepare_new(fields))
            .collect::<Result<Vec<_>, _>>()?;
        let mut created = Vec::with_capacity(prepared.len());
        for (record, superseded) in prepared {
            created.push(self.notes.create(record)?);
            self.release_all(&superseded);
        }
        info!(count = created.len(), "Notes imported");
        Ok(created)
    }
}

#[allow(clippy::too_many_arguments)]
fn build_record(
    id: NoteId,
    valid: ValidNoteFields,
    assignor: PartyRef,
    debtor: PartyRef,
    status: NoteStatus,
    attachments: Vec<Attachment>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
) -> NoteRecord {
    let elapsed_days = days_between(valid.issuance_date, valid.due_date);
    let settlement = compute_settlement(&SettlementInput {
        face_value: valid.face_value,
        monthly_rate_percent: valid.monthly_rate_percent,
        elapsed_days,
        fixed_fee: valid.fixed_fee.unwrap_or_default(),
        admin_fee_percent: valid.admin_fee_percent.unwrap_or_default(),
        tax_percent: valid.tax_percent.unwrap_or_default(),
    });
    NoteRecord {
        id,
        number: valid.number,
        assignor,
        debtor,
        issuance_date: valid.issuance_date,
        due_date: valid.due_date,
        face_value: valid.face_value,
        monthly_rate_percent: valid.monthly_rate_percent,
        fixed_fee: valid.fixed_fee,
        admin_fee_percent: valid.admin_fee_percent,
        tax_percent: valid.tax_percent,
        contract_id: valid.contract_id,
        elapsed_days,
        settlement,
        status,
        attachments,
        created_at,
        updated_at,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        data::{
            datasources::key_value_datasource::MemoryKeyValueDatasourceImpl,
            repositories::{
                attachment_store_impl::MemoryAttachmentStore,
                contract_repository_impl::ContractRepositoryImpl,
                note_repository_impl::NoteRepositoryImpl,
                party_repository_impl::PartyRepositoryImpl,
            },
        },
        entities::{AttachmentHandle, AttachmentKind, Party, RiskLevel},
    };

    type Usecase = NoteLifecycleUsecaseImpl<
        NoteRepositoryImpl<MemoryKeyValueDatasourceImpl>,
        ContractRepositoryImpl<MemoryKeyValueDatasourceImpl>,
        PartyRepositoryImpl,
        MemoryAttachmentStore,
    >;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn party(id: &str, role: PartyRole, name: &str, tax_id: &str) -> Party {
        Party {
            id: id.into(),
            role,
            legal_name: name.to_string(),
            tax_id: tax_id.to_string(),
            address: String::new(),
            bank_account: None,
            risk: RiskLevel::NotAssessed,
            created_on: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        }
    }

    fn usecase() -> Usecase {
        NoteLifecycleUsecaseImpl::new(
            NoteRepositoryImpl::new(MemoryKeyValueDatasourceImpl::new(), "notes").unwrap(),
            ContractRepositoryImpl::new(MemoryKeyValueDatasourceImpl::new(), "contracts").unwrap(),
            PartyRepositoryImpl::new(vec![
                party("c1", PartyRole::Assignor, "Agro Silva LTDA", "12.345.678/0001-99"),
                party("c2", PartyRole::Assignor, "Transporte Neo ME", "98.765.432/0001-00"),
                party("s1", PartyRole::Debtor, "Mercado XPTO", "11.222.333/0001-44"),
            ]),
            MemoryAttachmentStore::new(),
        )
    }

    fn attachment(kind: AttachmentKind, handle: &str) -> Attachment {
        Attachment {
            kind,
            name: format!("{handle}.pdf"),
            size_bytes: 512,
            handle: AttachmentHandle(handle.to_string()),
        }
    }

    fn fields() -> NoteFields {
        NoteFields {
            assignor_id: Some("c1".into()),
            debtor_id: Some("s1".into()),
            number: Some("NF-1001".to_string()),
            issuance_date: NaiveDate::from_ymd_opt(2025, 8, 15),
            due_date: NaiveDate::from_ymd_opt(2025, 8, 20),
            face_value: Some(d("21000")),
            monthly_rate_percent: Some(d("3.5")),
            ..Default::default()
        }
    }

    #[test]
    fn create_computes_settlement_and_resolves_parties() {
        let mut usecase = usecase();
        let note = usecase.create_note(fields()).unwrap();
        assert_eq!(note.status, NoteStatus::Pending);
        assert_eq!(note.elapsed_days(), 5);
        assert_eq!(note.settlement().financial_discount, d("122.50"));
        assert_eq!(note.net_payable(), d("20877.50"));
        assert_eq!(note.assignor.name, "Agro Silva LTDA");
        assert_eq!(note.debtor.tax_id, "11.222.333/0001-44");
        assert_eq!(usecase.find_note(&note.id).unwrap(), note);
    }

    #[test]
    fn unknown_parties_are_field_violations() {
        let mut usecase = usecase();
        let result = usecase.create_note(NoteFields {
            assignor_id: Some("s1".into()),
            debtor_id: Some("nope".into()),
            ..fields()
        });
        assert!(result.is_err());
        assert!(usecase.list_notes().unwrap().is_empty());
    }

    #[test]
    fn missing_fields_create_nothing() {
        let mut usecase = usecase();
        assert!(usecase
            .create_note(NoteFields {
                face_value: None,
                ..fields()
            })
            .is_err());
        assert!(usecase.list_notes().unwrap().is_empty());
    }

    #[test]
    fn update_recomputes_and_keeps_identity() {
        let mut usecase = usecase();
        let created = usecase
            .create_note(NoteFields {
                attachments: vec![attachment(AttachmentKind::Invoice, "nf")],
                ..fields()
            })
            .unwrap();
        let updated = usecase
            .update_note(
                &created.id,
                NoteFields {
                    monthly_rate_percent: Some(d("6")),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.attachments, created.attachments);
        assert_eq!(updated.settlement().financial_discount, d("210"));
        assert_eq!(updated.net_payable(), d("20790"));
        assert!(usecase.attachments().released().is_empty());
    }

    #[test]
    fn update_replaces_attachment_of_same_kind() {
        let mut usecase = usecase();
        let created = usecase
            .create_note(NoteFields {
                attachments: vec![
                    attachment(AttachmentKind::Invoice, "nf-1"),
                    attachment(AttachmentKind::BankSlip, "boleto-1"),
                ],
                ..fields()
            })
            .unwrap();
        let updated = usecase
            .update_note(
                &created.id,
                NoteFields {
                    attachments: vec![attachment(AttachmentKind::Invoice, "nf-2")],
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(
            updated.attachments,
            vec![
                attachment(AttachmentKind::Invoice, "nf-2"),
                attachment(AttachmentKind::BankSlip, "boleto-1"),
            ]
        );
        assert_eq!(
            usecase.attachments().released(),
            &[AttachmentHandle("nf-1".to_string())]
        );
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut usecase = usecase();
        let created = usecase
            .create_note(NoteFields {
                attachments: vec![attachment(AttachmentKind::Invoice, "nf-1")],
                ..fields()
            })
            .unwrap();
        let result = usecase.update_note(
            &created.id,
            NoteFields {
                face_value: Some(d("-5")),
                attachments: vec![attachment(AttachmentKind::Invoice, "nf-2")],
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(usecase.find_note(&created.id).unwrap(), created);
        assert!(usecase.attachments().released().is_empty());
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut usecase = usecase();
        let id = NoteId::generate();
        assert!(usecase.update_note(&id, fields()).is_err());
        assert!(usecase.delete_note(&id).is_err());
        assert!(usecase.set_status(&id, NoteStatus::Paid).is_err());
        assert!(usecase.find_note(&id).is_err());
    }

    #[test]
    fn delete_releases_every_attachment() {
        let mut usecase = usecase();
        let created = usecase
            .create_note(NoteFields {
                attachments: vec![
                    attachment(AttachmentKind::Invoice, "nf"),
                    attachment(AttachmentKind::Amendment, "aditivo"),
                ],
                ..fields()
            })
            .unwrap();
        usecase.delete_note(&created.id).unwrap();
        assert!(usecase.list_notes().unwrap().is_empty());
        assert_eq!(
            usecase.attachments().released(),
            &[
                AttachmentHandle("nf".to_string()),
                AttachmentHandle("aditivo".to_string()),
            ]
        );
    }

    #[test]
    fn any_status_transition_is_allowed() {
        let mut usecase = usecase();
        let created = usecase.create_note(fields()).unwrap();
        for status in [
            NoteStatus::Cancelled,
            NoteStatus::Pending,
            NoteStatus::Paid,
            NoteStatus::Cancelled,
        ] {
            let updated = usecase.set_status(&created.id, status).unwrap();
            assert_eq!(updated.status, status);
            assert_eq!(updated.settlement(), created.settlement());
        }
    }

    #[test]
    fn import_is_all_or_nothing() {
        let mut usecase = usecase();
        let batch = vec![
            fields(),
            NoteFields {
                number: None,
                ..fields()
            },
        ];
        assert!(usecase.import_notes(batch).is_err());
        assert!(usecase.list_notes().unwrap().is_empty());

        let created = usecase
            .import_notes(vec![
                fields(),
                NoteFields {
                    number: Some("NF-1002".to_string()),
                    ..fields()
                },
            ])
            .unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(usecase.list_notes().unwrap().len(), 2);
    }

    #[test]
    fn search_filters_stored_notes() {
        let mut usecase = usecase();
        usecase.create_note(fields()).unwrap();
        assert_eq!(usecase.search_notes("agro").unwrap().len(), 1);
        assert_eq!(usecase.search_notes("nf-2000").unwrap().len(), 0);
    }
}
