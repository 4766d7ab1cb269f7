use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{NoteFields, PartyId},
    errors::{InvalidCsv, InvalidCsvContent, ReadError},
};

/// Expected header, in order.
const COLUMNS: [&str; 10] = [
    "assignor_id",
    "debtor_id",
    "number",
    "issuance_date",
    "due_date",
    "face_value",
    "monthly_rate",
    "fixed_fee",
    "admin_fee",
    "tax",
];

/// Batch of notes to be created, one per CSV row. Empty cells are left absent
/// so that validation reports them like a blank form field.
pub(crate) trait NotesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<NoteFields>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<NoteFields>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct NotesCsvDatasourceImpl;

impl NotesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl NotesCsvDatasource for NotesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<NoteFields>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes());

        let headers = reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?;
        if headers.iter().ne(COLUMNS.iter().copied()) {
            return Err(InvalidCsvContent::new(&format!(
                "expected columns '{}'",
                COLUMNS.join(",")
            )));
        }

        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let cell = |i: usize| r.get(i).filter(|s| !s.is_empty());

                    // Parse.
                    let issuance_date = cell(3).map(ISODateModel::from_str).transpose()?;
                    let due_date = cell(4).map(ISODateModel::from_str).transpose()?;
                    let face_value = cell(5).map(AmountModel::from_str).transpose()?;
                    let monthly_rate = cell(6).map(AmountModel::from_str).transpose()?;
                    let fixed_fee = cell(7).map(AmountModel::from_str).transpose()?;
                    let admin_fee = cell(8).map(AmountModel::from_str).transpose()?;
                    let tax = cell(9).map(AmountModel::from_str).transpose()?;

                    // Build.
                    Ok(NoteFields {
                        assignor_id: cell(0).map(PartyId::from),
                        debtor_id: cell(1).map(PartyId::from),
                        number: cell(2).map(str::to_string),
                        issuance_date: issuance_date.map(Into::into),
                        due_date: due_date.map(Into::into),
                        face_value: face_value.map(Into::into),
                        monthly_rate_percent: monthly_rate.map(Into::into),
                        fixed_fee: fixed_fee.map(Into::into),
                        admin_fee_percent: admin_fee.map(Into::into),
                        tax_percent: tax.map(Into::into),
                        contract_id: None,
                        attachments: Vec::new(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<NoteFields>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
