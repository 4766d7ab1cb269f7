use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });

// Note lifecycle.
define_client_error!(
    InvalidNoteFields,
    "Missing or invalid note fields: {fields}.",
    { fields: &str }
);
define_client_error!(NoteNotFound, "Note '{id}' does not exist.", { id: &str });
define_internal_error!(
    DuplicateNoteId,
    "Note '{id}' already exists and cannot be created again.",
    { id: &str }
);

// Contracts.
define_client_error!(
    InvalidContractFields,
    "Missing or invalid contract fields: {fields}.",
    { fields: &str }
);
define_client_error!(ContractNotFound, "Contract '{id}' does not exist.", { id: &str });
define_client_error!(
    ContractInUse,
    "Contract '{id}' still has notes issued under it.",
    { id: &str }
);
define_internal_error!(
    DuplicateContractId,
    "Contract '{id}' already exists and cannot be created again.",
    { id: &str }
);
