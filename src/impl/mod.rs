// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod key_value_datasource;
        pub(crate) mod notes_csv_datasource;
        pub(crate) mod parties_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod contract_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod note_model;
        pub(crate) mod party_model;
        pub(crate) mod risk_level_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod attachment_store_impl;
        pub(crate) mod contract_repository_impl;
        pub(crate) mod note_repository_impl;
        pub(crate) mod party_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod attachment;
        pub(crate) mod contract;
        pub(crate) mod financial_entry;
        pub(crate) mod note;
        pub(crate) mod note_fields;
        pub(crate) mod party;
        pub(crate) mod settlement;
    }
    pub(crate) mod logic {
        pub(crate) mod attachment_merge;
        pub(crate) mod contract_usage;
        pub(crate) mod contract_validator;
        pub(crate) mod date_interval;
        pub(crate) mod entries_builder;
        pub(crate) mod note_search;
        pub(crate) mod note_validator;
        pub(crate) mod settlement_calculator;
    }
    pub(crate) mod repositories {
        pub(crate) mod attachment_store;
        pub(crate) mod contract_repository;
        pub(crate) mod note_repository;
        pub(crate) mod party_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod contract_usecase;
        pub(crate) mod note_lifecycle_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod note_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::attachment::*;
        pub use crate::domain::entities::contract::*;
        pub use crate::domain::entities::financial_entry::*;
        pub use crate::domain::entities::note::*;
        pub use crate::domain::entities::note_fields::*;
        pub use crate::domain::entities::party::*;
        pub use crate::domain::entities::settlement::*;
    }

    pub mod logic {
        pub use crate::domain::logic::contract_usage::contract_usage;
        pub use crate::domain::logic::date_interval::{days_between, elapsed_days};
        pub use crate::domain::logic::entries_builder::financial_entries;
        pub use crate::domain::logic::settlement_calculator::{
            checked_compute_settlement, compute_settlement,
        };
    }

    pub mod repositories {
        pub use crate::data::repositories::attachment_store_impl::MemoryAttachmentStore;
        pub use crate::domain::repositories::attachment_store::AttachmentStore;
        pub use crate::domain::repositories::contract_repository::ContractRepository;
        pub use crate::domain::repositories::note_repository::NoteRepository;
    }

    pub mod display {
        pub use crate::presentation::note_fmt::{format_breakdown, NoteRow};
        pub use crate::presentation::utils::{format_amount, format_percent};
    }
}
