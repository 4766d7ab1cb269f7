use fractic_server_error::ServerError;

use crate::entities::{NoteId, NoteRecord};

/// Storage of note records. Implementations must leave their state untouched
/// when an operation fails.
pub trait NoteRepository {
    /// Fails if a record with the same id already exists.
    fn create(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError>;

    /// Replaces the stored record with the same id. Fails with `NoteNotFound`
    /// if there is none.
    fn update(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError>;

    /// Removes and returns the record. Fails with `NoteNotFound` if unknown.
    fn delete(&mut self, id: &NoteId) -> Result<NoteRecord, ServerError>;

    /// All records, newest first.
    fn list(&self) -> Result<Vec<NoteRecord>, ServerError>;

    fn find_by_id(&self, id: &NoteId) -> Result<Option<NoteRecord>, ServerError>;
}

impl<T: NoteRepository + ?Sized> NoteRepository for Box<T> {
    fn create(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError> {
        (**self).create(note)
    }

    fn update(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError> {
        (**self).update(note)
    }

    fn delete(&mut self, id: &NoteId) -> Result<NoteRecord, ServerError> {
        (**self).delete(id)
    }

    fn list(&self) -> Result<Vec<NoteRecord>, ServerError> {
        (**self).list()
    }

    fn find_by_id(&self, id: &NoteId) -> Result<Option<NoteRecord>, ServerError> {
        (**self).find_by_id(id)
    }
}
