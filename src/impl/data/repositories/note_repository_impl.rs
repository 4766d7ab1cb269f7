use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::{datasources::key_value_datasource::KeyValueDatasource, models::note_model::NoteModel},
    domain::repositories::note_repository::NoteRepository,
    entities::{NoteId, NoteRecord},
    errors::{DuplicateNoteId, InvalidJson, NoteNotFound},
};

/// Keeps the whole note list as a single JSON document under one key, and
/// mirrors it in memory. Each mutation writes the next list first and only
/// then adopts it, so a failed write leaves the repository unchanged.
pub(crate) struct NoteRepositoryImpl<DS: KeyValueDatasource> {
    datasource: DS,
    key: String,
    notes: Vec<NoteRecord>,
}

impl<DS: KeyValueDatasource> NoteRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS, key: impl Into<String>) -> Result<Self, ServerError> {
        let key = key.into();
        let notes = match datasource.get(&key)? {
            Some(raw) => serde_json::from_str::<Vec<NoteModel>>(&raw)
                .map_err(|e| InvalidJson::with_debug("note list", &e))?
                .into_iter()
                .map(Into::into)
                .collect(),
            None => Vec::new(),
        };
        debug!(key = %key, count = notes.len(), "Note list loaded");
        Ok(Self {
            datasource,
            key,
            notes,
        })
    }

    fn commit(&mut self, next: Vec<NoteRecord>) -> Result<(), ServerError> {
        let models: Vec<NoteModel> = next.iter().map(Into::into).collect();
        let raw = serde_json::to_string(&models)
            .map_err(|e| InvalidJson::with_debug("note list", &e))?;
        self.datasource.set(&self.key, &raw)?;
        self.notes = next;
        Ok(())
    }

    fn position(&self, id: &NoteId) -> Result<usize, ServerError> {
        self.notes
            .iter()
            .position(|n| n.id == *id)
            .ok_or_else(|| NoteNotFound::new(&id.to_string()))
    }
}

impl<DS: KeyValueDatasource> NoteRepository for NoteRepositoryImpl<DS> {
    fn create(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError> {
        if self.notes.iter().any(|n| n.id == note.id) {
            return Err(DuplicateNoteId::new(&note.id.to_string()));
        }
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;
        Ok(note)
    }

    fn update(&mut self, note: NoteRecord) -> Result<NoteRecord, ServerError> {
        let i = self.position(&note.id)?;
        let mut next = self.notes.clone();
        next[i] = note.clone();
        self.commit(next)?;
        Ok(note)
    }

    fn delete(&mut self, id: &NoteId) -> Result<NoteRecord, ServerError> {
        let i = self.position(id)?;
        let mut next = self.notes.clone();
        let removed = next.remove(i);
        self.commit(next)?;
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<NoteRecord>, ServerError> {
        Ok(self.notes.clone())
    }

    fn find_by_id(&self, id: &NoteId) -> Result<Option<NoteRecord>, ServerError> {
        Ok(self.notes.iter().find(|n| n.id == *id).cloned())
    }
}
