use tracing::debug;

use crate::{domain::repositories::attachment_store::AttachmentStore, entities::AttachmentHandle};

/// Keeps track of released handles without owning any real resource. Meant
/// for tests and for inspecting release order: every released handle is kept
/// for the lifetime of the store, so it is not suited to long-running use.
#[derive(Debug, Default)]
pub struct MemoryAttachmentStore {
    released: Vec<AttachmentHandle>,
}

impl MemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn released(&self) -> &[AttachmentHandle] {
        &self.released
    }
}

impl AttachmentStore for MemoryAttachmentStore {
    fn release(&mut self, handle: &AttachmentHandle) {
        debug!(handle = %handle, "Attachment released");
        self.released.push(handle.clone());
    }
}
