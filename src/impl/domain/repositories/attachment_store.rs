use crate::entities::AttachmentHandle;

/// Owner of the resources behind attachment handles.
pub trait AttachmentStore {
    /// Called once for every handle that leaves the system, whether replaced
    /// by a newer attachment of the same kind or dropped with its note.
    fn release(&mut self, handle: &AttachmentHandle);
}
