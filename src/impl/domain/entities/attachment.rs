#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    /// Fiscal invoice document (nota fiscal).
    Invoice,
    /// Bank payment slip (boleto).
    BankSlip,
    /// Contract amendment (aditivo).
    Amendment,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Invoice => "invoice",
            AttachmentKind::BankSlip => "bank_slip",
            AttachmentKind::Amendment => "amendment",
        }
    }
}

/// Opaque reference to a resource held on behalf of an attachment (an object
/// URL, a blob key, a temp file...). Handed back to the `AttachmentStore` once
/// the attachment leaves the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentHandle(pub String);

impl std::fmt::Display for AttachmentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub name: String,
    pub size_bytes: u64,
    pub handle: AttachmentHandle,
}
