use crate::entities::Attachment;

pub(crate) struct MergedAttachments {
    pub kept: Vec<Attachment>,
    /// Attachments pushed out by a newer one of the same kind. Their handles
    /// must be released once the merge is committed.
    pub replaced: Vec<Attachment>,
}

/// Merges `incoming` into `existing`, keeping at most one attachment per kind.
/// A newer attachment replaces the older one in place; later entries of
/// `incoming` win over earlier ones.
pub(crate) fn merge_attachments(
    existing: &[Attachment],
    incoming: &[Attachment],
) -> MergedAttachments {
    let mut kept: Vec<Attachment> = existing.to_vec();
    let mut replaced = Vec::new();
    for attachment in incoming {
        match kept.iter_mut().find(|a| a.kind == attachment.kind) {
            Some(slot) => {
                let old = std::mem::replace(slot, attachment.clone());
                // Re-submitting the same handle must not release it.
                if old.handle != attachment.handle {
                    replaced.push(old);
                }
            }
            None => kept.push(attachment.clone()),
        }
    }
    // A handle displaced earlier in the loop can come back later on; it is
    // only released if the merged list no longer holds it.
    replaced.retain(|r| !kept.iter().any(|k| k.handle == r.handle));
    let mut seen = Vec::new();
    replaced.retain(|r| {
        let first = !seen.contains(&r.handle);
        seen.push(r.handle.clone());
        first
    });
    MergedAttachments { kept, replaced }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AttachmentHandle, AttachmentKind};

    fn attachment(kind: AttachmentKind, handle: &str) -> Attachment {
        Attachment {
            kind,
            name: format!("{handle}.pdf"),
            size_bytes: 1024,
            handle: AttachmentHandle(handle.to_string()),
        }
    }

    #[test]
    fn adds_new_kinds() {
        let merged = merge_attachments(
            &[attachment(AttachmentKind::Invoice, "nf")],
            &[attachment(AttachmentKind::BankSlip, "boleto")],
        );
        assert_eq!(merged.kept.len(), 2);
        assert!(merged.replaced.is_empty());
    }

    #[test]
    fn replaces_same_kind_and_reports_old_one() {
        let merged = merge_attachments(
            &[
                attachment(AttachmentKind::Invoice, "nf-old"),
                attachment(AttachmentKind::Amendment, "aditivo"),
            ],
            &[attachment(AttachmentKind::Invoice, "nf-new")],
        );
        assert_eq!(
            merged.kept,
            vec![
                attachment(AttachmentKind::Invoice, "nf-new"),
                attachment(AttachmentKind::Amendment, "aditivo"),
            ]
        );
        assert_eq!(merged.replaced, vec![attachment(AttachmentKind::Invoice, "nf-old")]);
    }

    #[test]
    fn later_incoming_entry_wins_within_one_submission() {
        let merged = merge_attachments(
            &[],
            &[
                attachment(AttachmentKind::BankSlip, "first"),
                attachment(AttachmentKind::BankSlip, "second"),
            ],
        );
        assert_eq!(merged.kept, vec![attachment(AttachmentKind::BankSlip, "second")]);
        assert_eq!(merged.replaced, vec![attachment(AttachmentKind::BankSlip, "first")]);
    }

    #[test]
    fn handle_restored_later_in_submission_is_not_released() {
        let merged = merge_attachments(
            &[attachment(AttachmentKind::Invoice, "h1")],
            &[
                attachment(AttachmentKind::Invoice, "h2"),
                attachment(AttachmentKind::Invoice, "h1"),
            ],
        );
        assert_eq!(merged.kept, vec![attachment(AttachmentKind::Invoice, "h1")]);
        assert_eq!(merged.replaced, vec![attachment(AttachmentKind::Invoice, "h2")]);
    }

    #[test]
    fn each_replaced_handle_is_reported_once() {
        let merged = merge_attachments(
            &[attachment(AttachmentKind::Invoice, "h1")],
            &[
                attachment(AttachmentKind::Invoice, "h2"),
                attachment(AttachmentKind::Invoice, "h3"),
                attachment(AttachmentKind::Invoice, "h2"),
                attachment(AttachmentKind::Invoice, "h3"),
            ],
        );
        assert_eq!(merged.kept, vec![attachment(AttachmentKind::Invoice, "h3")]);
        assert_eq!(
            merged.replaced,
            vec![
                attachment(AttachmentKind::Invoice, "h1"),
                attachment(AttachmentKind::Invoice, "h2"),
            ]
        );
    }

    #[test]
    fn resubmitted_handle_is_not_released() {
        let merged = merge_attachments(
            &[attachment(AttachmentKind::Invoice, "nf")],
            &[attachment(AttachmentKind::Invoice, "nf")],
        );
        assert_eq!(merged.kept.len(), 1);
        assert!(merged.replaced.is_empty());
    }
}
