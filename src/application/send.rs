use super::library::ACTOR_USER;
use crate::domain::{
    AuditAction, AuditLogEntry, Document, DocumentKind, Envelope, EnvelopeStatus, Recipient,
    DATE_FORMAT,
};
use crate::formatting::{format_megabytes, is_valid_email};
use crate::infrastructure::database::{DatabaseError, Store};
use serde::Serialize;
use thiserror::Error;

/// Category shown for documents that went through the send flow
pub const SENT_CATEGORY: &str = "Enviado";

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Select a document to send")]
    NoDocument,

    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("At least one recipient is required")]
    NoRecipients,

    #[error("Recipient {index}: name cannot be empty")]
    MissingRecipientName { index: usize },

    #[error("Recipient {index}: invalid e-mail '{email}'")]
    InvalidRecipientEmail { index: usize, email: String },

    #[error("Sender must have a name and a valid e-mail when signing")]
    InvalidSender,

    #[error("Envelope not found: {0}")]
    EnvelopeNotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Everything collected by the send form
#[derive(Debug, Clone, Default)]
pub struct EnvelopeDraft {
    pub file_name: String,
    pub size_bytes: u64,
    pub subject: String,
    pub message: String,
    pub deadline: Option<String>,
    pub auto_reminder: bool,
    /// Set when the sender signs too
    pub sender: Option<Recipient>,
    pub recipients: Vec<Recipient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendOutcome {
    pub envelope: Envelope,
    pub document: Document,
}

pub struct SendUseCase<'a> {
    store: &'a dyn Store,
}

impl<'a> SendUseCase<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub fn validate(draft: &EnvelopeDraft) -> Result<(), SendError> {
        if draft.file_name.trim().is_empty() {
            return Err(SendError::NoDocument);
        }
        if draft.subject.trim().is_empty() {
            return Err(SendError::EmptySubject);
        }
        if draft.recipients.is_empty() {
            return Err(SendError::NoRecipients);
        }

        for (index, recipient) in draft.recipients.iter().enumerate() {
            if recipient.name.trim().is_empty() {
                return Err(SendError::MissingRecipientName { index });
            }
            if !is_valid_email(&recipient.email) {
                return Err(SendError::InvalidRecipientEmail {
                    index,
                    email: recipient.email.clone(),
                });
            }
        }

        if let Some(sender) = &draft.sender {
            if sender.name.trim().is_empty() || !is_valid_email(&sender.email) {
                return Err(SendError::InvalidSender);
            }
        }

        Ok(())
    }

    /// Persist the envelope and file the document at the library root
    pub fn execute(&self, draft: EnvelopeDraft) -> Result<SendOutcome, SendError> {
        Self::validate(&draft)?;

        let now = chrono::Local::now();
        let file_name = draft.file_name.trim().to_string();
        let kind = match DocumentKind::from_file_name(&file_name) {
            DocumentKind::Pdf => DocumentKind::Pdf,
            _ => DocumentKind::Doc,
        };

        let document = Document {
            id: self.store.next_id()?,
            name: file_name,
            date: now.format(DATE_FORMAT).to_string(),
            size: format_megabytes(draft.size_bytes),
            kind,
            folder_id: None,
            category: SENT_CATEGORY.to_string(),
            created_at: now.timestamp(),
        };

        let envelope = Envelope {
            id: uuid::Uuid::new_v4().to_string(),
            document_id: document.id.clone(),
            subject: draft.subject.trim().to_string(),
            message: draft.message,
            deadline: draft.deadline.filter(|d| !d.trim().is_empty()),
            auto_reminder: draft.auto_reminder,
            sender: draft.sender,
            recipients: draft.recipients,
            status: EnvelopeStatus::Sent,
            created_at: now.timestamp(),
        };

        let recipients: Vec<&str> = envelope.recipients.iter().map(|r| r.email.as_str()).collect();
        let trail = [
            AuditLogEntry::new(&document.id, AuditAction::Created, ACTOR_USER, Some("Documento criado")),
            AuditLogEntry::new(
                &document.id,
                AuditAction::Sent,
                ACTOR_USER,
                Some(&format!("Enviado para assinatura: {}", recipients.join(", "))),
            ),
        ];

        self.store.in_transaction(&mut || {
            self.store.save_document(&document)?;
            self.store.save_envelope(&envelope)?;
            trail.iter().try_for_each(|entry| self.store.append_audit(entry))
        })?;

        tracing::info!(
            envelope = %envelope.id,
            document = %document.id,
            recipients = envelope.recipients.len(),
            "envelope sent"
        );

        Ok(SendOutcome { envelope, document })
    }

    /// Current state of an envelope, including who has signed so far
    pub fn envelope(&self, id: &str) -> Result<Envelope, SendError> {
        self.store.find_envelope(id).map_err(|e| match e {
            DatabaseError::NotFound => SendError::EnvelopeNotFound(id.to_string()),
            other => other.into(),
        })
    }
}
