mod audit;
mod document;
mod envelope;
mod receipt;
mod signed;

pub use audit::{AuditAction, AuditLogEntry, TIMESTAMP_FORMAT};
pub use document::{Document, DocumentKind, Folder, DATE_FORMAT, UPLOAD_CATEGORY};
pub use envelope::{Envelope, EnvelopeStatus, Recipient, SignatureStatus};
pub use receipt::SignatureReceipt;
pub use signed::{content_hash, Signatory, SignedDocument, SIGNED_AT_FORMAT};
