use super::library::ACTOR_SYSTEM;
use crate::domain::{
    AuditAction, AuditLogEntry, EnvelopeStatus, Signatory, SignatureReceipt, SignedDocument,
};
use crate::infrastructure::database::{DatabaseError, Store};
use crate::signature::{FontLibrary, PartySignature, Signature, SignatureFont, SigningRequest};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Filename cannot be empty")]
    EmptyFilename,

    #[error("Document with this content hash already exists")]
    DuplicateDocument,

    #[error("Library document not found: {0}")]
    UnknownDocument(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// One party as captured by the signing form
#[derive(Debug, Clone)]
pub struct PartyInput {
    pub role: String,
    pub name: String,
    pub signature: Option<Signature>,
}

/// Rasterize every party's signature and assemble the upload for the PDF
/// signer. Parties whose capture yields no image are sent unsigned.
pub fn prepare_signing_request(
    file_name: &str,
    content_type: &str,
    content: Vec<u8>,
    font: SignatureFont,
    parties: &[PartyInput],
    fonts: &FontLibrary,
) -> Result<SigningRequest, SignError> {
    if content.is_empty() {
        return Err(SignError::EmptyContent);
    }
    if file_name.trim().is_empty() {
        return Err(SignError::EmptyFilename);
    }

    let mut request = SigningRequest::new(file_name.trim(), content_type, content, font);
    for party in parties {
        let image = party.signature.as_ref().and_then(|s| s.rasterize(fonts));
        if party.signature.is_some() && image.is_none() {
            tracing::debug!(role = %party.role, "signature produced no image");
        }
        request = request.with_party(PartySignature::new(&party.role, &party.name, image));
    }

    Ok(request)
}

pub struct SignUseCase<'a> {
    store: &'a dyn Store,
    validation_base: String,
}

impl<'a> SignUseCase<'a> {
    pub fn new(store: &'a dyn Store, validation_base: &str) -> Self {
        Self {
            store,
            validation_base: validation_base.to_string(),
        }
    }

    /// Record a signed file so it can be validated by hash. When
    /// `library_document` is given, its audit trail gets the signing events.
    pub fn record(
        &self,
        content: &[u8],
        file_name: &str,
        signatories: Vec<Signatory>,
        library_document: Option<&str>,
    ) -> Result<SignatureReceipt, SignError> {
        if content.is_empty() {
            return Err(SignError::EmptyContent);
        }
        if file_name.trim().is_empty() {
            return Err(SignError::EmptyFilename);
        }
        if let Some(id) = library_document {
            self.store.find_document(id).map_err(|e| match e {
                DatabaseError::NotFound => SignError::UnknownDocument(id.to_string()),
                other => other.into(),
            })?;
        }

        let signed = SignedDocument::new(content, file_name.trim(), signatories);

        if self.store.find_signed(&signed.id).is_ok() {
            return Err(SignError::DuplicateDocument);
        }
        self.store
            .in_transaction(&mut || {
                self.store.save_signed(&signed)?;
                match library_document {
                    Some(id) => self.track_signing(id, &signed.signatories),
                    None => Ok(()),
                }
            })
            .map_err(|e| match e {
                DatabaseError::DuplicateHash => SignError::DuplicateDocument,
                other => other.into(),
            })?;

        tracing::info!(hash = %signed.id, file = %signed.file_name, "signed document recorded");

        Ok(SignatureReceipt::new(
            signed.id.clone(),
            signed.signed_at.clone(),
            signed.created_at,
            &self.validation_base,
        ))
    }

    /// Audit each signature on the library document and tick the signers off
    /// its envelope. The process is complete once nobody is left pending, or
    /// straight away when the document was never sent.
    fn track_signing(&self, document_id: &str, signatories: &[Signatory]) -> Result<(), DatabaseError> {
        for signatory in signatories {
            self.store.append_audit(&AuditLogEntry::new(
                document_id,
                AuditAction::Signed,
                &signatory.name,
                Some("Assinou o documento"),
            ))?;
        }

        let completed = match self.store.find_envelope_for_document(document_id)? {
            Some(mut envelope) => {
                for signatory in signatories {
                    envelope.mark_signed(&signatory.email);
                }
                self.store.save_envelope(&envelope)?;
                envelope.status == EnvelopeStatus::Completed
            }
            None => true,
        };

        if completed {
            self.store.append_audit(&AuditLogEntry::new(
                document_id,
                AuditAction::Completed,
                ACTOR_SYSTEM,
                Some("Processo finalizado"),
            ))?;
        }
        Ok(())
    }
}
