use crate::domain::{Signatory, SignedDocument};
use crate::infrastructure::database::{DatabaseError, Store};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid hash format: must be 64 hexadecimal characters")]
    InvalidHashFormat,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Public validation data for a signed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub hash: String,
    #[serde(rename = "arquivo")]
    pub file_name: String,
    #[serde(rename = "data_assinatura")]
    pub signed_at: String,
    #[serde(rename = "signatarios")]
    pub signatories: Vec<Signatory>,
}

impl From<SignedDocument> for ValidationRecord {
    fn from(doc: SignedDocument) -> Self {
        Self {
            hash: doc.id,
            file_name: doc.file_name,
            signed_at: doc.signed_at,
            signatories: doc.signatories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ValidationRecord>,
}

impl VerificationResult {
    pub fn not_found() -> Self {
        Self {
            exists: false,
            record: None,
        }
    }

    pub fn found(document: SignedDocument) -> Self {
        Self {
            exists: true,
            record: Some(document.into()),
        }
    }
}

pub struct VerifyUseCase<'a> {
    store: &'a dyn Store,
}

impl<'a> VerifyUseCase<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Look the hash up as typed and in its commonly mangled forms.
    /// Fails only when none of the forms is a well-formed hash.
    pub fn execute(&self, hash: &str) -> Result<VerificationResult, VerifyError> {
        let candidates: Vec<String> = Self::candidates(hash)
            .into_iter()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| Self::is_valid_hash(c))
            .collect();

        if candidates.is_empty() {
            return Err(VerifyError::InvalidHashFormat);
        }

        for candidate in &candidates {
            tracing::debug!(candidate = %candidate, "looking up signed document");
            match self.store.find_signed(candidate) {
                Ok(document) => return Ok(VerificationResult::found(document)),
                Err(DatabaseError::NotFound) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(VerificationResult::not_found())
    }

    /// Raw, spaces restored to `+`, URL-safe alphabet, percent-decoded
    pub fn candidates(hash: &str) -> Vec<String> {
        let raw = hash.trim();
        let mut forms = vec![
            raw.to_string(),
            raw.replace(' ', "+"),
            raw.replace('+', "-").replace('/', "_").trim_end_matches('=').to_string(),
        ];
        if let Ok(decoded) = urlencoding::decode(raw) {
            forms.push(decoded.trim().to_string());
        }
        forms.dedup();
        forms
    }

    fn is_valid_hash(hash: &str) -> bool {
        hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
    }
}
