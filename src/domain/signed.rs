use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const SIGNED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    pub name: String,
    pub email: String,
    /// Human label, e.g. "Parte Contratante"
    #[serde(rename = "tipo")]
    pub role_label: String,
}

impl Signatory {
    pub fn new(name: &str, email: &str, role_label: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role_label: role_label.to_string(),
        }
    }

    /// Label used on the validation page for a recipient role tag
    pub fn label_for_role(role: &str) -> String {
        match role.trim().to_uppercase().as_str() {
            "CONTRATANTE" => "Parte Contratante".to_string(),
            "CONTRATADA" | "CONTRATADO" => "Parte Contratada".to_string(),
            "TESTEMUNHA" => "Testemunha".to_string(),
            other => other.to_string(),
        }
    }
}

/// Record kept for every signed file so it can be validated publicly by hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedDocument {
    /// SHA-256 of the signed content, 64 lowercase hex characters
    pub id: String,
    pub file_name: String,
    pub signed_at: String,
    pub signatories: Vec<Signatory>,
    pub created_at: i64,
}

impl SignedDocument {
    pub fn new(content: &[u8], file_name: &str, signatories: Vec<Signatory>) -> Self {
        let now = chrono::Local::now();

        Self {
            id: content_hash(content),
            file_name: file_name.to_string(),
            signed_at: now.format(SIGNED_AT_FORMAT).to_string(),
            signatories,
            created_at: now.timestamp(),
        }
    }
}

pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
