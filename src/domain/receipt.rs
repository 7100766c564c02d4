use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReceipt {
    pub document_id: String,
    pub signed_at: String,
    pub validation_url: String,
    pub proof: String,
}

impl SignatureReceipt {
    pub fn new(document_id: String, signed_at: String, created_at: i64, validation_base: &str) -> Self {
        let proof = format!("sha256:{}@{}", document_id, created_at);
        let validation_url = format!(
            "{}/validar/{}",
            validation_base.trim_end_matches('/'),
            document_id
        );

        Self {
            document_id,
            signed_at,
            validation_url,
            proof,
        }
    }
}
