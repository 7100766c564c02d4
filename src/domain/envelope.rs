use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureStatus {
    #[default]
    Pending,
    Signed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
    /// Free-text tag such as CONTRATANTE, CONTRATADA or TESTEMUNHA
    pub role: String,
    #[serde(default)]
    pub status: SignatureStatus,
}

impl Recipient {
    pub fn new(name: &str, email: &str, role: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role: role.trim().to_uppercase(),
            status: SignatureStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Sent,
    Completed,
}

impl EnvelopeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeStatus::Sent => "sent",
            EnvelopeStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sent" => Some(EnvelopeStatus::Sent),
            "completed" => Some(EnvelopeStatus::Completed),
            _ => None,
        }
    }
}

/// A send-for-signature package: one document plus its recipient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub document_id: String,
    pub subject: String,
    pub message: String,
    pub deadline: Option<String>,
    pub auto_reminder: bool,
    /// Present when the sender also signs
    pub sender: Option<Recipient>,
    pub recipients: Vec<Recipient>,
    pub status: EnvelopeStatus,
    pub created_at: i64,
}

impl Envelope {
    /// Everyone expected to sign, sender first when self-signing
    pub fn signatories(&self) -> impl Iterator<Item = &Recipient> {
        self.sender.iter().chain(self.recipients.iter())
    }

    pub fn is_fully_signed(&self) -> bool {
        self.signatories()
            .all(|r| r.status == SignatureStatus::Signed)
    }

    /// Mark every pending party with this e-mail as signed, matching
    /// case-insensitively. Returns how many parties changed.
    pub fn mark_signed(&mut self, email: &str) -> usize {
        let email = email.trim();
        if email.is_empty() {
            return 0;
        }

        let mut marked = 0;
        for party in self.sender.iter_mut().chain(self.recipients.iter_mut()) {
            if party.status == SignatureStatus::Pending && party.email.eq_ignore_ascii_case(email) {
                party.status = SignatureStatus::Signed;
                marked += 1;
            }
        }

        if self.is_fully_signed() {
            self.status = EnvelopeStatus::Completed;
        }
        marked
    }
}
