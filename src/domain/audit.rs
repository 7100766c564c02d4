use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Created,
    Sent,
    Viewed,
    Signed,
    Completed,
    Moved,
    Renamed,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Created => "created",
            AuditAction::Sent => "sent",
            AuditAction::Viewed => "viewed",
            AuditAction::Signed => "signed",
            AuditAction::Completed => "completed",
            AuditAction::Moved => "moved",
            AuditAction::Renamed => "renamed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(AuditAction::Created),
            "sent" => Some(AuditAction::Sent),
            "viewed" => Some(AuditAction::Viewed),
            "signed" => Some(AuditAction::Signed),
            "completed" => Some(AuditAction::Completed),
            "moved" => Some(AuditAction::Moved),
            "renamed" => Some(AuditAction::Renamed),
            _ => None,
        }
    }

    /// Translation key for the action label
    pub fn label_key(&self) -> String {
        format!("log.{}", self.as_str())
    }
}

/// One line of a document's audit trail. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub action: AuditAction,
    pub actor: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditLogEntry {
    pub fn new(document_id: &str, action: AuditAction, actor: &str, details: Option<&str>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            document_id: document_id.to_string(),
            action,
            actor: actor.to_string(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            details: details.map(str::to_string),
        }
    }
}
