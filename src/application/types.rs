use super::account::Registration;
use super::library::DocumentFilter;
use crate::domain::{Recipient, Signatory};
use crate::locale::Language;
use crate::payment::{BillingCycle, Plan};
use crate::signature::{Signature, SignatureFont};
use crate::templates::FieldValues;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadRequest {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameRequest {
    pub name: String,
}

/// Target a single document or folder
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveRequest {
    pub id: String,
    /// `null` moves the document back to the root
    #[serde(default)]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewRequest {
    pub id: String,
    #[serde(default)]
    pub actor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneRequest {
    /// Display name, e.g. "Brasil"; unknown names use the Brazilian mask
    pub country: String,
    pub input: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxIdRequest {
    pub input: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplatePageRequest {
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Html,
    Word,
    Send,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderTemplateRequest {
    pub template_id: String,
    #[serde(default)]
    pub values: FieldValues,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Defaults to a fresh random reference
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub format: RenderFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RasterizeRequest {
    pub signature: Signature,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PartyRequest {
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SigningRequestData {
    pub file_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Base64-encoded file
    pub content: String,
    #[serde(default)]
    pub font: SignatureFont,
    pub parties: Vec<PartyRequest>,
    #[serde(default)]
    pub boundary: Option<String>,
}

fn default_content_type() -> String {
    "application/pdf".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecipientRequest {
    pub name: String,
    pub email: String,
    #[serde(default = "default_recipient_role")]
    pub role: String,
}

fn default_recipient_role() -> String {
    "CONTRATADA".to_string()
}

impl RecipientRequest {
    pub fn to_recipient(&self) -> Recipient {
        Recipient::new(&self.name, &self.email, &self.role)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendRequest {
    pub file_name: String,
    /// Base64-encoded file; only its size is kept
    pub content: String,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default = "default_true")]
    pub auto_reminder: bool,
    #[serde(default)]
    pub sender: Option<RecipientRequest>,
    pub recipients: Vec<RecipientRequest>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordSignatureRequest {
    /// Base64-encoded signed file
    pub content: String,
    pub file_name: String,
    #[serde(default)]
    pub signatories: Vec<Signatory>,
    #[serde(default)]
    pub document_id: Option<String>,
}

/// Request to validate a signed document by hash
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyRequest {
    pub content_hash: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChargeRequest {
    pub plan: Plan,
    #[serde(default)]
    pub cycle: BillingCycle,
    pub name: String,
    pub tax_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfirmRequest {
    pub txid: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageRequest {
    pub language: Language,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslateRequest {
    pub keys: Vec<String>,
}

/// Everything a client can ask the service to do
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    UploadDocument { data: UploadRequest },
    CreateFolder { data: NameRequest },
    MoveDocument { data: MoveRequest },
    RenameDocument { data: RenameRequest },
    DeleteDocument { data: IdRequest },
    DeleteFolder { data: IdRequest },
    ListDocuments {
        #[serde(default)]
        data: DocumentFilter,
    },
    ListFolders,
    ViewDocument { data: ViewRequest },
    AuditTrail { data: IdRequest },
    FolderSummary { data: IdRequest },
    DownloadDocument { data: IdRequest },
    SeedDemo,

    FormatPhone { data: PhoneRequest },
    FormatTaxId { data: TaxIdRequest },

    ListTemplates {
        #[serde(default)]
        data: Option<TemplatePageRequest>,
    },
    RenderTemplate { data: RenderTemplateRequest },

    RasterizeSignature { data: RasterizeRequest },
    PrepareSigning { data: SigningRequestData },

    SendEnvelope { data: SendRequest },
    GetEnvelope { data: IdRequest },
    RecordSignature { data: RecordSignatureRequest },
    Validate { data: VerifyRequest },

    Register { data: Registration },
    Subscription,
    CreatePixCharge { data: ChargeRequest },
    ConfirmPayment { data: ConfirmRequest },

    SetLanguage { data: LanguageRequest },
    Translate { data: TranslateRequest },
}

impl Action {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::UploadDocument { .. } => "upload_document",
            Action::CreateFolder { .. } => "create_folder",
            Action::MoveDocument { .. } => "move_document",
            Action::RenameDocument { .. } => "rename_document",
            Action::DeleteDocument { .. } => "delete_document",
            Action::DeleteFolder { .. } => "delete_folder",
            Action::ListDocuments { .. } => "list_documents",
            Action::ListFolders => "list_folders",
            Action::ViewDocument { .. } => "view_document",
            Action::AuditTrail { .. } => "audit_trail",
            Action::FolderSummary { .. } => "folder_summary",
            Action::DownloadDocument { .. } => "download_document",
            Action::SeedDemo => "seed_demo",
            Action::FormatPhone { .. } => "format_phone",
            Action::FormatTaxId { .. } => "format_tax_id",
            Action::ListTemplates { .. } => "list_templates",
            Action::RenderTemplate { .. } => "render_template",
            Action::RasterizeSignature { .. } => "rasterize_signature",
            Action::PrepareSigning { .. } => "prepare_signing",
            Action::SendEnvelope { .. } => "send_envelope",
            Action::GetEnvelope { .. } => "get_envelope",
            Action::RecordSignature { .. } => "record_signature",
            Action::Validate { .. } => "validate",
            Action::Register { .. } => "register",
            Action::Subscription => "subscription",
            Action::CreatePixCharge { .. } => "create_pix_charge",
            Action::ConfirmPayment { .. } => "confirm_payment",
            Action::SetLanguage { .. } => "set_language",
            Action::Translate { .. } => "translate",
        }
    }

    /// Pure computations that never touch persisted state
    pub fn is_stateless(&self) -> bool {
        matches!(
            self,
            Action::FormatPhone { .. }
                | Action::FormatTaxId { .. }
                | Action::ListTemplates { .. }
                | Action::RenderTemplate { .. }
                | Action::RasterizeSignature { .. }
                | Action::PrepareSigning { .. }
        )
    }
}

/// Successful action result: a type tag plus the payload
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub data: serde_json::Value,
}

impl ActionResponse {
    pub fn new<T: Serialize>(response_type: &str, data: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            response_type: response_type.to_string(),
            data: serde_json::to_value(data)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
