use crate::formatting::format_file_size;
use serde::{Deserialize, Serialize};

/// Display format for library dates (pt-BR)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Category given to freshly uploaded documents
pub const UPLOAD_CATEGORY: &str = "Rascunho";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Image,
}

impl DocumentKind {
    /// Guess the kind from the file extension; unknown extensions count as `doc`
    pub fn from_file_name(file_name: &str) -> Self {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => DocumentKind::Pdf,
            "jpg" | "jpeg" | "png" | "gif" => DocumentKind::Image,
            _ => DocumentKind::Doc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Doc => "doc",
            DocumentKind::Image => "image",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "image" => Some(DocumentKind::Image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub date: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    #[serde(rename = "folderId")]
    pub folder_id: Option<String>,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Document {
    /// Build the library entry for an uploaded file
    pub fn upload(id: String, file_name: &str, size_bytes: u64, folder_id: Option<String>) -> Self {
        let now = chrono::Local::now();

        Self {
            id,
            name: file_name.to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            size: format_file_size(size_bytes),
            kind: DocumentKind::from_file_name(file_name),
            folder_id,
            category: UPLOAD_CATEGORY.to_string(),
            created_at: now.timestamp(),
        }
    }

    /// Case-insensitive substring match on the display name
    pub fn matches(&self, term: &str) -> bool {
        term.trim().is_empty() || self.name.to_lowercase().contains(&term.trim().to_lowercase())
    }

    /// Placeholder body offered when the library has no stored bytes
    pub fn download_stub(&self) -> String {
        format!(
            "Conteúdo simulado do documento: {}\n\nData: {}\nTamanho: {}\nCategoria: {}",
            self.name, self.date, self.size, self.category
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

impl Folder {
    pub fn new(id: String, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }

    /// Plain-text listing of the folder contents
    pub fn summary(&self, documents: &[Document]) -> String {
        let lines: Vec<String> = documents
            .iter()
            .filter(|d| d.folder_id.as_deref() == Some(self.id.as_str()))
            .map(|d| format!("- {} ({})", d.name, d.size))
            .collect();

        format!(
            "Resumo da Pasta: {}\n\nDocumentos:\n{}",
            self.name,
            lines.join("\n")
        )
    }

    pub fn summary_file_name(&self) -> String {
        format!("{}_resumo.txt", self.name)
    }
}
