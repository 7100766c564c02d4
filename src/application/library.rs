use crate::domain::{AuditAction, AuditLogEntry, Document, DocumentKind, Folder, DATE_FORMAT};
use crate::infrastructure::database::{DatabaseError, Store};
use crate::templates::ExportedFile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Actor recorded for actions taken by the account owner
pub const ACTOR_USER: &str = "Você";
/// Actor recorded for automatic steps
pub const ACTOR_SYSTEM: &str = "Sistema";

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Document name cannot be empty")]
    EmptyName,

    #[error("Folder name cannot be empty")]
    EmptyFolderName,

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Active folder plus search term, as shown in the documents view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(default, rename = "folderId")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub search: String,
}

pub struct LibraryUseCase<'a> {
    store: &'a dyn Store,
}

impl<'a> LibraryUseCase<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Add an uploaded file to the library, at the root or inside `folder_id`
    pub fn upload(
        &self,
        file_name: &str,
        size_bytes: u64,
        folder_id: Option<&str>,
    ) -> Result<Document, LibraryError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        self.require_folder(folder_id)?;

        let document = Document::upload(
            self.store.next_id()?,
            file_name,
            size_bytes,
            folder_id.map(str::to_string),
        );
        let created = AuditLogEntry::new(&document.id, AuditAction::Created, ACTOR_USER, Some("Documento criado"));
        self.store.in_transaction(&mut || {
            self.store.save_document(&document)?;
            self.store.append_audit(&created)
        })?;

        tracing::info!(id = %document.id, name = %document.name, "document uploaded");
        Ok(document)
    }

    pub fn create_folder(&self, name: &str) -> Result<Folder, LibraryError> {
        if name.trim().is_empty() {
            return Err(LibraryError::EmptyFolderName);
        }
        let folder = Folder::new(self.store.next_id()?, name);
        self.store.save_folder(&folder)?;

        tracing::info!(id = %folder.id, name = %folder.name, "folder created");
        Ok(folder)
    }

    /// Move to a folder, or back to the root when `folder_id` is `None`
    pub fn move_document(&self, id: &str, folder_id: Option<&str>) -> Result<Document, LibraryError> {
        let mut document = self.document(id)?;
        let target = self.require_folder(folder_id)?;

        document.folder_id = folder_id.map(str::to_string);
        let details = match &target {
            Some(folder) => format!("Movido para {}", folder.name),
            None => "Movido para a raiz".to_string(),
        };
        let moved = AuditLogEntry::new(&document.id, AuditAction::Moved, ACTOR_USER, Some(&details));

        self.store.in_transaction(&mut || {
            self.store.update_document(&document)?;
            self.store.append_audit(&moved)
        })?;

        tracing::info!(id, folder = ?folder_id, "document moved");
        Ok(document)
    }

    pub fn rename_document(&self, id: &str, new_name: &str) -> Result<Document, LibraryError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        let mut document = self.document(id)?;
        let details = format!("{} -> {}", document.name, new_name);

        document.name = new_name.to_string();
        let renamed = AuditLogEntry::new(&document.id, AuditAction::Renamed, ACTOR_USER, Some(&details));

        self.store.in_transaction(&mut || {
            self.store.update_document(&document)?;
            self.store.append_audit(&renamed)
        })?;

        tracing::info!(id, name = new_name, "document renamed");
        Ok(document)
    }

    pub fn delete_document(&self, id: &str) -> Result<(), LibraryError> {
        self.store.delete_document(id).map_err(|e| match e {
            DatabaseError::NotFound => LibraryError::DocumentNotFound(id.to_string()),
            other => other.into(),
        })?;
        tracing::info!(id, "document deleted");
        Ok(())
    }

    /// Deletes the folder together with the documents filed in it
    pub fn delete_folder(&self, id: &str) -> Result<usize, LibraryError> {
        let removed = self.store.delete_folder(id).map_err(|e| match e {
            DatabaseError::NotFound => LibraryError::FolderNotFound(id.to_string()),
            other => other.into(),
        })?;
        tracing::info!(id, removed, "folder deleted");
        Ok(removed)
    }

    pub fn list(&self, filter: &DocumentFilter) -> Result<Vec<Document>, LibraryError> {
        let documents = self.store.list_documents(filter.folder_id.as_deref())?;
        Ok(documents
            .into_iter()
            .filter(|d| d.matches(&filter.search))
            .collect())
    }

    pub fn folders(&self) -> Result<Vec<Folder>, LibraryError> {
        Ok(self.store.list_folders()?)
    }

    pub fn document(&self, id: &str) -> Result<Document, LibraryError> {
        self.store.find_document(id).map_err(|e| match e {
            DatabaseError::NotFound => LibraryError::DocumentNotFound(id.to_string()),
            other => other.into(),
        })
    }

    /// Record that someone opened the document
    pub fn mark_viewed(&self, id: &str, actor: &str) -> Result<(), LibraryError> {
        self.document(id)?;
        self.audit(id, AuditAction::Viewed, actor, Some("Visualizou o documento"))
    }

    pub fn audit_trail(&self, id: &str) -> Result<Vec<AuditLogEntry>, LibraryError> {
        self.document(id)?;
        Ok(self.store.audit_trail(id)?)
    }

    pub fn folder_summary(&self, id: &str) -> Result<ExportedFile, LibraryError> {
        let folder = self
            .require_folder(Some(id))?
            .ok_or_else(|| LibraryError::FolderNotFound(id.to_string()))?;
        let documents = self.store.list_documents(Some(id))?;

        Ok(ExportedFile {
            file_name: folder.summary_file_name(),
            mime_type: "text/plain",
            content: folder.summary(&documents),
        })
    }

    pub fn download_stub(&self, id: &str) -> Result<ExportedFile, LibraryError> {
        let document = self.document(id)?;
        Ok(ExportedFile {
            file_name: document.name.clone(),
            mime_type: "text/plain",
            content: document.download_stub(),
        })
    }

    /// Fill an empty library with the demo folders and documents.
    /// Returns `false` without touching anything when the library has content.
    pub fn seed_demo(&self) -> Result<bool, LibraryError> {
        if self.store.count_documents()? > 0 || !self.store.list_folders()?.is_empty() {
            return Ok(false);
        }

        self.store.in_transaction(&mut || {
            let mut folders = Vec::new();
            for name in ["Contratos 2024", "Recibos", "Propostas"] {
                let folder = Folder::new(self.store.next_id()?, name);
                self.store.save_folder(&folder)?;
                folders.push(folder.id);
            }
            let [contratos, recibos, propostas] = [&folders[0], &folders[1], &folders[2]];

            let demo = [
                ("Documento Geral.pdf", "15/04/2024", "1.0 MB", DocumentKind::Pdf, None, "Geral"),
                ("Contrato Social.pdf", "12/05/2024", "1.2 MB", DocumentKind::Pdf, Some(contratos), "Jurídico"),
                ("Recibo Maio.pdf", "30/05/2024", "0.5 MB", DocumentKind::Pdf, Some(recibos), "Financeiro"),
                ("Proposta Cliente X.docx", "01/06/2024", "2.4 MB", DocumentKind::Doc, Some(propostas), "Vendas"),
            ];

            for (name, date, size, kind, folder, category) in demo {
                let created_at = chrono::NaiveDate::parse_from_str(date, DATE_FORMAT)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc().timestamp())
                    .unwrap_or_default();

                let document = Document {
                    id: self.store.next_id()?,
                    name: name.to_string(),
                    date: date.to_string(),
                    size: size.to_string(),
                    kind,
                    folder_id: folder.cloned(),
                    category: category.to_string(),
                    created_at,
                };
                self.store.save_document(&document)?;
            }
            Ok(())
        })?;

        tracing::info!("library seeded with demo content");
        Ok(true)
    }

    /// `None` is the root and always valid; anything else must exist
    fn require_folder(&self, folder_id: Option<&str>) -> Result<Option<Folder>, LibraryError> {
        match folder_id {
            None => Ok(None),
            Some(id) => self.store.find_folder(id).map(Some).map_err(|e| match e {
                DatabaseError::NotFound => LibraryError::FolderNotFound(id.to_string()),
                other => other.into(),
            }),
        }
    }

    fn audit(
        &self,
        document_id: &str,
        action: AuditAction,
        actor: &str,
        details: Option<&str>,
    ) -> Result<(), LibraryError> {
        let entry = AuditLogEntry::new(document_id, action, actor, details);
        self.store.append_audit(&entry)?;
        Ok(())
    }
}
