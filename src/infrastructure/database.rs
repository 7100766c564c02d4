use crate::domain::{
    AuditAction, AuditLogEntry, Document, DocumentKind, Envelope, EnvelopeStatus, Folder,
    SignedDocument,
};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Bumped whenever the table layout changes; stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Duplicate document hash")]
    DuplicateHash,

    #[error("Unsupported schema version {found} (expected at most {supported})")]
    UnsupportedSchema { found: i64, supported: i64 },

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

/// Document and folder library
pub trait LibraryRepository {
    /// Timestamp-derived id, bumped past the last one handed out
    fn next_id(&self) -> Result<String, DatabaseError>;
    fn save_document(&self, doc: &Document) -> Result<(), DatabaseError>;
    fn update_document(&self, doc: &Document) -> Result<(), DatabaseError>;
    fn find_document(&self, id: &str) -> Result<Document, DatabaseError>;
    fn delete_document(&self, id: &str) -> Result<(), DatabaseError>;
    /// Newest first, optionally restricted to one folder
    fn list_documents(&self, folder_id: Option<&str>) -> Result<Vec<Document>, DatabaseError>;
    fn count_documents(&self) -> Result<usize, DatabaseError>;
    fn save_folder(&self, folder: &Folder) -> Result<(), DatabaseError>;
    fn find_folder(&self, id: &str) -> Result<Folder, DatabaseError>;
    fn list_folders(&self) -> Result<Vec<Folder>, DatabaseError>;
    /// Removes the folder and every document filed in it.
    /// Returns the number of documents removed.
    fn delete_folder(&self, id: &str) -> Result<usize, DatabaseError>;
}

pub trait AuditRepository {
    fn append_audit(&self, entry: &AuditLogEntry) -> Result<(), DatabaseError>;
    /// Oldest first
    fn audit_trail(&self, document_id: &str) -> Result<Vec<AuditLogEntry>, DatabaseError>;
}

pub trait EnvelopeRepository {
    fn save_envelope(&self, envelope: &Envelope) -> Result<(), DatabaseError>;
    fn find_envelope(&self, id: &str) -> Result<Envelope, DatabaseError>;
    /// Most recent envelope sent for a library document
    fn find_envelope_for_document(&self, document_id: &str) -> Result<Option<Envelope>, DatabaseError>;
}

pub trait SignedDocumentRepository {
    fn save_signed(&self, doc: &SignedDocument) -> Result<(), DatabaseError>;
    fn find_signed(&self, hash: &str) -> Result<SignedDocument, DatabaseError>;
    fn count_signed(&self) -> Result<usize, DatabaseError>;
}

/// JSON-valued key/value settings (profile fields, plan, language)
pub trait PreferenceStore {
    fn get_preference(&self, key: &str) -> Result<Option<serde_json::Value>, DatabaseError>;
    fn set_preference(&self, key: &str, value: &serde_json::Value) -> Result<(), DatabaseError>;
    /// `false` when the key was not set
    fn remove_preference(&self, key: &str) -> Result<bool, DatabaseError>;
}

/// Groups several writes so they commit or roll back together
pub trait Transactional {
    /// Runs `work` inside a transaction. Any error from `work` undoes every
    /// write it made. Calls nest.
    fn in_transaction(
        &self,
        work: &mut dyn FnMut() -> Result<(), DatabaseError>,
    ) -> Result<(), DatabaseError>;
}

/// Everything the use cases need from persistence
pub trait Store:
    LibraryRepository
    + AuditRepository
    + EnvelopeRepository
    + SignedDocumentRepository
    + PreferenceStore
    + Transactional
{
}

impl<T> Store for T where
    T: LibraryRepository
        + AuditRepository
        + EnvelopeRepository
        + SignedDocumentRepository
        + PreferenceStore
        + Transactional
{
}

pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub fn new(path: &str) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn new_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open the database at `path`, falling back to an in-memory one
    pub fn open_or_in_memory(path: &str) -> Result<Self, DatabaseError> {
        Self::new(path).or_else(|err| {
            tracing::warn!(path, error = %err, "falling back to in-memory database");
            Self::new_in_memory()
        })
    }

    pub fn schema_version(&self) -> Result<i64, DatabaseError> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?)
    }

    fn init_schema(conn: &Connection) -> Result<(), DatabaseError> {
        let found: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if found > SCHEMA_VERSION {
            return Err(DatabaseError::UnsupportedSchema {
                found,
                supported: SCHEMA_VERSION,
            });
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS folders (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                size TEXT NOT NULL,
                kind TEXT NOT NULL,
                folder_id TEXT,
                category TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_documents_folder ON documents(folder_id);
            CREATE INDEX IF NOT EXISTS idx_documents_created_at ON documents(created_at);

            CREATE TABLE IF NOT EXISTS audit_log (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                document_id TEXT NOT NULL,
                action TEXT NOT NULL,
                actor TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                details TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_audit_document ON audit_log(document_id);

            CREATE TABLE IF NOT EXISTS envelopes (
                id TEXT PRIMARY KEY,
                document_id TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                deadline TEXT,
                auto_reminder INTEGER NOT NULL,
                sender TEXT,
                recipients TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS signed_documents (
                id TEXT PRIMARY KEY,
                file_name TEXT NOT NULL,
                signed_at TEXT NOT NULL,
                signatories TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS id_clock (
                name TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            );",
        )?;

        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
        Ok(())
    }

    fn row_to_document(row: &rusqlite::Row) -> Result<(Document, String), rusqlite::Error> {
        Ok((
            Document {
                id: row.get(0)?,
                name: row.get(1)?,
                date: row.get(2)?,
                size: row.get(3)?,
                kind: DocumentKind::Doc,
                folder_id: row.get(5)?,
                category: row.get(6)?,
                created_at: row.get(7)?,
            },
            row.get(4)?,
        ))
    }

    fn finish_document((mut doc, kind): (Document, String)) -> Result<Document, DatabaseError> {
        doc.kind = DocumentKind::parse(&kind)
            .ok_or_else(|| DatabaseError::Corrupt(format!("unknown document kind {}", kind)))?;
        Ok(doc)
    }

    fn row_to_audit(row: &rusqlite::Row) -> Result<(AuditLogEntry, String), rusqlite::Error> {
        let action: String = row.get(2)?;
        Ok((
            AuditLogEntry {
                id: row.get(0)?,
                document_id: row.get(1)?,
                action: AuditAction::Created,
                actor: row.get(3)?,
                timestamp: row.get(4)?,
                details: row.get(5)?,
            },
            action,
        ))
    }
}

const DOCUMENT_COLUMNS: &str = "id, name, date, size, kind, folder_id, category, created_at";

impl LibraryRepository for SqliteRepository {
    fn next_id(&self) -> Result<String, DatabaseError> {
        let now = chrono::Utc::now().timestamp_millis();
        let last: Option<i64> = self
            .conn
            .query_row(
                "SELECT value FROM id_clock WHERE name = 'library'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let id = match last {
            Some(last) if last >= now => last + 1,
            _ => now,
        };

        self.conn.execute(
            "INSERT INTO id_clock (name, value) VALUES ('library', ?1)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            params![id],
        )?;

        Ok(id.to_string())
    }

    fn save_document(&self, doc: &Document) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO documents (id, name, date, size, kind, folder_id, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &doc.id,
                &doc.name,
                &doc.date,
                &doc.size,
                doc.kind.as_str(),
                &doc.folder_id,
                &doc.category,
                &doc.created_at
            ],
        )?;
        Ok(())
    }

    fn update_document(&self, doc: &Document) -> Result<(), DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE documents SET name = ?2, date = ?3, size = ?4, kind = ?5,
                    folder_id = ?6, category = ?7
             WHERE id = ?1",
            params![
                &doc.id,
                &doc.name,
                &doc.date,
                &doc.size,
                doc.kind.as_str(),
                &doc.folder_id,
                &doc.category
            ],
        )?;

        if changed == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }

    fn find_document(&self, id: &str) -> Result<Document, DatabaseError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM documents WHERE id = ?1", DOCUMENT_COLUMNS),
                params![id],
                Self::row_to_document,
            )
            .optional()?
            .ok_or(DatabaseError::NotFound)
            .and_then(Self::finish_document)
    }

    fn delete_document(&self, id: &str) -> Result<(), DatabaseError> {
        self.in_transaction(&mut || {
            let changed = self
                .conn
                .execute("DELETE FROM documents WHERE id = ?1", params![id])?;
            if changed == 0 {
                return Err(DatabaseError::NotFound);
            }
            self.conn
                .execute("DELETE FROM audit_log WHERE document_id = ?1", params![id])?;
            Ok(())
        })
    }

    fn list_documents(&self, folder_id: Option<&str>) -> Result<Vec<Document>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM documents
             WHERE ?1 IS NULL OR folder_id = ?1
             ORDER BY created_at DESC, rowid DESC",
            DOCUMENT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![folder_id], Self::row_to_document)?;

        rows.map(|row| Self::finish_document(row?)).collect()
    }

    fn count_documents(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    fn save_folder(&self, folder: &Folder) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO folders (id, name) VALUES (?1, ?2)",
            params![&folder.id, &folder.name],
        )?;
        Ok(())
    }

    fn find_folder(&self, id: &str) -> Result<Folder, DatabaseError> {
        self.conn
            .query_row(
                "SELECT id, name FROM folders WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Folder {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or(DatabaseError::NotFound)
    }

    fn list_folders(&self) -> Result<Vec<Folder>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM folders ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(Folder {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn delete_folder(&self, id: &str) -> Result<usize, DatabaseError> {
        let mut removed = 0;
        self.in_transaction(&mut || {
            let changed = self
                .conn
                .execute("DELETE FROM folders WHERE id = ?1", params![id])?;
            if changed == 0 {
                return Err(DatabaseError::NotFound);
            }
            self.conn.execute(
                "DELETE FROM audit_log WHERE document_id IN
                    (SELECT id FROM documents WHERE folder_id = ?1)",
                params![id],
            )?;
            removed = self
                .conn
                .execute("DELETE FROM documents WHERE folder_id = ?1", params![id])?;
            Ok(())
        })?;
        Ok(removed)
    }
}

impl AuditRepository for SqliteRepository {
    fn append_audit(&self, entry: &AuditLogEntry) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO audit_log (id, document_id, action, actor, timestamp, details)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &entry.id,
                &entry.document_id,
                entry.action.as_str(),
                &entry.actor,
                &entry.timestamp,
                &entry.details
            ],
        )?;
        Ok(())
    }

    fn audit_trail(&self, document_id: &str) -> Result<Vec<AuditLogEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, action, actor, timestamp, details
             FROM audit_log WHERE document_id = ?1 ORDER BY seq",
        )?;
        let rows = stmt.query_map(params![document_id], Self::row_to_audit)?;

        rows.map(|row| {
            let (mut entry, action) = row?;
            entry.action = AuditAction::parse(&action)
                .ok_or_else(|| DatabaseError::Corrupt(format!("unknown audit action {}", action)))?;
            Ok(entry)
        })
        .collect()
    }
}

impl EnvelopeRepository for SqliteRepository {
    fn save_envelope(&self, envelope: &Envelope) -> Result<(), DatabaseError> {
        let sender = envelope
            .sender
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let recipients = serde_json::to_string(&envelope.recipients)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO envelopes
                (id, document_id, subject, message, deadline, auto_reminder, sender, recipients, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                &envelope.id,
                &envelope.document_id,
                &envelope.subject,
                &envelope.message,
                &envelope.deadline,
                envelope.auto_reminder,
                sender,
                recipients,
                envelope.status.as_str(),
                envelope.created_at
            ],
        )?;
        Ok(())
    }

    fn find_envelope(&self, id: &str) -> Result<Envelope, DatabaseError> {
        self.query_envelope("id = ?1", id)?
            .ok_or(DatabaseError::NotFound)
    }

    fn find_envelope_for_document(&self, document_id: &str) -> Result<Option<Envelope>, DatabaseError> {
        self.query_envelope("document_id = ?1", document_id)
    }
}

impl SqliteRepository {
    /// Newest envelope matching `condition`, which binds a single text parameter
    fn query_envelope(&self, condition: &str, value: &str) -> Result<Option<Envelope>, DatabaseError> {
        type Row = (
            String,
            String,
            String,
            String,
            Option<String>,
            bool,
            Option<String>,
            String,
            String,
            i64,
        );

        let row: Option<Row> = self
            .conn
            .query_row(
                &format!(
                    "SELECT id, document_id, subject, message, deadline, auto_reminder,
                            sender, recipients, status, created_at
                     FROM envelopes WHERE {}
                     ORDER BY created_at DESC, rowid DESC LIMIT 1",
                    condition
                ),
                params![value],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                        row.get(7)?,
                        row.get(8)?,
                        row.get(9)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, document_id, subject, message, deadline, auto_reminder, sender, recipients, status, created_at)) =
            row
        else {
            return Ok(None);
        };

        Ok(Some(Envelope {
            id,
            document_id,
            subject,
            message,
            deadline,
            auto_reminder,
            sender: sender.map(|s| serde_json::from_str(&s)).transpose()?,
            recipients: serde_json::from_str(&recipients)?,
            status: EnvelopeStatus::parse(&status)
                .ok_or_else(|| DatabaseError::Corrupt(format!("unknown envelope status {}", status)))?,
            created_at,
        }))
    }
}

impl SignedDocumentRepository for SqliteRepository {
    fn save_signed(&self, doc: &SignedDocument) -> Result<(), DatabaseError> {
        let signatories = serde_json::to_string(&doc.signatories)?;

        match self.conn.execute(
            "INSERT INTO signed_documents (id, file_name, signed_at, signatories, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![&doc.id, &doc.file_name, &doc.signed_at, signatories, &doc.created_at],
        ) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(DatabaseError::DuplicateHash)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_signed(&self, hash: &str) -> Result<SignedDocument, DatabaseError> {
        let row: Option<(String, String, String, String, i64)> = self
            .conn
            .query_row(
                "SELECT id, file_name, signed_at, signatories, created_at
                 FROM signed_documents WHERE id = ?1",
                params![hash],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
            )
            .optional()?;

        let (id, file_name, signed_at, signatories, created_at) =
            row.ok_or(DatabaseError::NotFound)?;

        Ok(SignedDocument {
            id,
            file_name,
            signed_at,
            signatories: serde_json::from_str(&signatories)?,
            created_at,
        })
    }

    fn count_signed(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM signed_documents", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}

impl PreferenceStore for SqliteRepository {
    fn get_preference(&self, key: &str) -> Result<Option<serde_json::Value>, DatabaseError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.map(|s| serde_json::from_str(&s)).transpose()?)
    }

    fn set_preference(&self, key: &str, value: &serde_json::Value) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, serde_json::to_string(value)?],
        )?;
        Ok(())
    }

    fn remove_preference(&self, key: &str) -> Result<bool, DatabaseError> {
        let removed = self
            .conn
            .execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

impl Transactional for SqliteRepository {
    fn in_transaction(
        &self,
        work: &mut dyn FnMut() -> Result<(), DatabaseError>,
    ) -> Result<(), DatabaseError> {
        // savepoints instead of BEGIN so that calls nest
        self.conn.execute_batch("SAVEPOINT unit_of_work")?;
        match work() {
            Ok(()) => {
                self.conn.execute_batch("RELEASE unit_of_work")?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback) = self
                    .conn
                    .execute_batch("ROLLBACK TO unit_of_work; RELEASE unit_of_work")
                {
                    tracing::error!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }
}
