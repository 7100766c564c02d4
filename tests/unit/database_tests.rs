use signdesk::domain::{
    AuditAction, AuditLogEntry, Document, Envelope, EnvelopeStatus, Folder, Recipient, Signatory,
    SignedDocument,
};
use signdesk::infrastructure::database::{
    AuditRepository, DatabaseError, EnvelopeRepository, LibraryRepository, PreferenceStore,
    SignedDocumentRepository, SqliteRepository,
};

fn upload(repo: &SqliteRepository, name: &str, folder: Option<&str>) -> Document {
    let doc = Document::upload(
        repo.next_id().unwrap(),
        name,
        1024,
        folder.map(str::to_string),
    );
    repo.save_document(&doc).expect("Failed to save document");
    doc
}

#[test]
fn test_init_database_sets_schema_version() {
    let repo = SqliteRepository::new_in_memory().expect("Failed to create repository");
    assert_eq!(repo.schema_version().unwrap(), 1);
    assert_eq!(repo.count_documents().unwrap(), 0);
}

#[test]
fn test_save_document_persists() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let doc = upload(&repo, "contrato.pdf", None);

    let found = repo.find_document(&doc.id).expect("Failed to find document");
    assert_eq!(found, doc);
}

#[test]
fn test_find_document_not_found() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let result = repo.find_document("123");
    assert!(matches!(result, Err(DatabaseError::NotFound)));
}

#[test]
fn test_next_id_is_strictly_increasing() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let ids: Vec<i64> = (0..20)
        .map(|_| repo.next_id().unwrap().parse().unwrap())
        .collect();

    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "{} should be greater than {}", pair[1], pair[0]);
    }
}

#[test]
fn test_delete_folder_removes_its_documents() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let folder = Folder::new(repo.next_id().unwrap(), "Clientes");
    repo.save_folder(&folder).unwrap();

    upload(&repo, "a.pdf", Some(&folder.id));
    upload(&repo, "b.pdf", Some(&folder.id));
    let outside = upload(&repo, "c.pdf", None);

    let removed = repo.delete_folder(&folder.id).unwrap();

    assert_eq!(removed, 2);
    let remaining = repo.list_documents(None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, outside.id);
    assert!(repo.list_folders().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_folder() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    assert!(matches!(repo.delete_folder("nope"), Err(DatabaseError::NotFound)));
}

#[test]
fn test_list_documents_by_folder() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let folder = Folder::new(repo.next_id().unwrap(), "RH");
    repo.save_folder(&folder).unwrap();

    upload(&repo, "ferias.pdf", Some(&folder.id));
    upload(&repo, "solto.pdf", None);

    let in_folder = repo.list_documents(Some(&folder.id)).unwrap();
    assert_eq!(in_folder.len(), 1);
    assert_eq!(in_folder[0].name, "ferias.pdf");
    assert_eq!(repo.list_documents(None).unwrap().len(), 2);
}

#[test]
fn test_audit_trail_is_ordered() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let doc = upload(&repo, "nda.pdf", None);

    repo.append_audit(&AuditLogEntry::new(&doc.id, AuditAction::Created, "Você", None))
        .unwrap();
    repo.append_audit(&AuditLogEntry::new(&doc.id, AuditAction::Viewed, "Maria", None))
        .unwrap();

    let trail = repo.audit_trail(&doc.id).unwrap();
    let actions: Vec<AuditAction> = trail.iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![AuditAction::Created, AuditAction::Viewed]);
    assert_eq!(trail[1].actor, "Maria");
}

#[test]
fn test_envelope_round_trip() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let doc = upload(&repo, "proposta.pdf", None);

    let envelope = Envelope {
        id: "env-1".to_string(),
        document_id: doc.id.clone(),
        subject: "Proposta".to_string(),
        message: String::new(),
        deadline: Some("2026-12-01".to_string()),
        auto_reminder: true,
        sender: None,
        recipients: vec![Recipient::new("Ana", "ana@example.com", "contratante")],
        status: EnvelopeStatus::Sent,
        created_at: 1,
    };
    repo.save_envelope(&envelope).unwrap();

    let found = repo.find_envelope("env-1").unwrap();
    assert_eq!(found, envelope);
    assert_eq!(found.recipients[0].role, "CONTRATANTE");
}

#[test]
fn test_signed_duplicate_hash_rejected() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let first = SignedDocument::new(b"same content", "a.pdf", vec![]);
    let second = SignedDocument::new(b"same content", "b.pdf", vec![]);

    repo.save_signed(&first).unwrap();
    let result = repo.save_signed(&second);

    assert!(matches!(result, Err(DatabaseError::DuplicateHash)));
    assert_eq!(repo.count_signed().unwrap(), 1);
}

#[test]
fn test_signed_keeps_signatories() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    let doc = SignedDocument::new(
        b"signed bytes",
        "assinado.pdf",
        vec![Signatory::new("Ana", "ana@example.com", "Parte Contratante")],
    );
    repo.save_signed(&doc).unwrap();

    let found = repo.find_signed(&doc.id).unwrap();
    assert_eq!(found.signatories, doc.signatories);
}

#[test]
fn test_preferences_round_trip() {
    let repo = SqliteRepository::new_in_memory().unwrap();
    assert!(repo.get_preference("language").unwrap().is_none());

    repo.set_preference("language", &serde_json::json!("en")).unwrap();
    repo.set_preference("language", &serde_json::json!("es")).unwrap();

    assert_eq!(
        repo.get_preference("language").unwrap(),
        Some(serde_json::json!("es"))
    );
}

#[test]
fn test_on_disk_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signdesk.db");
    let path = path.to_str().unwrap();

    let id = {
        let repo = SqliteRepository::new(path).unwrap();
        upload(&repo, "persistido.pdf", None).id
    };

    let reopened = SqliteRepository::new(path).unwrap();
    assert_eq!(reopened.find_document(&id).unwrap().name, "persistido.pdf");
    assert_eq!(reopened.schema_version().unwrap(), 1);

    // ids keep increasing across restarts
    let next: i64 = reopened.next_id().unwrap().parse().unwrap();
    assert!(next > id.parse::<i64>().unwrap());
}
