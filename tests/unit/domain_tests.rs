use signdesk::domain::{
    content_hash, AuditAction, Document, DocumentKind, Envelope, EnvelopeStatus, Folder,
    Recipient, SignatureReceipt, SignatureStatus, Signatory, SignedDocument,
};

#[test]
fn test_document_kind_from_extension() {
    assert_eq!(DocumentKind::from_file_name("Contrato.PDF"), DocumentKind::Pdf);
    assert_eq!(DocumentKind::from_file_name("foto.jpeg"), DocumentKind::Image);
    assert_eq!(DocumentKind::from_file_name("proposta.docx"), DocumentKind::Doc);
    assert_eq!(DocumentKind::from_file_name("sem_extensao"), DocumentKind::Doc);
}

#[test]
fn test_upload_fills_display_fields() {
    let doc = Document::upload("42".into(), "nda.pdf", 2048, Some("7".into()));

    assert_eq!(doc.size, "2 KB");
    assert_eq!(doc.kind, DocumentKind::Pdf);
    assert_eq!(doc.category, "Rascunho");
    assert_eq!(doc.date.len(), 10);
    assert_eq!(doc.folder_id.as_deref(), Some("7"));
}

#[test]
fn test_document_search_is_case_insensitive() {
    let doc = Document::upload("1".into(), "Contrato de Locação.pdf", 10, None);
    assert!(doc.matches("contrato"));
    assert!(doc.matches("  LOCAÇÃO "));
    assert!(doc.matches(""));
    assert!(!doc.matches("nda"));
}

#[test]
fn test_folder_summary_lists_only_its_documents() {
    let folder = Folder::new("9".into(), "  Clientes ");
    let docs = vec![
        Document::upload("1".into(), "a.pdf", 1024, Some("9".into())),
        Document::upload("2".into(), "b.pdf", 1024, None),
    ];

    let summary = folder.summary(&docs);
    assert!(summary.starts_with("Resumo da Pasta: Clientes"));
    assert!(summary.contains("- a.pdf (1 KB)"));
    assert!(!summary.contains("b.pdf"));
    assert_eq!(folder.summary_file_name(), "Clientes_resumo.txt");
}

#[test]
fn test_content_hash_is_sha256_hex() {
    assert_eq!(
        content_hash(b"hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_signed_document_id_is_content_hash() {
    let doc = SignedDocument::new(b"pdf bytes", "a.pdf", vec![]);
    assert_eq!(doc.id, content_hash(b"pdf bytes"));
    assert_eq!(doc.id.len(), 64);
}

#[test]
fn test_signatory_role_labels() {
    assert_eq!(Signatory::label_for_role("contratante"), "Parte Contratante");
    assert_eq!(Signatory::label_for_role("CONTRATADA"), "Parte Contratada");
    assert_eq!(Signatory::label_for_role("testemunha"), "Testemunha");
    assert_eq!(Signatory::label_for_role("FIADOR"), "FIADOR");
}

#[test]
fn test_signatory_serializes_role_as_tipo() {
    let json = serde_json::to_value(Signatory::new("Ana", "ana@x.com", "Testemunha")).unwrap();
    assert_eq!(json["tipo"], "Testemunha");
    assert_eq!(json["name"], "Ana");
}

#[test]
fn test_receipt_links_to_validation_page() {
    let receipt = SignatureReceipt::new("abc".into(), "01/01/2026".into(), 5, "https://app.example/");
    assert_eq!(receipt.validation_url, "https://app.example/validar/abc");
    assert_eq!(receipt.proof, "sha256:abc@5");
}

#[test]
fn test_envelope_fully_signed_includes_sender() {
    let mut sender = Recipient::new("Eu", "eu@x.com", "contratante");
    let mut other = Recipient::new("Ana", "ana@x.com", "contratada");
    other.status = SignatureStatus::Signed;

    let mut envelope = Envelope {
        id: "e".into(),
        document_id: "d".into(),
        subject: "s".into(),
        message: String::new(),
        deadline: None,
        auto_reminder: false,
        sender: Some(sender.clone()),
        recipients: vec![other],
        status: EnvelopeStatus::Sent,
        created_at: 0,
    };
    assert_eq!(envelope.signatories().count(), 2);
    assert!(!envelope.is_fully_signed());

    sender.status = SignatureStatus::Signed;
    envelope.sender = Some(sender);
    assert!(envelope.is_fully_signed());
}

#[test]
fn test_mark_signed_completes_envelope() {
    let mut envelope = Envelope {
        id: "e".into(),
        document_id: "d".into(),
        subject: "s".into(),
        message: String::new(),
        deadline: None,
        auto_reminder: false,
        sender: Some(Recipient::new("Eu", "eu@x.com", "contratante")),
        recipients: vec![Recipient::new("Ana", "ana@x.com", "contratada")],
        status: EnvelopeStatus::Sent,
        created_at: 0,
    };

    assert_eq!(envelope.mark_signed("outra@x.com"), 0);
    assert_eq!(envelope.mark_signed(" ANA@x.com "), 1);
    assert_eq!(envelope.mark_signed("ana@x.com"), 0);
    assert_eq!(envelope.status, EnvelopeStatus::Sent);

    assert_eq!(envelope.mark_signed("eu@x.com"), 1);
    assert_eq!(envelope.status, EnvelopeStatus::Completed);
}

#[test]
fn test_audit_action_labels() {
    assert_eq!(AuditAction::parse("moved"), Some(AuditAction::Moved));
    assert_eq!(AuditAction::parse("deleted"), None);
    assert_eq!(AuditAction::Signed.label_key(), "log.signed");
}
