use hyper::StatusCode;
use serde_json::json;

use super::helpers::{decode, encode, TestServer};

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_action_is_rejected() {
    let server = TestServer::start().await;

    let (status, body) = server.raw_action("not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid input format"));

    let (status, _) = server.action(json!({"action": "launch_rockets"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_library_workflow() {
    let server = TestServer::start().await;

    let (status, folder) = server
        .action(json!({"action": "create_folder", "data": {"name": "Clientes"}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(folder["type"], "folder");
    let folder_id = folder["data"]["id"].as_str().unwrap().to_string();

    for name in ["a.pdf", "b.pdf"] {
        let (status, _) = server
            .action(json!({
                "action": "upload_document",
                "data": {"file_name": name, "size_bytes": 1024, "folder_id": folder_id}
            }))
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, outside) = server
        .action(json!({"action": "upload_document", "data": {"file_name": "c.pdf", "size_bytes": 10}}))
        .await;
    let outside_id = outside["data"]["id"].as_str().unwrap().to_string();

    let (_, listed) = server
        .action(json!({"action": "list_documents", "data": {"folderId": folder_id}}))
        .await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);

    let (status, deleted) = server
        .action(json!({"action": "delete_folder", "data": {"id": folder_id}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"]["removedDocuments"], 2);

    let (_, remaining) = server.action(json!({"action": "list_documents"})).await;
    let remaining = remaining["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], outside_id.as_str());
}

#[tokio::test]
async fn test_missing_document_is_404() {
    let server = TestServer::start().await;
    let (status, body) = server
        .action(json!({"action": "rename_document", "data": {"id": "1", "name": "x.pdf"}}))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Document not found"));
}

#[tokio::test]
async fn test_audit_trail_is_labelled() {
    let server = TestServer::start().await;
    let (_, doc) = server
        .action(json!({"action": "upload_document", "data": {"file_name": "nda.pdf", "size_bytes": 1}}))
        .await;
    let id = doc["data"]["id"].as_str().unwrap();

    server
        .action(json!({"action": "view_document", "data": {"id": id, "actor": "Maria"}}))
        .await;
    let (status, trail) = server
        .action(json!({"action": "audit_trail", "data": {"id": id}}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let entries = trail["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["entry"]["action"], "created");
    assert_eq!(entries[1]["entry"]["actor"], "Maria");
    assert!(entries[1]["label"].is_string());
}

#[tokio::test]
async fn test_formatting_actions() {
    let server = TestServer::start().await;

    let (_, phone) = server
        .action(json!({"action": "format_phone", "data": {"country": "Estados Unidos", "input": "2125550123999"}}))
        .await;
    assert_eq!(phone["data"]["value"], "(212) 555-0123");
    assert_eq!(phone["data"]["language"], "en");

    let (_, tax_id) = server
        .action(json!({"action": "format_tax_id", "data": {"input": "12345678000195"}}))
        .await;
    assert_eq!(tax_id["data"]["value"], "12.345.678/0001-95");
    assert_eq!(tax_id["data"]["kind"], "cnpj");
}

#[tokio::test]
async fn test_template_catalog_and_render() {
    let server = TestServer::start().await;

    let (_, page) = server
        .action(json!({"action": "list_templates", "data": {"page": 2}}))
        .await;
    assert_eq!(page["data"]["totalPages"], 2);
    assert_eq!(page["data"]["templates"][0]["id"], "imagem");

    let (status, _) = server
        .action(json!({"action": "list_templates", "data": {"page": 9}}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let render = json!({
        "action": "render_template",
        "data": {
            "template_id": "nda",
            "values": {"parte_reveladora": "Acme"},
            "date": "2026-10-19",
            "reference": "ABCDEFGHIJKLMNOPQRSTUVWXYZ012345"
        }
    });
    let (_, first) = server.action(render.clone()).await;
    let (_, second) = server.action(render).await;

    let html = first["data"]["html"].as_str().unwrap();
    assert_eq!(first, second);
    assert!(html.contains("19/10/2026"));
    assert!(html.contains("Acme"));
    assert!(html.contains("https://assinador.example/validar"));

    let (_, word) = server
        .action(json!({"action": "render_template", "data": {"template_id": "nda", "format": "word"}}))
        .await;
    assert_eq!(word["data"]["file"]["mimeType"], "application/msword");
    assert_eq!(word["data"]["reference"].as_str().unwrap().len(), 32);

    let (status, _) = server
        .action(json!({"action": "render_template", "data": {"template_id": "nope"}}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_prepare_signing_multipart() {
    let server = TestServer::start().await;
    let (status, body) = server
        .action(json!({
            "action": "prepare_signing",
            "data": {
                "file_name": "contrato.pdf",
                "content": encode(b"%PDF-1.4 test"),
                "boundary": "BOUNDARY",
                "parties": [
                    {"role": "CONTRATANTE", "name": "Ana",
                     "signature": {"mode": "drawn", "strokes": [[{"x": 5.0, "y": 5.0}, {"x": 120.0, "y": 80.0}]]}},
                    {"role": "CONTRATADA", "name": "Bruno",
                     "signature": {"mode": "typed", "text": "Bruno"}}
                ]
            }
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["contentType"], "multipart/form-data; boundary=BOUNDARY");
    // typed signatures fall back to the bundled font
    assert_eq!(
        body["data"]["signedFields"],
        json!(["img_contratante", "img_contratada"])
    );

    let multipart = String::from_utf8_lossy(&decode(body["data"]["body"].as_str().unwrap())).into_owned();
    assert!(multipart.contains("%PDF-1.4 test"));
    assert!(multipart.contains("name=\"nome_contratada\""));
}

#[tokio::test]
async fn test_invalid_base64_is_bad_request() {
    let server = TestServer::start().await;
    let (status, _) = server
        .action(json!({
            "action": "record_signature",
            "data": {"content": "***", "file_name": "a.pdf"}
        }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_envelope() {
    let server = TestServer::start().await;
    let (status, body) = server
        .action(json!({
            "action": "send_envelope",
            "data": {
                "file_name": "proposta.pdf",
                "content": encode(&vec![0u8; 2 * 1024 * 1024]),
                "subject": "Proposta",
                "recipients": [{"name": "Ana", "email": "ana@example.com"}]
            }
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["document"]["size"], "2.0 MB");
    assert_eq!(body["data"]["document"]["category"], "Enviado");
    assert_eq!(body["data"]["envelope"]["recipients"][0]["role"], "CONTRATADA");
    assert_eq!(body["data"]["message"], "E-mail foi enviado com sucesso!");

    let envelope_id = body["data"]["envelope"]["id"].as_str().unwrap().to_string();
    let (status, details) = server
        .action(json!({"action": "get_envelope", "data": {"id": envelope_id}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["type"], "envelope_details");
    assert_eq!(details["data"]["status"], "sent");
    assert_eq!(details["data"]["recipients"][0]["status"], "pending");

    let (status, body) = server
        .action(json!({
            "action": "send_envelope",
            "data": {"file_name": "p.pdf", "content": encode(b"x"), "subject": "", "recipients": []}
        }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_record_and_validate_signed_document() {
    let server = TestServer::start().await;
    let (status, receipt) = server
        .action(json!({
            "action": "record_signature",
            "data": {
                "content": encode(b"%PDF signed content"),
                "file_name": "contrato_assinado.pdf",
                "signatories": [{"name": "Ana", "email": "ana@example.com", "tipo": "Parte Contratante"}]
            }
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let hash = receipt["data"]["document_id"].as_str().unwrap().to_string();
    assert_eq!(
        receipt["data"]["validation_url"],
        format!("https://assinador.example/validar/{}", hash)
    );

    let (status, record) = server.get(&format!("/validar/dados/{}", hash.to_uppercase())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["hash"], hash.as_str());
    assert_eq!(record["arquivo"], "contrato_assinado.pdf");
    assert_eq!(record["signatarios"][0]["tipo"], "Parte Contratante");

    let (_, validation) = server
        .action(json!({"action": "validate", "data": {"content_hash": format!(" {} ", hash)}}))
        .await;
    assert_eq!(validation["data"]["exists"], true);

    let (status, missing) = server.get(&format!("/validar/dados/{}", "0".repeat(64))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(missing["error"].is_string());

    let (status, _) = server.get("/validar/dados/not-a-hash").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server
        .action(json!({
            "action": "record_signature",
            "data": {"content": encode(b"%PDF signed content"), "file_name": "copia.pdf"}
        }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_registration_and_payment() {
    let server = TestServer::start().await;

    let (status, sub) = server
        .action(json!({
            "action": "register",
            "data": {
                "name": "Ana Souza",
                "email": "ana@example.com",
                "password": "segredo",
                "passwordConfirmation": "segredo",
                "plan": "profissional"
            }
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sub["data"]["status"], "trial");

    let (status, charge) = server
        .action(json!({
            "action": "create_pix_charge",
            "data": {"plan": "profissional", "cycle": "annual", "name": "Ana Souza", "tax_id": "12345678901"}
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(charge["data"]["amountCents"], 21492);
    let qr = decode(charge["data"]["qrCodeBase64"].as_str().unwrap());
    assert!(qr.starts_with(b"\x89PNG"));
    let txid = charge["data"]["txid"].as_str().unwrap().to_string();

    let (status, confirmed) = server
        .action(json!({"action": "confirm_payment", "data": {"txid": txid}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["data"]["subscription"]["status"], "ativo");
    assert_eq!(confirmed["data"]["contract"]["mimeType"], "text/plain");

    let (_, current) = server.action(json!({"action": "subscription"})).await;
    assert_eq!(current["data"]["status"], "ativo");

    let (status, _) = server
        .action(json!({"action": "confirm_payment", "data": {"txid": txid}}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server
        .action(json!({"action": "confirm_payment", "data": {"txid": "unknown"}}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_language_switch() {
    let server = TestServer::start().await;

    let (status, lang) = server
        .action(json!({"action": "set_language", "data": {"language": "es"}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lang["data"]["language"], "es");

    let (_, translated) = server
        .action(json!({"action": "translate", "data": {"keys": ["send.success", "missing.key"]}}))
        .await;
    assert_eq!(translated["data"]["translations"]["send.success"], "¡Correo enviado con éxito!");
    assert_eq!(translated["data"]["translations"]["missing.key"], "missing.key");
}

#[tokio::test]
async fn test_seed_demo() {
    let server = TestServer::start().await;

    let (_, first) = server.action(json!({"action": "seed_demo"})).await;
    assert_eq!(first["data"]["seeded"], true);
    let (_, second) = server.action(json!({"action": "seed_demo"})).await;
    assert_eq!(second["data"]["seeded"], false);

    let (_, folders) = server.action(json!({"action": "list_folders"})).await;
    assert_eq!(folders["data"].as_array().unwrap().len(), 3);
}
