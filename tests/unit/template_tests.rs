use chrono::NaiveDate;
use signdesk::templates::{self, FieldValues, RenderContext, ITEMS_PER_PAGE};

fn ctx(reference: &str) -> RenderContext {
    RenderContext::new(
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        reference,
        "https://assinador.example",
    )
}

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_render_is_deterministic() {
    let form = values(&[("contratante", "Ana"), ("valor", "1.500,00")]);
    let reference = templates::generate_reference();

    for template in templates::catalog() {
        let first = template.render(&form, &ctx(&reference));
        let second = template.render(&form, &ctx(&reference));
        assert_eq!(first, second, "{} rendered differently", template.id);
    }
}

#[test]
fn test_every_template_has_header_and_footer() {
    for template in templates::catalog() {
        let html = template.render(&FieldValues::new(), &ctx("REF000000000000000000000000000000"));
        assert!(html.contains("19/10/2026"), "{} lacks date", template.id);
        assert!(html.contains("REF000000"), "{} lacks reference", template.id);
        assert!(html.contains("https://assinador.example/validar"), "{}", template.id);
    }
}

#[test]
fn test_values_are_escaped() {
    let form = values(&[("contratante", "<script>alert('x')</script> & Cia")]);
    let html = templates::find("servicos").unwrap().render(&form, &ctx("R"));

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&amp; Cia"));
}

#[test]
fn test_blank_values_use_placeholders() {
    let form = values(&[("contratante", "   ")]);
    let html = templates::find("servicos").unwrap().render(&form, &ctx("R"));
    assert!(html.contains("<strong>CONTRATANTE:</strong> ____________________"));
}

#[test]
fn test_filled_names_replace_role_on_signature_line() {
    let form = values(&[("contratante", "Ana Souza")]);
    let html = templates::find("servicos").unwrap().render(&form, &ctx("R"));
    assert!(html.contains("<strong>Ana Souza</strong>"));
    assert!(html.contains("<strong>CONTRATADA</strong>"));
}

#[test]
fn test_service_contract_anchors() {
    let anchors = templates::find("servicos").unwrap().signature_anchors();
    assert_eq!(
        anchors,
        vec![
            "{{SIGNATURE_CONTRATANTE}}",
            "{{SIGNATURE_CONTRATADA}}",
            "{{SIGNATURE_TESTEMUNHA_1}}",
            "{{SIGNATURE_TESTEMUNHA_2}}",
        ]
    );
}

#[test]
fn test_every_template_has_an_anchor() {
    for template in templates::catalog() {
        assert!(
            !template.signature_anchors().is_empty(),
            "{} has no signature anchor",
            template.id
        );
    }
}

#[test]
fn test_word_export() {
    let template = templates::find("nda").unwrap();
    let file = template.word_export(&FieldValues::new(), &ctx("R"));

    assert_eq!(file.mime_type, "application/msword");
    assert!(file.file_name.ends_with(".doc"));
    assert!(!file.file_name.contains(' '));
    assert!(file.content.contains("urn:schemas-microsoft-com:office:word"));
}

#[test]
fn test_send_file_is_html() {
    let template = templates::find("imagem").unwrap();
    let file = template.send_file(&FieldValues::new(), &ctx("R"));

    assert_eq!(file.mime_type, "text/html");
    assert!(file.file_name.ends_with(".html"));
    assert!(file.content.contains("<html"));
}

#[test]
fn test_catalog_pages() {
    let first = templates::page(1).unwrap();
    assert_eq!(first.templates.len(), ITEMS_PER_PAGE);
    assert_eq!(first.total_pages, 2);

    let second = templates::page(2).unwrap();
    assert_eq!(second.templates[0].id, "imagem");
    assert!(templates::page(3).is_none());

    let json = serde_json::to_value(&second).unwrap();
    assert_eq!(json["totalPages"], 2);
    assert!(json["templates"][0]["fields"][0]["type"].is_string());
}

#[test]
fn test_unknown_template() {
    assert!(templates::find("inexistente").is_none());
}

#[test]
fn test_references_differ() {
    assert_ne!(templates::generate_reference(), templates::generate_reference());
}
