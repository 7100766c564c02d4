use signdesk::signature::{
    render_text, FontLibrary, Point, PartySignature, Signature, SignatureFont, SigningRequest,
    StrokePad, TypedSignature, CANVAS_HEIGHT, CANVAS_WIDTH,
};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[test]
fn test_blank_typed_signature_has_no_image() {
    let fonts = FontLibrary::new("/nonexistent");
    assert!(TypedSignature::new("   ", SignatureFont::Padrao)
        .rasterize(&fonts)
        .is_none());
}

#[test]
fn test_corrupt_font_has_no_image() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("serif.ttf"), b"not a font").unwrap();
    let fonts = FontLibrary::new(dir.path());
    assert!(TypedSignature::new("Ana", SignatureFont::Serif)
        .rasterize(&fonts)
        .is_none());
}

#[test]
fn test_every_face_renders_without_font_files() {
    let dir = tempfile::tempdir().unwrap();
    let fonts = FontLibrary::new(dir.path());

    for face in SignatureFont::ALL {
        let image = TypedSignature::new("Ana Souza", face)
            .rasterize(&fonts)
            .expect("should render");

        assert!(image.png.starts_with(PNG_MAGIC));
        assert_eq!((image.width, image.height), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}

#[test]
fn test_typed_signature_is_centered_ink() {
    let font = FontLibrary::new("/nonexistent")
        .load(SignatureFont::Padrao)
        .expect("bundled font");
    let canvas = render_text(&font, "Ana Souza").unwrap();

    let inked: Vec<u32> = canvas
        .enumerate_pixels()
        .filter(|(_, _, p)| p[3] > 0)
        .map(|(x, _, _)| x)
        .collect();
    assert!(!inked.is_empty());

    let left = *inked.iter().min().unwrap();
    let right = CANVAS_WIDTH - 1 - *inked.iter().max().unwrap();
    assert!(left.abs_diff(right) <= 4, "left margin {} vs right margin {}", left, right);
}

#[test]
fn test_empty_pad_has_no_image() {
    let mut pad = StrokePad::new();
    assert!(pad.rasterize().is_none());

    pad.begin_stroke(Point::new(10.0, 10.0));
    pad.end_stroke();
    pad.clear();
    assert!(pad.is_empty());
    assert!(pad.rasterize().is_none());
}

#[test]
fn test_drawn_signature_renders_png() {
    let mut pad = StrokePad::new();
    pad.begin_stroke(Point::new(20.0, 75.0));
    pad.line_to(Point::new(300.0, 40.0));
    pad.line_to(Point::new(580.0, 110.0));
    pad.end_stroke();

    let image = pad.rasterize().expect("should render");
    assert!(image.png.starts_with(PNG_MAGIC));
    assert_eq!(image.width, CANVAS_WIDTH);
}

#[test]
fn test_signature_modes_deserialize() {
    let drawn: Signature =
        serde_json::from_str(r#"{"mode":"drawn","strokes":[[{"x":1.0,"y":2.0},{"x":50.0,"y":60.0}]]}"#)
            .unwrap();
    let fonts = FontLibrary::new("/nonexistent");
    assert!(drawn.rasterize(&fonts).is_some());

    let typed: Signature = serde_json::from_str(r#"{"mode":"typed","text":""}"#).unwrap();
    assert!(typed.rasterize(&fonts).is_none());
}

#[test]
fn test_multipart_includes_only_signed_images() {
    let pad = StrokePad::from_strokes(vec![vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]]);
    let request = SigningRequest::new("contrato.pdf", "application/pdf", b"%PDF-1.4".to_vec(), SignatureFont::Serif)
        .with_party(PartySignature::new("contratante", "Ana", pad.rasterize()))
        .with_party(PartySignature::new("contratada", "Bruno", None));

    let body = String::from_utf8_lossy(&request.encode_multipart("XyZ")).into_owned();

    assert!(body.contains("name=\"arquivo\"; filename=\"contrato.pdf\""));
    assert!(body.contains("name=\"nome_contratante\"\r\n\r\nAna\r\n"));
    assert!(body.contains("name=\"nome_contratada\"\r\n\r\nBruno\r\n"));
    assert!(body.contains("name=\"fonte\"\r\n\r\nserif\r\n"));
    assert!(body.contains("name=\"img_contratante\"; filename=\"img_contratante.png\""));
    assert!(!body.contains("img_contratada"));
    assert!(body.ends_with("--XyZ--\r\n"));
    assert_eq!(
        SigningRequest::multipart_content_type("XyZ"),
        "multipart/form-data; boundary=XyZ"
    );
}
