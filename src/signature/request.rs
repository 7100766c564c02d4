use super::{SignatureFont, SignatureImage};

/// One party on a signing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySignature {
    pub role: String,
    pub name: String,
    pub image: Option<SignatureImage>,
}

impl PartySignature {
    pub fn new(role: &str, name: &str, image: Option<SignatureImage>) -> Self {
        Self {
            role: role.trim().to_string(),
            name: name.trim().to_string(),
            image,
        }
    }

    /// A party without an image has not signed
    pub fn has_signed(&self) -> bool {
        self.image.is_some()
    }

    /// `img_contratante`, `img_contratada`, ...
    pub fn image_field(&self) -> String {
        format!("img_{}", field_suffix(&self.role))
    }

    pub fn name_field(&self) -> String {
        format!("nome_{}", field_suffix(&self.role))
    }
}

fn field_suffix(role: &str) -> String {
    role.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FormPart {
    fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            content_type: None,
            body: value.as_bytes().to_vec(),
        }
    }

    fn file(name: &str, file_name: &str, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            content_type: Some(content_type.to_string()),
            body,
        }
    }
}

/// The multipart upload sent to the PDF signing endpoint: the original file,
/// party names, the chosen face and one image per party that signed.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub font: SignatureFont,
    pub parties: Vec<PartySignature>,
}

impl SigningRequest {
    pub fn new(file_name: &str, content_type: &str, content: Vec<u8>, font: SignatureFont) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            content,
            font,
            parties: Vec::new(),
        }
    }

    pub fn with_party(mut self, party: PartySignature) -> Self {
        self.parties.push(party);
        self
    }

    pub fn signed_parties(&self) -> impl Iterator<Item = &PartySignature> {
        self.parties.iter().filter(|p| p.has_signed())
    }

    pub fn parts(&self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::file(
            "arquivo",
            &self.file_name,
            &self.content_type,
            self.content.clone(),
        )];

        for party in &self.parties {
            parts.push(FormPart::text(&party.name_field(), &party.name));
        }
        parts.push(FormPart::text("fonte", self.font.as_str()));

        for party in self.signed_parties() {
            if let Some(image) = &party.image {
                let field = party.image_field();
                parts.push(FormPart::file(
                    &field,
                    &format!("{}.png", field),
                    "image/png",
                    image.png.clone(),
                ));
            }
        }

        parts
    }

    pub fn multipart_content_type(boundary: &str) -> String {
        format!("multipart/form-data; boundary={}", boundary)
    }

    /// Encode as `multipart/form-data` using `boundary`
    pub fn encode_multipart(&self, boundary: &str) -> Vec<u8> {
        let mut body = Vec::new();

        for part in self.parts() {
            body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            let disposition = match &part.file_name {
                Some(file_name) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.name,
                    file_name.replace('"', "%22")
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
            };
            body.extend_from_slice(disposition.as_bytes());
            if let Some(content_type) = &part.content_type {
                body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(&part.body);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
        body
    }
}
