//! Static contract catalog.
//!
//! Each template turns a map of field values into contract HTML wrapped in the
//! shared header/footer. Rendering is pure: the date and document reference are
//! part of [`RenderContext`], so identical inputs always give identical output.

mod catalog;
pub mod layout;

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use catalog::CATALOG;
use layout::{escape_html, send_document, word_document, wrap_contract_layout};

pub const ITEMS_PER_PAGE: usize = 9;
pub const REFERENCE_LEN: usize = 32;
pub const DEFAULT_LOGO_SRC: &str = "/logo.png";

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub type FieldValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Date,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateField {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [TemplateField],
    #[serde(skip)]
    body: fn(&Fields<'_>, &RenderContext) -> String,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// A generated file ready for download or upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
    pub content: String,
}

impl Template {
    /// Contract HTML with header and footer
    pub fn render(&self, values: &FieldValues, ctx: &RenderContext) -> String {
        let fields = Fields { values };
        wrap_contract_layout(&(self.body)(&fields, ctx), ctx)
    }

    /// HTML that Word opens directly
    pub fn word_export(&self, values: &FieldValues, ctx: &RenderContext) -> ExportedFile {
        ExportedFile {
            file_name: self.export_file_name("doc"),
            mime_type: "application/msword",
            content: word_document(self.title, &self.render(values, ctx)),
        }
    }

    /// Standalone page handed to the send-for-signature flow
    pub fn send_file(&self, values: &FieldValues, ctx: &RenderContext) -> ExportedFile {
        ExportedFile {
            file_name: self.export_file_name("html"),
            mime_type: "text/html",
            content: send_document(self.title, &self.render(values, ctx)),
        }
    }

    pub fn export_file_name(&self, extension: &str) -> String {
        format!(
            "{}.{}",
            self.title.split_whitespace().collect::<Vec<_>>().join("_"),
            extension
        )
    }

    /// Anchors the signing backend replaces with signature images
    pub fn signature_anchors(&self) -> Vec<String> {
        let html = (self.body)(&Fields { values: &FieldValues::new() }, &RenderContext::blank());
        let mut anchors = Vec::new();
        let mut rest = html.as_str();
        while let Some(start) = rest.find("{{SIGNATURE_") {
            let Some(len) = rest[start..].find("}}") else {
                break;
            };
            anchors.push(rest[start..start + len + 2].to_string());
            rest = &rest[start + len + 2..];
        }
        anchors
    }
}

/// Everything besides field values that ends up in the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub date: NaiveDate,
    pub reference: String,
    pub origin: String,
    pub logo_src: String,
}

impl RenderContext {
    pub fn new(date: NaiveDate, reference: &str, origin: &str) -> Self {
        Self {
            date,
            reference: reference.to_string(),
            origin: origin.to_string(),
            logo_src: DEFAULT_LOGO_SRC.to_string(),
        }
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    fn blank() -> Self {
        Self::new(NaiveDate::default(), "", "")
    }
}

/// Field lookup used by template bodies. Missing and empty values both fall
/// back to the caller's placeholder.
pub struct Fields<'a> {
    values: &'a FieldValues,
}

impl<'a> Fields<'a> {
    pub fn new(values: &'a FieldValues) -> Self {
        Self { values }
    }

    fn present(&self, key: &str) -> Option<&'a str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Escaped value or placeholder
    pub fn get(&self, key: &str, placeholder: &str) -> String {
        match self.present(key) {
            Some(value) => escape_html(value),
            None => placeholder.to_string(),
        }
    }

    /// Unescaped value, empty when missing
    pub fn raw(&self, key: &str) -> String {
        self.present(key).unwrap_or_default().to_string()
    }

    /// `yyyy-mm-dd` input shown as `dd/mm/yyyy`; anything else is shown as typed
    pub fn date(&self, key: &str, placeholder: &str) -> String {
        match self.present(key) {
            Some(value) => match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
                Err(_) => escape_html(value),
            },
            None => placeholder.to_string(),
        }
    }
}

pub fn catalog() -> &'static [Template] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    pub templates: &'static [Template],
}

pub fn total_pages() -> usize {
    CATALOG.len().div_ceil(ITEMS_PER_PAGE)
}

/// 1-based page of the catalog; `None` when out of range
pub fn page(number: usize) -> Option<Page> {
    let total = total_pages();
    if number == 0 || number > total {
        return None;
    }
    let start = (number - 1) * ITEMS_PER_PAGE;
    let end = (start + ITEMS_PER_PAGE).min(CATALOG.len());
    Some(Page {
        page: number,
        total_pages: total,
        templates: &CATALOG[start..end],
    })
}

/// Random 32-character uppercase base-36 document reference
pub fn generate_reference() -> String {
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut bytes = Vec::with_capacity(REFERENCE_LEN);
    while bytes.len() < REFERENCE_LEN {
        bytes.extend_from_slice(uuid::Uuid::new_v4().as_bytes());
    }
    bytes
        .into_iter()
        .take(REFERENCE_LEN)
        .map(|b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect()
}
