use super::qr::qr_png;
use base64::Engine;
use serde::Serialize;

const GUI: &str = "br.gov.bcb.pix";
const MAX_NAME_LEN: usize = 25;
const MAX_CITY_LEN: usize = 15;
pub const TXID_LEN: usize = 20;

/// CRC16-CCITT (poly 0x1021, init 0xFFFF) as four uppercase hex digits
pub fn crc16_ccitt(data: &str) -> String {
    let mut crc: u16 = 0xFFFF;
    for byte in data.bytes() {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    format!("{:04X}", crc)
}

/// EMV field: two-digit id, two-digit length in characters, value
fn emv(id: &str, value: &str) -> String {
    format!("{}{:02}{}", id, value.chars().count(), value)
}

fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Amount in cents rendered with two decimals
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Static PIX "copia e cola" payload plus its QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixCharge {
    pub txid: String,
    pub payload: String,
    /// Base64 PNG; `None` when the symbol could not be drawn
    #[serde(rename = "qrCodeBase64")]
    pub qr_code_base64: Option<String>,
    #[serde(rename = "amountCents")]
    pub amount_cents: u64,
}

impl PixCharge {
    pub fn new(key: &str, merchant: &str, city: &str, amount_cents: u64, txid: &str) -> Self {
        let payload = pix_payload(key, merchant, city, amount_cents, txid);
        let qr_code_base64 = match qr_png(&payload) {
            Ok(png) => Some(base64::engine::general_purpose::STANDARD.encode(png)),
            Err(err) => {
                tracing::warn!(txid, error = %err, "pix QR code unavailable");
                None
            }
        };

        Self {
            txid: txid.to_string(),
            payload,
            qr_code_base64,
            amount_cents,
        }
    }
}

pub fn pix_payload(key: &str, merchant: &str, city: &str, amount_cents: u64, txid: &str) -> String {
    let account = format!("{}{}", emv("00", GUI), emv("01", key));

    let mut payload = String::new();
    payload.push_str(&emv("00", "01"));
    payload.push_str(&emv("26", &account));
    payload.push_str(&emv("52", "0000"));
    payload.push_str(&emv("53", "986"));
    payload.push_str(&emv("54", &format_amount(amount_cents)));
    payload.push_str(&emv("58", "BR"));
    payload.push_str(&emv("59", truncate_chars(merchant, MAX_NAME_LEN)));
    payload.push_str(&emv("60", truncate_chars(city, MAX_CITY_LEN)));
    payload.push_str(&emv("62", &emv("05", txid)));
    payload.push_str("6304");

    let crc = crc16_ccitt(&payload);
    payload.push_str(&crc);
    payload
}

/// First 20 hex chars of a v4 uuid
pub fn new_txid() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..TXID_LEN].to_string()
}
