use chrono::{TimeZone, Utc};
use signdesk::payment::{
    adhesion_contract, adhesion_contract_file_name, crc16_ccitt, format_amount, new_txid,
    pix_payload, BillingCycle, PixCharge, Plan, PlanStatus, Subscription, TXID_LEN,
};

#[test]
fn test_crc16_check_value() {
    assert_eq!(crc16_ccitt("123456789"), "29B1");
    assert_eq!(crc16_ccitt(""), "FFFF");
}

#[test]
fn test_payload_ends_with_its_own_crc() {
    let payload = pix_payload("12345678901", "VerySing Digital", "Sao Paulo", 1990, "abc123");
    let (body, crc) = payload.split_at(payload.len() - 4);

    assert!(body.ends_with("6304"));
    assert_eq!(crc, crc16_ccitt(body));
}

#[test]
fn test_payload_fields() {
    let payload = pix_payload("12345678901", "VerySing Digital", "Sao Paulo", 1990, "abc123");

    assert!(payload.starts_with("000201"));
    assert!(payload.contains("0014br.gov.bcb.pix011112345678901"));
    assert!(payload.contains("26330014br.gov.bcb.pix011112345678901"));
    assert!(payload.contains("5303986"));
    assert!(payload.contains("540519.90"));
    assert!(payload.contains("5802BR"));
    assert!(payload.contains("5916VerySing Digital"));
    assert!(payload.contains("6009Sao Paulo"));
    assert!(payload.contains("62100506abc123"));
}

#[test]
fn test_short_key_length_is_padded() {
    let payload = pix_payload("a@b.co", "X", "Y", 100, "t");
    // GUI subfield, key id and length, key
    assert!(payload.contains("26280014br.gov.bcb.pix0106a@b.co"));
}

#[test]
fn test_amount_formatting() {
    assert_eq!(format_amount(0), "0.00");
    assert_eq!(format_amount(5), "0.05");
    assert_eq!(format_amount(21492), "214.92");
}

#[test]
fn test_charge_carries_txid() {
    let txid = new_txid();
    assert_eq!(txid.len(), TXID_LEN);
    assert!(txid.chars().all(|c| c.is_ascii_hexdigit()));

    let charge = PixCharge::new("k", "m", "c", 3990, &txid);
    assert_eq!(charge.amount_cents, 3990);
    assert!(charge.payload.contains(&txid));
}

#[test]
fn test_plan_prices() {
    assert_eq!(Plan::Gratuito.price_cents(BillingCycle::Annual), 0);
    assert_eq!(Plan::Profissional.price_cents(BillingCycle::Monthly), 1990);
    assert_eq!(Plan::Empresarial.price_cents(BillingCycle::Annual), 43092);
    assert!(!Plan::Gratuito.is_paid());
    assert_eq!(Plan::parse("empresarial"), Some(Plan::Empresarial));
}

#[test]
fn test_subscription_activation() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
    let mut sub = Subscription::start(Plan::Empresarial, now);
    assert!(sub.in_trial(now));

    sub.activate();
    assert_eq!(sub.status, PlanStatus::Active);
    assert!(!sub.in_trial(now));
}

#[test]
fn test_adhesion_contract_text() {
    let text = adhesion_contract(" Ana Souza ", "123.456.789-01", Plan::Profissional, "tx1", "10/01/2026 09:00:00");

    assert!(text.starts_with("CONTRATO DE ADESÃO - VERYSING"));
    assert!(text.contains("Ana Souza, portador(a) do CPF 123.456.789-01"));
    assert!(text.contains("plano PROFISSIONAL"));
    assert!(text.contains("Transação ID: tx1"));
    assert_eq!(adhesion_contract_file_name("tx1"), "contrato_tx1.txt");
}
