//! PIX charges and plan bookkeeping.

mod pix;
mod plan;
mod qr;

pub use pix::{crc16_ccitt, format_amount, new_txid, pix_payload, PixCharge, TXID_LEN};
pub use plan::{
    adhesion_contract, adhesion_contract_file_name, BillingCycle, Plan, PlanStatus, Subscription,
    TRIAL_DAYS,
};
pub use qr::{qr_png, QrImageError};
