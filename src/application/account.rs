use crate::formatting::{format_tax_id, is_valid_email, unformat_tax_id, Country};
use crate::infrastructure::database::{DatabaseError, Store};
use crate::payment::{
    adhesion_contract, adhesion_contract_file_name, new_txid, BillingCycle, PixCharge, Plan,
    Subscription,
};
use crate::templates::ExportedFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub const USER_NAME_KEY: &str = "user_name";
pub const USER_EMAIL_KEY: &str = "user_email";
pub const USER_PHONE_KEY: &str = "user_phone";
pub const USER_TAX_ID_KEY: &str = "user_tax_id";
pub const SUBSCRIPTION_KEY: &str = "subscription";
const PENDING_CHARGE_PREFIX: &str = "pix_charge:";

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid e-mail: {0}")]
    InvalidEmail(String),

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Name and CPF are required to generate the PIX charge and the contract")]
    MissingPayer,

    #[error("The free plan does not require payment")]
    FreePlan,

    #[error("Unknown transaction: {0}")]
    UnknownTransaction(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Sign-up form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default, rename = "taxId")]
    pub tax_id: String,
    pub password: String,
    #[serde(rename = "passwordConfirmation")]
    pub password_confirmation: String,
    #[serde(default)]
    pub plan: Plan,
}

impl Registration {
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.name.trim().is_empty() {
            return Err(AccountError::EmptyName);
        }
        if !is_valid_email(&self.email) {
            return Err(AccountError::InvalidEmail(self.email.clone()));
        }
        if self.password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }
        if self.password != self.password_confirmation {
            return Err(AccountError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Merchant data baked into every PIX payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixMerchant {
    pub key: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingCharge {
    plan: Plan,
    name: String,
    #[serde(rename = "taxId")]
    tax_id: String,
    #[serde(rename = "amountCents")]
    amount_cents: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentConfirmation {
    pub subscription: Subscription,
    pub contract: ExportedFile,
}

pub struct AccountUseCase<'a> {
    store: &'a dyn Store,
}

impl<'a> AccountUseCase<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Validate the form and persist the profile and starting plan.
    /// The password is only checked, never stored.
    pub fn register(&self, form: &Registration, now: DateTime<Utc>) -> Result<Subscription, AccountError> {
        form.validate()?;

        let phone = match form.country {
            Some(country) => country.format_phone(&form.phone),
            None => form.phone.trim().to_string(),
        };

        let subscription = Subscription::start(form.plan, now);
        let profile = [
            (USER_NAME_KEY, json!(form.name.trim())),
            (USER_EMAIL_KEY, json!(form.email.trim())),
            (USER_PHONE_KEY, json!(phone)),
            (USER_TAX_ID_KEY, json!(format_tax_id(&form.tax_id))),
            (
                SUBSCRIPTION_KEY,
                serde_json::to_value(&subscription).map_err(DatabaseError::from)?,
            ),
        ];

        self.store.in_transaction(&mut || {
            profile
                .iter()
                .try_for_each(|(key, value)| self.store.set_preference(key, value))
        })?;

        tracing::info!(plan = form.plan.as_str(), "account registered");
        Ok(subscription)
    }

    pub fn subscription(&self) -> Result<Option<Subscription>, AccountError> {
        match self.store.get_preference(SUBSCRIPTION_KEY)? {
            Some(value) => Ok(Some(
                serde_json::from_value(value).map_err(DatabaseError::from)?,
            )),
            None => Ok(None),
        }
    }
}

pub struct PaymentUseCase<'a> {
    store: &'a dyn Store,
    merchant: PixMerchant,
}

impl<'a> PaymentUseCase<'a> {
    pub fn new(store: &'a dyn Store, merchant: PixMerchant) -> Self {
        Self { store, merchant }
    }

    /// Issue a PIX "copia e cola" charge for the plan price
    pub fn create_charge(
        &self,
        plan: Plan,
        cycle: BillingCycle,
        payer_name: &str,
        payer_tax_id: &str,
    ) -> Result<PixCharge, PaymentError> {
        if payer_name.trim().is_empty() || unformat_tax_id(payer_tax_id).is_empty() {
            return Err(PaymentError::MissingPayer);
        }
        if !plan.is_paid() {
            return Err(PaymentError::FreePlan);
        }

        let amount_cents = plan.price_cents(cycle);
        let charge = PixCharge::new(
            &self.merchant.key,
            &self.merchant.name,
            &self.merchant.city,
            amount_cents,
            &new_txid(),
        );

        let pending = PendingCharge {
            plan,
            name: payer_name.trim().to_string(),
            tax_id: format_tax_id(payer_tax_id),
            amount_cents,
        };
        self.store.set_preference(
            &format!("{}{}", PENDING_CHARGE_PREFIX, charge.txid),
            &serde_json::to_value(&pending).map_err(DatabaseError::from)?,
        )?;

        tracing::info!(txid = %charge.txid, plan = plan.as_str(), amount_cents, "pix charge created");
        Ok(charge)
    }

    /// Mark the charge paid, activate the plan and issue the adhesion contract
    pub fn confirm(&self, txid: &str, now: DateTime<Utc>) -> Result<PaymentConfirmation, PaymentError> {
        let key = format!("{}{}", PENDING_CHARGE_PREFIX, txid.trim());
        let pending: PendingCharge = match self.store.get_preference(&key)? {
            Some(value) => serde_json::from_value(value).map_err(DatabaseError::from)?,
            None => return Err(PaymentError::UnknownTransaction(txid.to_string())),
        };

        let mut subscription = Subscription::start(pending.plan, now);
        subscription.activate();
        let stored = serde_json::to_value(&subscription).map_err(DatabaseError::from)?;

        // a charge is settled once; replaying the txid finds nothing pending
        self.store
            .in_transaction(&mut || {
                if !self.store.remove_preference(&key)? {
                    return Err(DatabaseError::NotFound);
                }
                self.store.set_preference(SUBSCRIPTION_KEY, &stored)
            })
            .map_err(|e| match e {
                DatabaseError::NotFound => PaymentError::UnknownTransaction(txid.to_string()),
                other => other.into(),
            })?;

        let confirmed_at = now
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string();
        let contract = ExportedFile {
            file_name: adhesion_contract_file_name(txid.trim()),
            mime_type: "text/plain",
            content: adhesion_contract(
                &pending.name,
                &pending.tax_id,
                pending.plan,
                txid.trim(),
                &confirmed_at,
            ),
        };

        tracing::info!(txid, plan = pending.plan.as_str(), "payment confirmed");
        Ok(PaymentConfirmation {
            subscription,
            contract,
        })
    }
}
