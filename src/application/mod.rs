mod account;
mod library;
mod send;
mod sign;
mod types;
mod verify;

pub use account::{
    AccountError, AccountUseCase, PaymentConfirmation, PaymentError, PaymentUseCase, PixMerchant,
    Registration, SUBSCRIPTION_KEY, USER_EMAIL_KEY, USER_NAME_KEY, USER_PHONE_KEY,
    USER_TAX_ID_KEY,
};
pub use library::{DocumentFilter, LibraryError, LibraryUseCase, ACTOR_SYSTEM, ACTOR_USER};
pub use send::{EnvelopeDraft, SendError, SendOutcome, SendUseCase, SENT_CATEGORY};
pub use sign::{prepare_signing_request, PartyInput, SignError, SignUseCase};
pub use types::*;
pub use verify::{ValidationRecord, VerificationResult, VerifyError, VerifyUseCase};
