pub mod application;
pub mod config;
pub mod domain;
pub mod formatting;
pub mod handlers;
pub mod infrastructure;
pub mod locale;
pub mod payment;
pub mod signature;
pub mod templates;

// Re-export commonly used types
pub use application::{
    AccountUseCase, LibraryUseCase, PaymentUseCase, SendUseCase, SignUseCase, VerificationResult,
    VerifyUseCase,
};
pub use config::Config;
pub use domain::{Document, Envelope, Folder, SignatureReceipt, SignedDocument};
pub use infrastructure::database::{SqliteRepository, Store};
