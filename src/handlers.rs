//! HTTP surface: JSON actions on `POST /actions`, the public validation
//! lookup on `GET /validar/dados/<hash>` and a health check.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use base64::Engine;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Method, Request, Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::application::{
    prepare_signing_request, AccountError, AccountUseCase, Action, ActionResponse, EnvelopeDraft,
    ErrorResponse, LibraryError, LibraryUseCase, PartyInput, PaymentError, PaymentUseCase,
    PixMerchant, RenderFormat, SendError, SendUseCase, SignError, SignUseCase, VerifyError,
    VerifyUseCase, ACTOR_USER,
};
use crate::config::Config;
use crate::formatting::{format_tax_id, is_cnpj, is_cpf, Country};
use crate::infrastructure::database::{DatabaseError, SqliteRepository, Store};
use crate::locale::Translator;
use crate::signature::{FontLibrary, SigningRequest};
use crate::templates::{self, RenderContext};

const VALIDATION_PREFIX: &str = "/validar/dados/";

/// Shared state behind every request. SQLite access is serialized by the mutex.
pub struct AppState {
    store: Mutex<SqliteRepository>,
    fonts: FontLibrary,
    validation_url: String,
    pix: PixMerchant,
}

impl AppState {
    pub fn new(repository: SqliteRepository, config: &Config) -> Self {
        Self {
            store: Mutex::new(repository),
            fonts: FontLibrary::new(config.font_dir.clone()),
            validation_url: config.validation_url.clone(),
            pix: config.pix.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Sign(#[from] SignError),

    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Library(e) => match e {
                LibraryError::DocumentNotFound(_) | LibraryError::FolderNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                LibraryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Send(e) => match e {
                SendError::EnvelopeNotFound(_) => StatusCode::NOT_FOUND,
                SendError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Sign(e) => match e {
                SignError::UnknownDocument(_) => StatusCode::NOT_FOUND,
                SignError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Verify(e) => match e {
                VerifyError::InvalidHashFormat => StatusCode::BAD_REQUEST,
                VerifyError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Account(e) => match e {
                AccountError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Payment(e) => match e {
                PaymentError::UnknownTransaction(_) => StatusCode::NOT_FOUND,
                PaymentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Database(DatabaseError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Json(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn decode_content(content: &str) -> Result<Vec<u8>, ApiError> {
    base64::engine::general_purpose::STANDARD
        .decode(content.trim())
        .map_err(|e| ApiError::BadRequest(format!("Invalid base64 content: {}", e)))
}

/// Run one action against the shared state. Blocking: call it off the
/// async runtime. The store lock is only taken by actions that need it.
pub fn dispatch(action: Action, state: &AppState) -> Result<ActionResponse, ApiError> {
    if action.is_stateless() {
        return dispatch_stateless(action, state);
    }

    let guard = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?;
    dispatch_with_store(action, state, &*guard)
}

fn dispatch_with_store(
    action: Action,
    state: &AppState,
    store: &dyn Store,
) -> Result<ActionResponse, ApiError> {
    let library = LibraryUseCase::new(store);

    let response = match action {
        Action::UploadDocument { data } => {
            let document = library.upload(&data.file_name, data.size_bytes, data.folder_id.as_deref())?;
            ActionResponse::new("document", &document)?
        }
        Action::CreateFolder { data } => {
            ActionResponse::new("folder", &library.create_folder(&data.name)?)?
        }
        Action::MoveDocument { data } => {
            let document = library.move_document(&data.id, data.folder_id.as_deref())?;
            ActionResponse::new("document", &document)?
        }
        Action::RenameDocument { data } => {
            ActionResponse::new("document", &library.rename_document(&data.id, &data.name)?)?
        }
        Action::DeleteDocument { data } => {
            library.delete_document(&data.id)?;
            ActionResponse::new("document_deleted", &json!({ "id": data.id }))?
        }
        Action::DeleteFolder { data } => {
            let removed = library.delete_folder(&data.id)?;
            ActionResponse::new(
                "folder_deleted",
                &json!({ "id": data.id, "removedDocuments": removed }),
            )?
        }
        Action::ListDocuments { data } => ActionResponse::new("documents", &library.list(&data)?)?,
        Action::ListFolders => ActionResponse::new("folders", &library.folders()?)?,
        Action::ViewDocument { data } => {
            library.mark_viewed(&data.id, data.actor.as_deref().unwrap_or(ACTOR_USER))?;
            ActionResponse::new("document", &library.document(&data.id)?)?
        }
        Action::AuditTrail { data } => {
            let translator = Translator::load(store)?;
            let entries: Vec<_> = library
                .audit_trail(&data.id)?
                .into_iter()
                .map(|entry| {
                    let key = entry.action.label_key();
                    let label = translator.t(&key).to_string();
                    json!({ "entry": entry, "label": label })
                })
                .collect();
            ActionResponse::new("audit_trail", &entries)?
        }
        Action::FolderSummary { data } => {
            ActionResponse::new("file", &library.folder_summary(&data.id)?)?
        }
        Action::DownloadDocument { data } => {
            ActionResponse::new("file", &library.download_stub(&data.id)?)?
        }
        Action::SeedDemo => ActionResponse::new("seeded", &json!({ "seeded": library.seed_demo()? }))?,

        Action::SendEnvelope { data } => {
            let content = decode_content(&data.content)?;
            let draft = EnvelopeDraft {
                file_name: data.file_name,
                size_bytes: content.len() as u64,
                subject: data.subject,
                message: data.message,
                deadline: data.deadline,
                auto_reminder: data.auto_reminder,
                sender: data.sender.as_ref().map(|s| s.to_recipient()),
                recipients: data.recipients.iter().map(|r| r.to_recipient()).collect(),
            };
            let outcome = SendUseCase::new(store).execute(draft)?;
            let translator = Translator::load(store)?;

            ActionResponse::new(
                "envelope",
                &json!({
                    "envelope": outcome.envelope,
                    "document": outcome.document,
                    "message": translator.t("send.success"),
                }),
            )?
        }
        Action::GetEnvelope { data } => {
            ActionResponse::new("envelope_details", &SendUseCase::new(store).envelope(&data.id)?)?
        }
        Action::RecordSignature { data } => {
            let content = decode_content(&data.content)?;
            let receipt = SignUseCase::new(store, &state.validation_url).record(
                &content,
                &data.file_name,
                data.signatories,
                data.document_id.as_deref(),
            )?;
            ActionResponse::new("receipt", &receipt)?
        }
        Action::Validate { data } => {
            let result = VerifyUseCase::new(store).execute(&data.content_hash)?;
            ActionResponse::new("validation", &result)?
        }

        Action::Register { data } => {
            let subscription = AccountUseCase::new(store).register(&data, chrono::Utc::now())?;
            ActionResponse::new("subscription", &subscription)?
        }
        Action::Subscription => {
            ActionResponse::new("subscription", &AccountUseCase::new(store).subscription()?)?
        }
        Action::CreatePixCharge { data } => {
            let charge = PaymentUseCase::new(store, state.pix.clone()).create_charge(
                data.plan,
                data.cycle,
                &data.name,
                &data.tax_id,
            )?;
            ActionResponse::new("pix_charge", &charge)?
        }
        Action::ConfirmPayment { data } => {
            let confirmation =
                PaymentUseCase::new(store, state.pix.clone()).confirm(&data.txid, chrono::Utc::now())?;
            ActionResponse::new("payment_confirmation", &confirmation)?
        }

        Action::SetLanguage { data } => {
            let mut translator = Translator::load(store)?;
            translator.switch(data.language, store)?;
            ActionResponse::new("language", &json!({ "language": translator.language() }))?
        }
        Action::Translate { data } => {
            let translator = Translator::load(store)?;
            let translations: BTreeMap<&str, &str> = data
                .keys
                .iter()
                .map(|key| (key.as_str(), translator.t(key)))
                .collect();
            ActionResponse::new(
                "translations",
                &json!({ "language": translator.language(), "translations": translations }),
            )?
        }

        stateless => dispatch_stateless(stateless, state)?,
    };

    Ok(response)
}

/// Formatting, templates and signature rendering
fn dispatch_stateless(action: Action, state: &AppState) -> Result<ActionResponse, ApiError> {
    let response = match action {
        Action::FormatPhone { data } => {
            let country = Country::from_name_or_default(&data.country);
            let config = country.config();
            ActionResponse::new(
                "phone",
                &json!({
                    "country": country,
                    "value": country.format_phone(&data.input),
                    "placeholder": config.placeholder,
                    "language": config.language,
                }),
            )?
        }
        Action::FormatTaxId { data } => {
            let kind = if is_cnpj(&data.input) {
                "cnpj"
            } else if is_cpf(&data.input) {
                "cpf"
            } else {
                "partial"
            };
            ActionResponse::new(
                "tax_id",
                &json!({ "value": format_tax_id(&data.input), "kind": kind }),
            )?
        }

        Action::ListTemplates { data } => {
            let number = data.map(|d| d.page).unwrap_or(1);
            let page = templates::page(number)
                .ok_or_else(|| ApiError::NotFound(format!("Template page {} not found", number)))?;
            ActionResponse::new("templates", &page)?
        }
        Action::RenderTemplate { data } => {
            let template = templates::find(&data.template_id).ok_or_else(|| {
                ApiError::NotFound(format!("Template not found: {}", data.template_id))
            })?;
            let date = data
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let reference = data.reference.unwrap_or_else(templates::generate_reference);
            let ctx = RenderContext::new(date, &reference, &state.validation_url);

            match data.format {
                RenderFormat::Html => ActionResponse::new(
                    "contract_html",
                    &json!({ "html": template.render(&data.values, &ctx), "reference": reference }),
                )?,
                RenderFormat::Word => ActionResponse::new(
                    "file",
                    &json!({ "file": template.word_export(&data.values, &ctx), "reference": reference }),
                )?,
                RenderFormat::Send => ActionResponse::new(
                    "file",
                    &json!({ "file": template.send_file(&data.values, &ctx), "reference": reference }),
                )?,
            }
        }

        Action::RasterizeSignature { data } => {
            let image = data.signature.rasterize(&state.fonts);
            ActionResponse::new(
                "signature_image",
                &json!({
                    "signed": image.is_some(),
                    "png": image.as_ref().map(|i| i.to_base64()),
                    "width": image.as_ref().map(|i| i.width),
                    "height": image.as_ref().map(|i| i.height),
                }),
            )?
        }
        Action::PrepareSigning { data } => {
            let content = decode_content(&data.content)?;
            let parties: Vec<PartyInput> = data
                .parties
                .into_iter()
                .map(|p| PartyInput {
                    role: p.role,
                    name: p.name,
                    signature: p.signature,
                })
                .collect();
            let request = prepare_signing_request(
                &data.file_name,
                &data.content_type,
                content,
                data.font,
                &parties,
                &state.fonts,
            )?;

            let boundary = data
                .boundary
                .unwrap_or_else(|| format!("signdesk-{}", uuid::Uuid::new_v4().simple()));
            let signed: Vec<String> = request.signed_parties().map(|p| p.image_field()).collect();
            let body = request.encode_multipart(&boundary);

            ActionResponse::new(
                "signing_request",
                &json!({
                    "contentType": SigningRequest::multipart_content_type(&boundary),
                    "body": base64::engine::general_purpose::STANDARD.encode(body),
                    "signedFields": signed,
                }),
            )?
        }

        other => {
            return Err(ApiError::Internal(format!(
                "{} needs the store",
                other.name()
            )))
        }
    };

    Ok(response)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response");
            br#"{"error":"serialization failed"}"#.to_vec()
        }
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn error_response(status: StatusCode, message: &str) -> Response<Body> {
    json_response(
        status,
        &ErrorResponse {
            error: message.to_string(),
        },
    )
}

impl From<ApiError> for Response<Body> {
    fn from(err: ApiError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::debug!(error = %err, "request rejected");
        }
        error_response(status, &err.to_string())
    }
}

async fn handle_actions(req: Request<Body>, state: Arc<AppState>) -> Response<Body> {
    let body = match hyper::body::to_bytes(req.into_body()).await {
        Ok(body) => body,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &format!("Unreadable body: {}", e)),
    };

    let action: Action = match serde_json::from_slice(&body) {
        Ok(action) => action,
        Err(e) => {
            tracing::debug!(error = %e, "invalid action payload");
            return error_response(StatusCode::BAD_REQUEST, &format!("Invalid input format: {}", e));
        }
    };

    let name = action.name();
    tracing::debug!(action = name, "dispatching action");
    match tokio::task::spawn_blocking(move || dispatch(action, &state)).await {
        Ok(Ok(response)) => json_response(StatusCode::OK, &response),
        Ok(Err(err)) => err.into(),
        Err(err) => ApiError::Internal(format!("{} worker failed: {}", name, err)).into(),
    }
}

fn lookup_validation(hash: &str, state: &AppState) -> Response<Body> {
    let guard = match state.store.lock() {
        Ok(guard) => guard,
        Err(_) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, "store lock poisoned"),
    };
    let store: &dyn Store = &*guard;

    match VerifyUseCase::new(store).execute(hash) {
        Ok(result) => match result.record {
            Some(record) => json_response(StatusCode::OK, &record),
            None => error_response(StatusCode::NOT_FOUND, "Documento não encontrado"),
        },
        Err(e) => ApiError::from(e).into(),
    }
}

async fn handle_validation(hash: String, state: Arc<AppState>) -> Response<Body> {
    match tokio::task::spawn_blocking(move || lookup_validation(&hash, &state)).await {
        Ok(response) => response,
        Err(err) => ApiError::Internal(format!("validation worker failed: {}", err)).into(),
    }
}

/// Entry point handed to hyper's `service_fn`
pub async fn route(req: Request<Body>, state: Arc<AppState>) -> Result<Response<Body>, Infallible> {
    let path = req.uri().path().to_string();
    let response = match (req.method(), path.as_str()) {
        (&Method::GET, "/health") => json_response(StatusCode::OK, &json!({ "status": "ok" })),
        (&Method::POST, "/actions") => handle_actions(req, state).await,
        (&Method::GET, p) if p.starts_with(VALIDATION_PREFIX) => {
            handle_validation(p[VALIDATION_PREFIX.len()..].to_string(), state).await
        }
        _ => error_response(StatusCode::NOT_FOUND, "Not found"),
    };
    Ok(response)
}
