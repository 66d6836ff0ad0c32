//! Phonebook API handlers
//!
//! Contains HTTP request handlers for listing, fetching, creating, and deleting contacts.

use crate::error::AppError;
use crate::phonebook::{Contact, ContactId, NewContact};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use tracing::info;

/// Create contact request
///
/// Fields are kept as raw JSON so that missing or falsy values produce the
/// validation messages rather than a decoding error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CreatePersonRequest {
    /// Name for the new contact
    pub name: Option<Value>,
    /// Phone number for the new contact
    pub number: Option<Value>,
}

impl CreatePersonRequest {
    /// Decode a request body
    ///
    /// A body without a JSON content type, an empty body, or a JSON value that
    /// is not an object all decode to an empty request. Only syntactically
    /// broken JSON is rejected.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, AppError> {
        if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| {
            AppError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
        })?;

        match value {
            Value::Object(mut fields) => Ok(Self {
                name: fields.remove("name"),
                number: fields.remove("number"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Text of both fields; falsy values (`null`, `false`, `0`, `""`) count as absent
    pub fn into_fields(self) -> Result<(Option<String>, Option<String>), AppError> {
        Ok((
            field_text("name", self.name)?,
            field_text("number", self.number)?,
        ))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn field_text(field: &str, value: Option<Value>) -> Result<Option<String>, AppError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(AppError::BadRequest(format!(
            "{} must be a string",
            field
        ))),
    }
}

fn parse_id(raw: &str) -> Result<ContactId, AppError> {
    raw.parse().map_err(|_| AppError::MalformedId(raw.to_string()))
}

/// GET /api/persons - List all contacts
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.store.list().await?;
    Ok(Json(contacts))
}

/// GET /api/persons/:id - Get a specific contact
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let id = parse_id(&id)?;
    let contact = state.store.get(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(contact))
}

/// DELETE /api/persons/:id - Delete a contact
///
/// Responds 204 whether or not the contact existed.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    if state.store.delete(id).await? {
        info!("Deleted contact {}", id);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/persons - Create a new contact
pub async fn create_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Contact>, AppError> {
    let (name, number) = CreatePersonRequest::from_body(&headers, &body)?.into_fields()?;

    let contact = NewContact::validate(name, number)?;
    let contact = state.store.create(contact).await?;

    info!("Created contact {} ({})", contact.id, contact.name);
    Ok(Json(contact))
}
