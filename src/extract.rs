use crate::error::{ApiError, MALFORMED_BODY_MESSAGE};

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Lenient JSON body extractor.
///
/// Unlike `axum::Json` it ignores the content type, treats an empty body as `{}`
/// (so handlers report the missing fields) and rejects anything that is not a JSON
/// object with a `400 {"error": ...}` in the API's own error format. Request DTOs
/// keep their fields as `Value`, so only the JSON syntax can fail here.
///
/// Authenticated handlers take `Result<JsonBody<T>, ApiError>` and unwrap it after
/// the token has been resolved.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                tracing::debug!("Failed to read request body: {}", rejection);
                ApiError::Validation(MALFORMED_BODY_MESSAGE.to_string())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value = match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ Value::Object(_)) => value,
            Ok(other) => {
                tracing::debug!("Rejected non-object request body: {}", other);
                return Err(ApiError::Validation(MALFORMED_BODY_MESSAGE.to_string()));
            }
            Err(err) => {
                tracing::debug!("Failed to parse request body: {}", err);
                return Err(ApiError::Validation(MALFORMED_BODY_MESSAGE.to_string()));
            }
        };

        serde_json::from_value(value).map(Self).map_err(|err| {
            tracing::debug!("Failed to deserialize request body: {}", err);
            ApiError::Validation(MALFORMED_BODY_MESSAGE.to_string())
        })
    }
}

/// Keeps a field only when it holds a non-empty string.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Reads an untyped body field as text. Only non-empty strings count; any other
/// value is treated as absent.
pub fn text_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => non_empty(Some(text)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Form {
        label: Option<Value>,
    }

    async fn extract(body: impl Into<Body>) -> Result<Form, ApiError> {
        let req = axum::http::Request::builder().body(body.into()).unwrap();
        JsonBody::<Form>::from_request(req, &()).await.map(|JsonBody(form)| form)
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        assert_eq!(extract("").await.unwrap(), Form::default());
        assert_eq!(extract(" \n").await.unwrap(), Form::default());
    }

    #[tokio::test]
    async fn test_json_body_without_content_type() {
        let form = extract(r#"{"label": "Eau"}"#).await.unwrap();

        assert_eq!(form.label, Some(json!("Eau")));
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_is_left_to_the_handler() {
        let form = extract(r#"{"label": 5}"#).await.unwrap();

        assert_eq!(form.label, Some(json!(5)));
        assert_eq!(text_field(form.label), None);
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        for body in ["{", "[1, 2]", "null", "\"label\"", "5"] {
            let result = extract(body).await;
            assert!(
                matches!(result, Err(ApiError::Validation(ref msg)) if msg == MALFORMED_BODY_MESSAGE),
                "body {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        // Above axum's default 2 MiB limit
        let result = extract(vec![b' '; 3 * 1024 * 1024]).await;

        assert!(matches!(result, Err(ApiError::PayloadTooLarge)));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("a".to_string())), Some("a".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_text_field() {
        assert_eq!(text_field(Some(json!("Eau"))), Some("Eau".to_string()));
        assert_eq!(text_field(Some(json!(""))), None);
        assert_eq!(text_field(Some(json!(5))), None);
        assert_eq!(text_field(Some(json!(true))), None);
        assert_eq!(text_field(Some(Value::Null)), None);
        assert_eq!(text_field(None), None);
    }
}
