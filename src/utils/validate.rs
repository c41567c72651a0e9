use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload. Rejections and rule violations both surface as `BadRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest {
                message: rejection.body_text(),
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 3, max = 20, message = "Name must be between 3 and 20 characters"))]
        name: String,
        #[validate(range(min = 1, max = 31, message = "Day must be between 1 and 31"))]
        day: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let request = json_request(r#"{"name": "maria", "day": 10}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        let ValidatedJson(payload) = result.expect("payload should validate");
        assert_eq!(payload.name, "maria");
        assert_eq!(payload.day, 10);
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        let request = json_request(r#"{"name": "ok", "day": 40}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = json_request("{not json");
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }
}
