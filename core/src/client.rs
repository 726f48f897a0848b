//! Stateless HTTP request builder and response parser for the pet gallery.
//!
//! # Design
//! `PetClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The host executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use crate::download::SaveAction;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Pet;
use crate::validate;

/// Address of the public pet listing.
pub const DEFAULT_BASE_URL: &str = "https://eulerity-hackathon.appspot.com";

/// Synchronous, stateless client for the pet gallery endpoint.
#[derive(Debug, Clone)]
pub struct PetClient {
    base_url: String,
}

impl Default for PetClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_pets(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/pets", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode the listing and run it through the record validator.
    ///
    /// A body that fails validation yields `ApiError::InvalidData` and no
    /// records at all.
    pub fn parse_list_pets(&self, response: HttpResponse) -> Result<Vec<Pet>, ApiError> {
        check_status(&response, 200)?;
        let value: serde_json::Value = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        validate::parse_records(value)
    }

    /// Image URLs are absolute and used verbatim; they need not live under
    /// `base_url`.
    pub fn build_download(&self, action: &SaveAction) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: action.url.clone(),
            headers: Vec::new(),
        }
    }

    pub fn parse_download(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PetClient {
        PetClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    fn status(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_list_pets_produces_correct_request() {
        let req = client().build_list_pets();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/pets");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn default_client_targets_public_endpoint() {
        let req = PetClient::default().build_list_pets();
        assert_eq!(req.url, "https://eulerity-hackathon.appspot.com/pets");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PetClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_list_pets().url, "http://localhost:3000/pets");
    }

    #[test]
    fn parse_list_pets_success() {
        let pets = client()
            .parse_list_pets(ok(
                r#"[{"title":"Rex","description":"A dog","url":"http://x/1.png","created":"2021"}]"#,
            ))
            .unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].title, "Rex");
        assert_eq!(pets[0].created, "2021");
    }

    #[test]
    fn parse_list_pets_empty_array() {
        assert!(client().parse_list_pets(ok("[]")).unwrap().is_empty());
    }

    #[test]
    fn parse_list_pets_rejects_object_payload() {
        let err = client().parse_list_pets(ok(r#"{"not":"an array"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidData(_)));
    }

    #[test]
    fn parse_list_pets_rejects_mixed_payload() {
        let err = client()
            .parse_list_pets(ok(
                r#"[{"title":"Rex","description":"A dog","url":"u","created":"c"},{"title":1}]"#,
            ))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidData(_)));
    }

    #[test]
    fn parse_list_pets_bad_json() {
        let err = client().parse_list_pets(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_pets_not_found() {
        let err = client().parse_list_pets(status(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_pets_server_error() {
        let err = client().parse_list_pets(status(500, "internal error")).unwrap_err();
        match err {
            ApiError::HttpError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn build_download_uses_record_url_verbatim() {
        let action = SaveAction {
            url: "http://images.example/2.png".to_string(),
            file_name: "Mia".to_string(),
        };
        let req = client().build_download(&action);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://images.example/2.png");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn parse_download_returns_bytes() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: vec![0x89, b'P', b'N', b'G'],
        };
        assert_eq!(
            client().parse_download(response).unwrap(),
            vec![0x89, b'P', b'N', b'G']
        );
    }

    #[test]
    fn parse_download_not_found() {
        let err = client().parse_download(status(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
