//! Typed HTTP client for the stamp wizard backend.
//!
//! Every endpoint returns `Result<T, ApiFailure>`: a `success: false` body
//! becomes `ApiFailure::Rejected` carrying the server message, a network or
//! parse error becomes `ApiFailure::Transport`. The backend answers error
//! statuses (400/500) with the same JSON envelope, so bodies are parsed
//! regardless of the HTTP status code.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::config::API_BASE;
use crate::types::{ApiFailure, CharacterProposal, GeneratedGrid, RegistrationInfo, StampOutcome};

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
struct ConfigStatusBody {
    #[serde(default)]
    has_api_key: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct AckBody {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VerifyBody {
    success: bool,
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    text_model: Option<String>,
    #[serde(default)]
    image_model: Option<String>,
    #[serde(default)]
    text_model_version: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProposeBody {
    success: bool,
    #[serde(default)]
    characters: Vec<CharacterProposal>,
    #[serde(default)]
    model_info: Option<ProposalModelInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// Which text model actually served a proposal call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProposalModelInfo {
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub requested_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateBody {
    success: bool,
    #[serde(default)]
    image_path: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    model_info: Option<GridModelInfo>,
    #[serde(default)]
    registration: Option<RegistrationInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// Which models served a grid generation call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridModelInfo {
    #[serde(default)]
    pub prompt_model: Option<String>,
    #[serde(default)]
    pub image_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ResizeBody {
    success: bool,
    #[serde(default)]
    processed_count: usize,
    #[serde(default)]
    total_count: usize,
    #[serde(default)]
    download_url: String,
    #[serde(default)]
    folder: String,
    #[serde(default)]
    results: Vec<StampOutcome>,
    #[serde(default)]
    error: Option<String>,
}

// =============================================================================
// Domain results
// =============================================================================

/// Models confirmed by a successful connection verification.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelStatus {
    pub text_model: String,
    pub image_model: String,
    pub text_model_version: Option<String>,
}

/// Proposals plus optional model diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct ProposalSet {
    pub characters: Vec<CharacterProposal>,
    pub model_info: Option<ProposalModelInfo>,
}

/// Generation result: the grid image, optional seeded registration info,
/// optional model diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct GridResult {
    pub grid: GeneratedGrid,
    pub registration: Option<RegistrationInfo>,
    pub model_info: Option<GridModelInfo>,
}

/// Summary of a resize batch.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSummary {
    pub processed_count: usize,
    pub total_count: usize,
    pub download_url: String,
    pub folder: String,
    pub results: Vec<StampOutcome>,
}

// =============================================================================
// Endpoints
// =============================================================================

/// GET `/api/config` — whether the backend already holds an API key.
pub async fn fetch_config_status() -> Result<bool, ApiFailure> {
    let response = Request::get(&endpoint("/config"))
        .send()
        .await
        .map_err(transport)?;
    let body: ConfigStatusBody = read_json(response).await?;
    Ok(body.has_api_key)
}

/// POST `/api/config` — store the API key on the backend.
pub async fn save_config(api_key: &str) -> Result<(), ApiFailure> {
    #[derive(Serialize)]
    struct SaveRequest<'a> {
        api_key: &'a str,
    }

    let response = Request::post(&endpoint("/config"))
        .json(&SaveRequest { api_key })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body: AckBody = read_json(response).await?;
    if body.success {
        Ok(())
    } else {
        Err(ApiFailure::Rejected(body.error))
    }
}

/// POST `/api/verify-connection` — deep check against the AI provider.
///
/// The key is assumed to have been saved already.
pub async fn verify_connection() -> Result<ModelStatus, ApiFailure> {
    let response = Request::post(&endpoint("/verify-connection"))
        .send()
        .await
        .map_err(transport)?;
    let body: VerifyBody = read_json(response).await?;
    if body.success && body.connected {
        Ok(ModelStatus {
            text_model: body.text_model.unwrap_or_default(),
            image_model: body.image_model.unwrap_or_default(),
            text_model_version: body.text_model_version,
        })
    } else {
        Err(ApiFailure::Rejected(body.error))
    }
}

/// POST `/api/propose-characters` — ask the AI for stamp character ideas.
pub async fn propose_characters(request: &str) -> Result<ProposalSet, ApiFailure> {
    #[derive(Serialize)]
    struct ProposeRequest<'a> {
        request: &'a str,
    }

    let response = Request::post(&endpoint("/propose-characters"))
        .json(&ProposeRequest { request })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body: ProposeBody = read_json(response).await?;
    if body.success {
        Ok(ProposalSet {
            characters: body.characters,
            model_info: body.model_info,
        })
    } else {
        Err(ApiFailure::Rejected(body.error))
    }
}

/// POST `/api/generate-grid` — generate the stamp grid for one character.
pub async fn generate_grid(character: &CharacterProposal) -> Result<GridResult, ApiFailure> {
    #[derive(Serialize)]
    struct GenerateRequest<'a> {
        character: &'a CharacterProposal,
    }

    let response = Request::post(&endpoint("/generate-grid"))
        .json(&GenerateRequest { character })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body: GenerateBody = read_json(response).await?;
    if body.success {
        Ok(GridResult {
            grid: GeneratedGrid {
                image_path: body.image_path,
                image_url: body.image_url,
            },
            registration: body.registration,
            model_info: body.model_info,
        })
    } else {
        Err(ApiFailure::Rejected(body.error))
    }
}

/// POST `/api/resize-stamps` — multipart upload of cropped stamp images,
/// one `files` part per image.
pub async fn resize_stamps(files: &[File]) -> Result<ResizeSummary, ApiFailure> {
    let form = FormData::new().map_err(|e| ApiFailure::Transport(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| ApiFailure::Transport(format!("{:?}", e)))?;
    }

    let response = Request::post(&endpoint("/resize-stamps"))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body: ResizeBody = read_json(response).await?;
    if body.success {
        Ok(ResizeSummary {
            processed_count: body.processed_count,
            total_count: body.total_count,
            download_url: body.download_url,
            folder: body.folder,
            results: body.results,
        })
    } else {
        Err(ApiFailure::Rejected(body.error))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn transport(e: gloo_net::Error) -> ApiFailure {
    ApiFailure::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    response.json::<T>().await.map_err(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_response_deserialization() {
        let json = r#"{
            "success": true,
            "connected": true,
            "text_model": "gemini-2.5-flash",
            "image_model": "gemini-2.5-flash-image",
            "text_model_version": "gemini-2.5-flash-002"
        }"#;
        let body: VerifyBody = serde_json::from_str(json).unwrap();
        assert!(body.success && body.connected);
        assert_eq!(body.text_model.as_deref(), Some("gemini-2.5-flash"));
        assert!(body.error.is_none());
    }

    #[test]
    fn verify_failure_keeps_server_message() {
        let json = r#"{"success": false, "error": "APIキーが無効です"}"#;
        let body: VerifyBody = serde_json::from_str(json).unwrap();
        assert!(!body.success);
        assert!(!body.connected); // missing field defaults to false
        assert_eq!(body.error.as_deref(), Some("APIキーが無効です"));
    }

    #[test]
    fn propose_response_deserialization() {
        let json = r#"{
            "success": true,
            "characters": [
                {"name": "もちうさぎ", "concept": "まるくてやわらかいうさぎ"},
                {"name": "ねこ係長", "concept": "会社勤めの猫"}
            ],
            "model_info": {"model_version": "gemini-2.5-flash-002", "requested_model": "gemini-2.5-flash"}
        }"#;
        let body: ProposeBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.characters.len(), 2);
        assert_eq!(body.characters[0].name, "もちうさぎ");
        let info = body.model_info.unwrap();
        assert_eq!(info.model_version.as_deref(), Some("gemini-2.5-flash-002"));
    }

    #[test]
    fn generate_response_deserialization() {
        let json = r#"{
            "success": true,
            "image_path": "output/grid_20250823_120000.png",
            "image_url": "/output/grid_20250823_120000.png",
            "registration": {
                "title_ja": "もちうさぎ",
                "title_en": "Mochi Rabbit",
                "description_ja": "まるくてやわらかい",
                "description_en": "Soft and round",
                "copyright": "© 2025 Your Name"
            },
            "model_info": {"prompt_model": "gemini-2.5-flash-002", "image_model": "gemini-2.5-flash-image"}
        }"#;
        let body: GenerateBody = serde_json::from_str(json).unwrap();
        assert!(body.success);
        assert_eq!(body.image_url, "/output/grid_20250823_120000.png");
        let reg = body.registration.unwrap();
        assert_eq!(reg.title_en, "Mochi Rabbit");
    }

    #[test]
    fn generate_response_without_registration() {
        let json = r#"{"success": true, "image_path": "p", "image_url": "/output/p"}"#;
        let body: GenerateBody = serde_json::from_str(json).unwrap();
        assert!(body.registration.is_none());
        assert!(body.model_info.is_none());
    }

    #[test]
    fn resize_response_deserialization() {
        let json = r#"{
            "success": true,
            "folder": "stamps_20250823_120000",
            "processed_count": 8,
            "total_count": 8,
            "results": [
                {"success": true, "filename": "01.png"},
                {"success": false, "filename": "02.png", "error": "decode failed"}
            ],
            "download_url": "/api/download/stamps_20250823_120000"
        }"#;
        let body: ResizeBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.processed_count, 8);
        assert_eq!(body.folder, "stamps_20250823_120000");
        assert!(body.results[0].success);
        assert!(!body.results[1].success);
    }

    #[test]
    fn config_status_defaults_to_false() {
        let body: ConfigStatusBody = serde_json::from_str("{}").unwrap();
        assert!(!body.has_api_key);
    }
}
