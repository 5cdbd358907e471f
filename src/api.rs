// API client module: a small blocking HTTP client that talks to the
// 9pic.ru upload endpoint. One request per invocation, no retries.

use reqwest::blocking::{multipart, Client};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{UploadError, UNKNOWN_REMOTE_ERROR};

/// Origin of the image host. Share links are always built against it.
pub const SERVICE_ORIGIN: &str = "https://9pic.ru";

const UPLOAD_PATH: &str = "/upload.php";

// The service only accepts requests that look like they come from its own
// web page, so these values are sent verbatim.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// How long the server keeps the uploaded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    #[default]
    Never,
    After30Days,
}

impl RetentionPolicy {
    /// Value of the `delete_after` form field.
    pub fn form_value(self) -> &'static str {
        match self {
            RetentionPolicy::Never => "never",
            RetentionPolicy::After30Days => "30",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RetentionPolicy::Never => "бессрочно",
            RetentionPolicy::After30Days => "30 дней",
        }
    }
}

/// What to upload and how long to keep it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub retention: RetentionPolicy,
}

/// JSON body returned by the upload endpoint.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, rename = "original")]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub delete_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Blocking client for the upload endpoint. Holds the reqwest client with
/// the browser headers preset and the origin requests are sent to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the real service.
    pub fn new() -> Result<Self, UploadError> {
        Self::with_base_url(SERVICE_ORIGIN)
    }

    /// Client that sends uploads to another origin. The browser headers
    /// still name the real service.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, UploadError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Upload the image as multipart/form-data and return the parsed
    /// response. Fails before touching the network if the path is not a
    /// regular file.
    pub fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, UploadError> {
        let path = &request.file_path;
        if !path.exists() {
            return Err(UploadError::NotFound(path.clone()));
        }
        if !path.is_file() {
            return Err(UploadError::NotAFile(path.clone()));
        }

        // The part owns the file handle; it is closed once the request is
        // done, whatever the outcome.
        let file = File::open(path)?;
        let length = file.metadata()?.len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string());

        // Always sent as image/jpeg, whatever the real format is.
        let part = multipart::Part::reader_with_length(file, length)
            .file_name(file_name)
            .mime_str("image/jpeg")?;
        let form = multipart::Form::new()
            .part("image", part)
            .text("delete_after", request.retention.form_value());

        let url = self.upload_url();
        info!(url = %url, path = %path.display(), bytes = length, "uploading image");

        let res = self.client.post(&url).multipart(form).send()?;
        let status = res.status();
        debug!(%status, "upload response received");
        if !status.is_success() {
            return Err(UploadError::Http { status });
        }

        let body = res.bytes()?;
        let response: UploadResponse = serde_json::from_slice(&body)?;
        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string());
            return Err(UploadError::Remote(message));
        }

        debug!(uuid = ?response.uuid, "upload accepted");
        Ok(response)
    }
}

/// Headers that make the request look like the service's own web page.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ru-RU,ru;q=0.9"));
    headers.insert(
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    );
    headers.insert(ORIGIN, HeaderValue::from_static("https://9pic.ru"));
    headers.insert(REFERER, HeaderValue::from_static("https://9pic.ru/"));
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers
}
