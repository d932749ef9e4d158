//! HTTP client for the notes backend.
//!
//! Two endpoints: a multipart upload that returns generated notes, and a
//! JSON question endpoint that returns an answer. Requests are synchronous,
//! so a response can never arrive after a newer render has replaced the
//! pane it targets.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Upload can take a while: the backend extracts and summarises the file.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Deserialize, Debug)]
/// Response body from the upload endpoint.
pub struct UploadResponse {
    /// Generated notes, absent when the backend produced none.
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug)]
/// Response body from the ask endpoint.
pub struct AskResponse {
    /// Answer text, absent when the backend produced none.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Blocking client for the two backend endpoints.
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    /// Build a client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("noteum")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Upload a document as a multipart payload and return generated notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the request fails, the
    /// backend responds with a non-success status, or the body is not JSON.
    /// A success body without a `notes` field is not an error.
    pub fn upload(&self, path: &Path) -> Result<UploadResponse> {
        let form = reqwest::blocking::multipart::Form::new().file("file", path)?;

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    /// Ask a free-text question about the uploaded material.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend responds with a
    /// non-success status, or the body is not JSON. A success body without
    /// an `answer` field is not an error.
    pub fn ask(&self, question: &str) -> Result<AskResponse> {
        let response = self
            .client
            .post(format!("{}/ask", self.base_url))
            .json(&serde_json::json!({ "question": question }))
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}
