//! Data Loader: the single retrieval of the résumé data document.
//!
//! One GET, no retries. Every failure is terminal for the page render it
//! belongs to; the caller turns it into a blocking notice.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

use crate::models::ResumeDocument;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("Failed to load resume data: {status}")]
    DataUnavailable { status: u16 },

    /// No response at all (connection refused, DNS, TLS, reset). Same class
    /// of failure as `DataUnavailable`, without a status code.
    #[error("Failed to load resume data: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Resume data is not a valid document: {0}")]
    ParseFailure(#[from] serde_json::Error),
}

impl LoadError {
    /// The HTTP status behind a `DataUnavailable` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::DataUnavailable { status } => Some(*status),
            _ => None,
        }
    }
}

/// Where the data document comes from. Carried in `AppState` as
/// `Arc<dyn ResumeSource>` so tests can swap the network out.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn fetch(&self) -> Result<ResumeDocument, LoadError>;
}

/// Fetches the document over HTTP from a fixed path relative to the page.
#[derive(Clone)]
pub struct HttpResumeSource {
    client: Client,
    location: Url,
}

impl HttpResumeSource {
    /// `data_path` is resolved against `page_origin`, the same way a browser
    /// resolves a relative fetch against the page URL.
    pub fn new(page_origin: &Url, data_path: &str) -> anyhow::Result<Self> {
        let location = page_origin.join(data_path)?;
        let client = Client::builder().build()?;
        Ok(Self { client, location })
    }

    pub fn location(&self) -> &Url {
        &self.location
    }
}

#[async_trait]
impl ResumeSource for HttpResumeSource {
    async fn fetch(&self) -> Result<ResumeDocument, LoadError> {
        debug!("Fetching resume data from {}", self.location);

        let response = self.client.get(self.location.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::DataUnavailable {
                status: status.as_u16(),
            });
        }

        // Read the raw body first so malformed JSON is reported as a parse
        // failure rather than a transport error.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Loads the document once for a page render, logging the outcome.
pub async fn load_resume_document(source: &dyn ResumeSource) -> Result<ResumeDocument, LoadError> {
    match source.fetch().await {
        Ok(document) => {
            info!(
                "Resume data loaded: about={} experience={} skills={} interests={}",
                document.about.is_some(),
                document.experience.as_ref().map_or(0, Vec::len),
                document.skills.is_some(),
                document.interests.is_some(),
            );
            Ok(document)
        }
        Err(e) => {
            error!("Error loading resume data: {e}");
            Err(e)
        }
    }
}
