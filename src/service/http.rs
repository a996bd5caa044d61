//! REST client for the note service.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ServiceError, service::NoteService, types::{config::ServiceConfig, note::{Draft, Note, NoteId}}};

pub struct HttpNoteService {
	notes_url: String,
	client:    reqwest::Client,
}

/// Body the service sends alongside a failing status
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
	error: String,
}

impl HttpNoteService {
	pub fn new(config: &ServiceConfig) -> Self {
		let base = config.base_url.trim_end_matches('/');
		let path = config.notes_path.trim_matches('/');
		Self { notes_url: format!("{}/{}", base, path), client: reqwest::Client::new() }
	}

	pub fn notes_url(&self) -> &str { &self.notes_url }

	fn note_url(&self, id: &NoteId) -> String { format!("{}/{}", self.notes_url, id) }

	/// Passes successful responses through and turns the rest into a `ServiceError`
	async fn check(resp: Response, id: Option<&NoteId>) -> Result<Response, ServiceError> {
		let status = resp.status();
		if status.is_success() {
			return Ok(resp);
		}

		let body = resp.text().await.unwrap_or_default();
		Err(classify_failure(status, &body, id))
	}
}

/// Maps a failed HTTP exchange onto the service error taxonomy
pub(crate) fn classify_failure(status: StatusCode, body: &str, id: Option<&NoteId>) -> ServiceError {
	let message = match serde_json::from_str::<ErrorEnvelope>(body) {
		Ok(envelope) => envelope.error,
		Err(_) if !body.trim().is_empty() => body.trim().to_string(),
		Err(_) => status.to_string(),
	};
	debug!("Service replied {} with: {}", status, message);

	match status {
		StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthorized(message),
		StatusCode::NOT_FOUND => match id {
			Some(id) => ServiceError::NotFound(id.clone()),
			None => ServiceError::Rejected { status: status.as_u16(), message },
		},
		StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
			ServiceError::ServiceUnavailable(message)
		}
		_ => ServiceError::Rejected { status: status.as_u16(), message },
	}
}

fn transport(e: reqwest::Error) -> ServiceError { ServiceError::Transport(e.to_string()) }

#[async_trait]
impl NoteService for HttpNoteService {
	#[instrument(skip(self))]
	async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
		let resp = self.client.get(&self.notes_url).send().await.map_err(transport)?;
		let resp = Self::check(resp, None).await?;
		resp.json::<Vec<Note>>().await.map_err(transport)
	}

	#[instrument(skip(self, draft))]
	async fn create_note(&self, draft: &Draft) -> Result<Note, ServiceError> {
		let resp = self.client.post(&self.notes_url).json(draft).send().await.map_err(transport)?;
		let resp = Self::check(resp, None).await?;
		resp.json::<Note>().await.map_err(transport)
	}

	#[instrument(skip(self, draft))]
	async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ServiceError> {
		let resp = self.client.patch(self.note_url(id)).json(draft).send().await.map_err(transport)?;
		let resp = Self::check(resp, Some(id)).await?;
		resp.json::<Note>().await.map_err(transport)
	}

	#[instrument(skip(self))]
	async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError> {
		let resp = self.client.delete(self.note_url(id)).send().await.map_err(transport)?;
		Self::check(resp, Some(id)).await?;
		Ok(())
	}
}
