use std::path::PathBuf;

use thiserror::Error;

use crate::types::note::NoteId;

/// Failure of a single call against the remote note service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
	#[error("Could not reach the note service: {0}")]
	Transport(String),

	#[error("Note service unavailable: {0}")]
	ServiceUnavailable(String),

	#[error("Not authorized: {0}")]
	Unauthorized(String),

	#[error("Note '{0}' not found")]
	NotFound(NoteId),

	#[error("Request rejected ({status}): {message}")]
	Rejected { status: u16, message: String },
}

impl ServiceError {
	/// True when the service was never reached, as opposed to reached and refusing
	pub fn is_transport(&self) -> bool { matches!(self, Self::Transport(_)) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	#[error("Failed to load notes: {0}")]
	Load(#[source] ServiceError),

	#[error("Failed to create note: {0}")]
	Create(#[source] ServiceError),

	#[error("Failed to update note: {0}")]
	Update(#[source] ServiceError),

	#[error("Failed to delete note: {0}")]
	Delete(#[source] ServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
	#[error("A note dialog is already open")]
	AlreadyOpen,

	#[error("No note dialog is open")]
	NotOpen,

	#[error("Note '{0}' is not in the collection")]
	UnknownNote(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
	#[error(transparent)]
	Store(#[from] StoreError),

	#[error(transparent)]
	Session(#[from] SessionError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error("Invalid config at {path:?}: {source}")]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}
