use tracing::{debug, instrument, warn};

use crate::{error::SessionError, types::note::{Draft, Note, NoteId}};

/// The add/edit dialog. Only one can be open at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum DialogSession {
	#[default]
	Closed,
	Creating,
	/// Holds the note as it was when the dialog opened
	Editing(Note),
}

impl DialogSession {
	pub fn is_open(&self) -> bool { !matches!(self, Self::Closed) }

	pub fn editing(&self) -> Option<&Note> {
		match self {
			Self::Editing(note) => Some(note),
			_ => None,
		}
	}

	/// Form contents the dialog should start with
	pub fn initial_draft(&self) -> Option<Draft> {
		match self {
			Self::Closed => None,
			Self::Creating => Some(Draft::default()),
			Self::Editing(note) => Some(Draft::from(note)),
		}
	}
}

/// What a submitted dialog asks the store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	Create(Draft),
	Update(NoteId, Draft),
}

#[derive(Debug, Default)]
pub struct DialogSessionController {
	session: DialogSession,
}

impl DialogSessionController {
	pub fn new() -> Self { Self::default() }

	pub fn session(&self) -> &DialogSession { &self.session }

	fn ensure_closed(&self) -> Result<(), SessionError> {
		if self.session.is_open() {
			warn!("Ignoring request, a dialog is already open: {:?}", self.session);
			return Err(SessionError::AlreadyOpen);
		}
		Ok(())
	}

	#[instrument(skip(self))]
	pub fn open_create(&mut self) -> Result<(), SessionError> {
		self.ensure_closed()?;
		debug!("Opening create dialog");
		self.session = DialogSession::Creating;
		Ok(())
	}

	#[instrument(skip(self, note), fields(id = %note.id))]
	pub fn open_edit(&mut self, note: &Note) -> Result<(), SessionError> {
		self.ensure_closed()?;
		debug!("Opening edit dialog");
		self.session = DialogSession::Editing(note.clone());
		Ok(())
	}

	/// Turns the user's form input into the store call for the open session.
	/// The session stays open until `close` is called.
	pub fn submission(&self, draft: Draft) -> Result<Submission, SessionError> {
		match &self.session {
			DialogSession::Closed => Err(SessionError::NotOpen),
			DialogSession::Creating => Ok(Submission::Create(draft)),
			DialogSession::Editing(note) => Ok(Submission::Update(note.id.clone(), draft)),
		}
	}

	pub fn close(&mut self) {
		if self.session.is_open() {
			debug!("Closing dialog");
		}
		self.session = DialogSession::Closed;
	}
}
