//! Entry point for the presentation layer: owns the collection, the dialog and
//! the notice channel, and turns user intents into store calls.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{error::{AppError, SessionError, StoreError}, notify::Notifier, service::NoteService, session::{DialogSession, DialogSessionController, Submission}, store::NoteCollectionStore, types::note::{Draft, Note, NoteId}, view::{self, RenderPlan}};

pub struct NotesApp {
	store:    NoteCollectionStore,
	dialog:   DialogSessionController,
	notifier: Notifier,
}

impl NotesApp {
	pub fn new(service: Arc<dyn NoteService>, notifier: Notifier) -> Self {
		Self { store: NoteCollectionStore::new(service), dialog: DialogSessionController::new(), notifier }
	}

	pub fn notes(&self) -> &[Note] { self.store.notes() }

	pub fn session(&self) -> &DialogSession { self.dialog.session() }

	pub fn render(&self) -> RenderPlan { view::render(self.store.notes(), self.dialog.session()) }

	/// Reports a store failure to the user before handing it back
	fn surface(&self, err: StoreError) -> AppError {
		self.notifier.error(err.to_string());
		err.into()
	}

	/// Initial load when the view comes up
	#[instrument(skip(self))]
	pub async fn mount(&mut self) -> Result<(), AppError> {
		match self.store.load().await {
			Ok(()) => Ok(()),
			Err(e) => Err(self.surface(e)),
		}
	}

	pub fn request_create(&mut self) -> Result<(), SessionError> { self.dialog.open_create() }

	pub fn request_edit(&mut self, id: &NoteId) -> Result<(), SessionError> {
		let note = self.store.get(id).ok_or_else(|| SessionError::UnknownNote(id.clone()))?;
		self.dialog.open_edit(note)
	}

	#[instrument(skip(self))]
	pub async fn request_delete(&mut self, id: &NoteId) -> Result<(), AppError> {
		match self.store.delete(id).await {
			Ok(()) => {
				self.notifier.info("Note deleted");
				Ok(())
			}
			Err(e) => Err(self.surface(e)),
		}
	}

	/// Saves the open dialog's draft. The dialog closes only once the save went through.
	#[instrument(skip(self, draft))]
	pub async fn submit_dialog(&mut self, draft: Draft) -> Result<&Note, AppError> {
		let result = match self.dialog.submission(draft)? {
			Submission::Create(draft) => self.store.create(&draft).await.map(|note| note.id.clone()),
			Submission::Update(id, draft) => self.store.update(&id, &draft).await.map(|note| note.id.clone()),
		};

		match result {
			Ok(id) => {
				info!("Saved note {}, closing dialog", id);
				self.dialog.close();
				self.notifier.info("Note saved");
				self.store.get(&id).ok_or_else(|| SessionError::UnknownNote(id).into())
			}
			Err(e) => Err(self.surface(e)),
		}
	}

	pub fn dismiss_dialog(&mut self) { self.dialog.close() }
}
