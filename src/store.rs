//! The client-side list of notes and the rules for keeping it in step with the
//! service. Nothing here is committed until the service call it depends on has
//! succeeded, so a failed call always leaves the list as it was.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::{error::StoreError, service::NoteService, types::note::{Draft, Note, NoteId}};

pub struct NoteCollectionStore {
	service: Arc<dyn NoteService>,
	notes:   Vec<Note>,
}

impl NoteCollectionStore {
	pub fn new(service: Arc<dyn NoteService>) -> Self { Self { service, notes: Vec::new() } }

	/// Notes in display order
	pub fn notes(&self) -> &[Note] { &self.notes }

	pub fn get(&self, id: &NoteId) -> Option<&Note> { self.notes.iter().find(|note| &note.id == id) }

	pub fn len(&self) -> usize { self.notes.len() }

	/// Replaces the whole collection with the service's listing
	#[instrument(skip(self))]
	pub async fn load(&mut self) -> Result<(), StoreError> {
		let notes = self.service.list_notes().await.map_err(|e| {
			error!("Loading notes failed: {}", e);
			StoreError::Load(e)
		})?;

		info!("Loaded {} notes", notes.len());
		self.notes = notes;
		Ok(())
	}

	/// Persists a draft and appends the server's record to the end
	#[instrument(skip(self, draft))]
	pub async fn create(&mut self, draft: &Draft) -> Result<&Note, StoreError> {
		let note = self.service.create_note(draft).await.map_err(|e| {
			error!("Creating note failed: {}", e);
			StoreError::Create(e)
		})?;

		info!("Created note {}", note.id);
		if let Some(stale) = self.notes.iter().position(|n| n.id == note.id) {
			// Ids are unique within the collection
			warn!("Service returned id {} which was already listed", note.id);
			self.notes.remove(stale);
		}
		self.notes.push(note);
		Ok(&self.notes[self.notes.len() - 1])
	}

	/// Persists a draft over an existing note and swaps the result in at the same position
	#[instrument(skip(self, draft))]
	pub async fn update(&mut self, id: &NoteId, draft: &Draft) -> Result<&Note, StoreError> {
		let note = self.service.update_note(id, draft).await.map_err(|e| {
			error!("Updating note {} failed: {}", id, e);
			StoreError::Update(e)
		})?;

		info!("Updated note {}", id);
		match self.notes.iter().position(|n| &n.id == id) {
			Some(index) => {
				self.notes[index] = note;
				Ok(&self.notes[index])
			}
			None => {
				warn!("Updated note {} was not in the collection, appending", id);
				self.notes.push(note);
				Ok(&self.notes[self.notes.len() - 1])
			}
		}
	}

	/// Deletes a note, then reloads so the list matches the service exactly
	#[instrument(skip(self))]
	pub async fn delete(&mut self, id: &NoteId) -> Result<(), StoreError> {
		self.service.delete_note(id).await.map_err(|e| {
			error!("Deleting note {} failed: {}", id, e);
			StoreError::Delete(e)
		})?;

		info!("Deleted note {}", id);
		self.notes.retain(|note| &note.id != id);
		self.load().await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ServiceError, service::memory::{MemoryNoteService, Operation}};

	async fn seeded(titles: &[&str]) -> (Arc<MemoryNoteService>, NoteCollectionStore) {
		let service = Arc::new(MemoryNoteService::new());
		for title in titles {
			service.seed(Draft::new(*title, "")).await;
		}
		let mut store = NoteCollectionStore::new(service.clone());
		store.load().await.unwrap();
		(service, store)
	}

	#[tokio::test]
	async fn load_keeps_service_order() {
		let (service, store) = seeded(&["one", "two", "three"]).await;
		assert_eq!(store.notes(), service.snapshot().await.as_slice());
	}

	#[tokio::test]
	async fn failed_load_keeps_previous_collection() {
		let (service, mut store) = seeded(&["one"]).await;
		service.seed(Draft::new("two", "")).await;
		service.fail_next(Operation::List, ServiceError::Unauthorized("expired".into())).await;

		let err = store.load().await.unwrap_err();
		assert!(matches!(err, StoreError::Load(ServiceError::Unauthorized(_))));
		assert_eq!(store.len(), 1);
	}

	#[tokio::test]
	async fn create_appends_server_record() {
		let (_service, mut store) = seeded(&["one"]).await;

		let created = store.create(&Draft::new("two", "body")).await.unwrap().clone();
		assert_eq!(store.len(), 2);
		assert_eq!(store.notes().last(), Some(&created));
		assert_eq!(created.created_at, created.updated_at);
	}

	#[tokio::test]
	async fn update_preserves_position() {
		let (_service, mut store) = seeded(&["one", "two", "three"]).await;
		let target = store.notes()[1].id.clone();

		store.update(&target, &Draft::new("zwei", "changed")).await.unwrap();

		let titles: Vec<_> = store.notes().iter().map(|n| n.title.as_str()).collect();
		assert_eq!(titles, ["one", "zwei", "three"]);
		assert!(store.notes()[1].was_updated());
	}

	#[tokio::test]
	async fn failed_update_changes_nothing() {
		let (service, mut store) = seeded(&["one"]).await;
		let before = store.notes().to_vec();
		let id = before[0].id.clone();
		service.fail_next(Operation::Update, ServiceError::Transport("reset".into())).await;

		assert!(store.update(&id, &Draft::new("x", "y")).await.is_err());
		assert_eq!(store.notes(), before.as_slice());
	}

	#[tokio::test]
	async fn delete_reloads_from_service() {
		let (service, mut store) = seeded(&["one", "two"]).await;
		let first = store.notes()[0].id.clone();
		// Another client added a note meanwhile
		service.seed(Draft::new("three", "")).await;

		store.delete(&first).await.unwrap();

		assert!(store.get(&first).is_none());
		assert_eq!(store.notes(), service.snapshot().await.as_slice());
		assert_eq!(service.calls(Operation::List).await, 2);
	}

	#[tokio::test]
	async fn delete_keeps_removal_when_reload_fails() {
		let (service, mut store) = seeded(&["a", "b"]).await;
		let a = store.notes()[0].id.clone();
		let b = store.notes()[1].clone();
		service.seed(Draft::new("c", "")).await;
		service.fail_next(Operation::List, ServiceError::Transport("reset".into())).await;

		let err = store.delete(&a).await.unwrap_err();

		assert!(matches!(err, StoreError::Load(ServiceError::Transport(_))));
		assert!(store.get(&a).is_none());
		// The note listed meanwhile is not picked up, the survivor is unchanged
		assert_eq!(store.notes(), [b].as_slice());
		assert_eq!(service.snapshot().await.len(), 2);
	}

	#[tokio::test]
	async fn failed_delete_leaves_collection() {
		let (service, mut store) = seeded(&["one", "two"]).await;
		let first = store.notes()[0].id.clone();
		service.fail_next(Operation::Delete, ServiceError::NotFound(first.clone())).await;

		let err = store.delete(&first).await.unwrap_err();
		assert_eq!(err, StoreError::Delete(ServiceError::NotFound(first)));
		assert_eq!(store.len(), 2);
	}
}
