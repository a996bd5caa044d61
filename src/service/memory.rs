//! An in-process note service. Backs the demo binary's `--memory` mode and the
//! test suites; individual calls can be made to fail on demand.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::{error::ServiceError, service::NoteService, types::note::{Draft, Note, NoteId}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	List,
	Create,
	Update,
	Delete,
}

#[derive(Debug)]
struct State {
	notes:    Vec<Note>,
	clock:    DateTime<Utc>,
	failures: HashMap<Operation, ServiceError>,
	calls:    HashMap<Operation, usize>,
}

impl State {
	/// Each mutation advances the clock by a second so timestamps stay ordered
	fn tick(&mut self) -> DateTime<Utc> {
		self.clock += Duration::seconds(1);
		self.clock
	}

	fn enter(&mut self, op: Operation) -> Result<(), ServiceError> {
		*self.calls.entry(op).or_default() += 1;
		match self.failures.remove(&op) {
			Some(err) => {
				warn!("Injected failure for {:?}: {}", op, err);
				Err(err)
			}
			None => Ok(()),
		}
	}
}

#[derive(Debug)]
pub struct MemoryNoteService {
	state: Mutex<State>,
}

impl Default for MemoryNoteService {
	fn default() -> Self { Self::starting_at(DateTime::<Utc>::UNIX_EPOCH) }
}

impl MemoryNoteService {
	pub fn new() -> Self { Self::default() }

	pub fn starting_at(clock: DateTime<Utc>) -> Self {
		Self {
			state: Mutex::new(State {
				notes: Vec::new(),
				clock,
				failures: HashMap::new(),
				calls: HashMap::new(),
			}),
		}
	}

	/// Inserts a note directly, bypassing failure injection
	pub async fn seed(&self, draft: Draft) -> Note {
		let mut state = self.state.lock().await;
		let note = new_note(&draft, state.tick());
		state.notes.push(note.clone());
		note
	}

	/// Makes the next call of `op` fail with `err`
	pub async fn fail_next(&self, op: Operation, err: ServiceError) {
		self.state.lock().await.failures.insert(op, err);
	}

	/// Removes a note behind the client's back, as another client would
	pub async fn remove_externally(&self, id: &NoteId) -> bool {
		let mut state = self.state.lock().await;
		let before = state.notes.len();
		state.notes.retain(|note| &note.id != id);
		state.notes.len() != before
	}

	pub async fn snapshot(&self) -> Vec<Note> { self.state.lock().await.notes.clone() }

	pub async fn calls(&self, op: Operation) -> usize {
		self.state.lock().await.calls.get(&op).copied().unwrap_or_default()
	}
}

fn new_note(draft: &Draft, at: DateTime<Utc>) -> Note {
	Note {
		id:         NoteId::new(Uuid::new_v4().simple().to_string()),
		title:      draft.title.clone(),
		body:       draft.body.clone(),
		created_at: at,
		updated_at: at,
	}
}

#[async_trait]
impl NoteService for MemoryNoteService {
	#[instrument(skip(self))]
	async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
		let mut state = self.state.lock().await;
		state.enter(Operation::List)?;
		debug!("Listing {} notes", state.notes.len());
		Ok(state.notes.clone())
	}

	#[instrument(skip(self, draft))]
	async fn create_note(&self, draft: &Draft) -> Result<Note, ServiceError> {
		let mut state = self.state.lock().await;
		state.enter(Operation::Create)?;
		let note = new_note(draft, state.tick());
		state.notes.push(note.clone());
		Ok(note)
	}

	#[instrument(skip(self, draft))]
	async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ServiceError> {
		let mut state = self.state.lock().await;
		state.enter(Operation::Update)?;
		let at = state.tick();
		let slot = state
			.notes
			.iter_mut()
			.find(|note| &note.id == id)
			.ok_or_else(|| ServiceError::NotFound(id.clone()))?;
		*slot = slot.revised(draft, at);
		Ok(slot.clone())
	}

	#[instrument(skip(self))]
	async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError> {
		let mut state = self.state.lock().await;
		state.enter(Operation::Delete)?;
		let position = state
			.notes
			.iter()
			.position(|note| &note.id == id)
			.ok_or_else(|| ServiceError::NotFound(id.clone()))?;
		state.notes.remove(position);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn update_refreshes_only_updated_at() {
		let service = MemoryNoteService::new();
		let note = service.seed(Draft::new("A", "x")).await;

		let updated = service.update_note(&note.id, &Draft::new("B", "y")).await.unwrap();
		assert_eq!(updated.id, note.id);
		assert_eq!(updated.created_at, note.created_at);
		assert!(updated.updated_at > note.updated_at);
	}

	#[tokio::test]
	async fn deleting_twice_reports_not_found() {
		let service = MemoryNoteService::new();
		let note = service.seed(Draft::new("A", "x")).await;

		service.delete_note(&note.id).await.unwrap();
		assert_eq!(service.delete_note(&note.id).await, Err(ServiceError::NotFound(note.id)));
	}

	#[tokio::test]
	async fn injected_failure_applies_once() {
		let service = MemoryNoteService::new();
		service.fail_next(Operation::List, ServiceError::Transport("offline".into())).await;

		assert!(service.list_notes().await.is_err());
		assert!(service.list_notes().await.is_ok());
		assert_eq!(service.calls(Operation::List).await, 2);
	}
}
