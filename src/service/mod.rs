//! The contract the client consumes from the remote note service. The store
//! only ever talks to a `dyn NoteService`, so the transport can be swapped
//! for the in-process implementation in tests.

use async_trait::async_trait;

use crate::{error::ServiceError, types::note::{Draft, Note, NoteId}};

pub mod http;
pub mod memory;

pub use http::HttpNoteService;
pub use memory::MemoryNoteService;

#[async_trait]
pub trait NoteService: Send + Sync {
	/// Every note the service holds, in the service's order
	async fn list_notes(&self) -> Result<Vec<Note>, ServiceError>;

	/// Persists a draft; the returned note carries the server-assigned id and timestamps
	async fn create_note(&self, draft: &Draft) -> Result<Note, ServiceError>;

	async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ServiceError>;

	async fn delete_note(&self, id: &NoteId) -> Result<(), ServiceError>;
}
