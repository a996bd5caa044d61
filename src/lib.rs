use tracing::{info, instrument};

use crate::view::RenderPlan;

pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod service;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod types;
pub mod view;

pub use app::NotesApp;
pub use error::{AppError, ServiceError, SessionError, StoreError};
pub use service::NoteService;
pub use session::DialogSession;
pub use types::note::{Draft, Note, NoteId};

#[instrument(skip(plan))]
pub fn print_render_debug(plan: &RenderPlan) {
	for card in &plan.cards {
		info!("[{}] {} : {:?} ({})", card.key, card.title, card.body, card.footer);
	}
	if let Some(modal) = &plan.modal {
		info!("Dialog: {} {:?}", modal.heading, modal.draft);
	}
}
