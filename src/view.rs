//! Derives what to draw from the collection and the dialog state. No I/O.

use crate::{session::DialogSession, types::note::{Draft, Note, NoteId}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
	pub key:    NoteId,
	pub title:  String,
	pub body:   String,
	pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
	pub heading: &'static str,
	pub draft:   Draft,
	/// The note being edited, `None` for a new note
	pub editing: Option<NoteId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
	pub cards: Vec<NoteCard>,
	pub modal: Option<Modal>,
}

impl From<&Note> for NoteCard {
	fn from(note: &Note) -> Self {
		Self {
			key:    note.id.clone(),
			title:  note.title.clone(),
			body:   note.body.clone(),
			footer: note.timestamp_label(),
		}
	}
}

pub fn render(notes: &[Note], session: &DialogSession) -> RenderPlan {
	let cards = notes.iter().map(NoteCard::from).collect();

	let editing = session.editing();
	let modal = session.initial_draft().map(|draft| Modal {
		heading: if editing.is_some() { "Edit note" } else { "Add note" },
		draft,
		editing: editing.map(|note| note.id.clone()),
	});

	RenderPlan { cards, modal }
}
