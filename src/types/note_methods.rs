use chrono::{DateTime, Utc};

use crate::types::note::{Draft, Note};

/// Mirrors the `en-US` medium date, short time layout: "Jan 5, 2024, 3:04 PM"
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

pub fn format_timestamp(at: &DateTime<Utc>) -> String { at.format(DISPLAY_FORMAT).to_string() }

impl Note {
	/// A freshly created note carries identical timestamps
	pub fn was_updated(&self) -> bool { self.created_at < self.updated_at }

	pub fn timestamp_label(&self) -> String {
		if self.was_updated() {
			format!("Updated: {}", format_timestamp(&self.updated_at))
		} else {
			format!("Created: {}", format_timestamp(&self.created_at))
		}
	}

	/// Builds the note that results from applying `draft` at `at`
	pub fn revised(&self, draft: &Draft, at: DateTime<Utc>) -> Self {
		Self {
			id:         self.id.clone(),
			title:      draft.title.clone(),
			body:       draft.body.clone(),
			created_at: self.created_at,
			updated_at: at.max(self.created_at),
		}
	}
}

impl From<&Note> for Draft {
	fn from(note: &Note) -> Self { Self { title: note.title.clone(), body: note.body.clone() } }
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;
	use crate::types::note::NoteId;

	fn note_at(created: DateTime<Utc>, updated: DateTime<Utc>) -> Note {
		Note {
			id:         NoteId::new("n1"),
			title:      "Groceries".into(),
			body:       "eggs".into(),
			created_at: created,
			updated_at: updated,
		}
	}

	#[test]
	fn fresh_note_shows_created_label() {
		let at = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
		let note = note_at(at, at);

		assert!(!note.was_updated());
		assert_eq!(note.timestamp_label(), "Created: Jan 5, 2024, 3:04 PM");
	}

	#[test]
	fn edited_note_shows_updated_label() {
		let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
		let updated = Utc.with_ymd_and_hms(2024, 3, 12, 0, 30, 0).unwrap();
		let note = note_at(created, updated);

		assert!(note.was_updated());
		assert_eq!(note.timestamp_label(), "Updated: Mar 12, 2024, 12:30 AM");
	}

	#[test]
	fn revision_never_predates_creation() {
		let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
		let note = note_at(created, created);
		let earlier = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

		let revised = note.revised(&Draft::new("B", ""), earlier);
		assert_eq!(revised.updated_at, created);
		assert_eq!(revised.id, note.id);
		assert_eq!(revised.title, "B");
	}

	#[test]
	fn wire_format_uses_service_field_names() {
		let json = r#"{
			"_id": "65a1",
			"title": "A",
			"text": "x",
			"createdAt": "2024-01-05T15:04:00.000Z",
			"updatedAt": "2024-01-05T15:04:00.000Z"
		}"#;

		let note: Note = serde_json::from_str(json).unwrap();
		assert_eq!(note.id.as_str(), "65a1");
		assert_eq!(note.body, "x");

		let draft = serde_json::to_value(Draft::from(&note)).unwrap();
		assert_eq!(draft, serde_json::json!({ "title": "A", "text": "x" }));
	}
}
