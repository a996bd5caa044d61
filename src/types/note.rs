use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-issued identifier of a note. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
	pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

	pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for NoteId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
	#[serde(rename = "_id")]
	pub id:         NoteId,
	#[serde(default)]
	pub title:      String,
	// The service calls it `text`
	#[serde(rename = "text", default)]
	pub body:       String,
	#[serde(rename = "createdAt")]
	pub created_at: DateTime<Utc>,
	#[serde(rename = "updatedAt")]
	pub updated_at: DateTime<Utc>,
}

/// User input for a note that hasn't been persisted yet
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
	pub title: String,
	#[serde(rename = "text")]
	pub body:  String,
}

impl Draft {
	pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self { title: title.into(), body: body.into() }
	}
}
