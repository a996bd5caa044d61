//! User-facing notices. Sending never blocks the caller; the presentation layer
//! drains the receiving end at its own pace.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	Info { message: String },
	Error { message: String },
}

impl Notice {
	pub fn message(&self) -> &str {
		match self {
			Self::Info { message } | Self::Error { message } => message,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Notifier {
	tx: UnboundedSender<Notice>,
}

impl Notifier {
	pub fn channel() -> (Self, UnboundedReceiver<Notice>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { tx }, rx)
	}

	pub fn info(&self, message: impl Into<String>) { self.send(Notice::Info { message: message.into() }) }

	pub fn error(&self, message: impl Into<String>) {
		self.send(Notice::Error { message: message.into() })
	}

	fn send(&self, notice: Notice) {
		if let Err(e) = self.tx.send(notice) {
			warn!("Nobody is listening for notices, dropped: {}", e.0.message());
		}
	}
}
