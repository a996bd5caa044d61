use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use eyre::{Result, WrapErr};
use notesync::{Draft, NotesApp, NoteService, config, notify::Notifier, print_render_debug, service::{HttpNoteService, MemoryNoteService}, telemetry};
use tracing::{info, warn};

const DEFAULT_CONFIG: &str = "notesync.toml";

/// Loads the note list and prints it
#[derive(Parser, Debug)]
#[command(name = "notesync")]
#[command(about = "Note collection client")]
struct Cli {
	/// Use an in-process note service instead of the configured one
	#[arg(long)]
	memory: bool,

	/// Config file, defaults are used when it doesn't exist
	#[arg(value_name = "PATH")]
	config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	let cli = Cli::parse();

	let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
	let loaded = config::load_optional(&config_path)
		.wrap_err_with(|| format!("Loading config from {}", config_path.display()))?;
	let defaulted = loaded.is_none();
	let config = loaded.unwrap_or_default();

	let _telemetry = telemetry::init(&config.telemetry);
	if defaulted {
		info!("No config at {}, using defaults", config_path.display());
	}

	let service: Arc<dyn NoteService> = if cli.memory {
		let memory = MemoryNoteService::new();
		memory.seed(Draft::new("Welcome", "Notes created here live until the process exits.")).await;
		Arc::new(memory)
	} else {
		let http = HttpNoteService::new(&config.service);
		info!("Using note service at {}", http.notes_url());
		Arc::new(http)
	};

	let (notifier, mut notices) = Notifier::channel();
	let mut app = NotesApp::new(service, notifier);

	if let Err(e) = app.mount().await {
		warn!("Starting with an empty list: {}", e);
	}

	let plan = app.render();
	print_render_debug(&plan);
	for card in &plan.cards {
		println!("{}\n  {}\n  {}", card.title, card.body, card.footer);
	}

	while let Ok(notice) = notices.try_recv() {
		eprintln!("! {}", notice.message());
	}

	Ok(())
}
