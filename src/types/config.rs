use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct Config {
	pub service:   ServiceConfig,
	pub telemetry: TelemetryConfig,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct ServiceConfig {
	pub base_url:   String,
	pub notes_path: String,
}

impl Default for ServiceConfig {
	fn default() -> Self {
		Self { base_url: "http://localhost:5000".into(), notes_path: "/api/notes".into() }
	}
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct TelemetryConfig {
	// An `EnvFilter` directive, `RUST_LOG` wins when set
	pub filter:      String,
	pub otel_stdout: bool,
}

impl Default for TelemetryConfig {
	fn default() -> Self { Self { filter: "info".into(), otel_stdout: false } }
}
