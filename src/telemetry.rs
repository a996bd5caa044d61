use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::config::TelemetryConfig;

/// Keeps the span exporter alive; flushes it when dropped
pub struct TelemetryGuard {
	provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
	fn drop(&mut self) {
		if let Some(provider) = self.provider.take() {
			if let Err(e) = provider.shutdown() {
				eprintln!("Failed to shut down tracer provider: {e}");
			}
		}
	}
}

fn filter(config: &TelemetryConfig) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
			eprintln!("Invalid log filter '{}': {e}, falling back to info", config.filter);
			EnvFilter::new("info")
		})
	})
}

/// Installs the global subscriber. Call once, at startup.
pub fn init(config: &TelemetryConfig) -> TelemetryGuard {
	let fmt = tracing_subscriber::fmt::layer().with_timer(ChronoLocal::rfc_3339()).with_target(false);

	let provider = config.otel_stdout.then(|| {
		SdkTracerProvider::builder()
			.with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
			.build()
	});
	let otel = provider
		.as_ref()
		.map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer("notesync")));

	let installed = tracing_subscriber::registry().with(filter(config)).with(fmt).with(otel).try_init();

	match installed {
		Ok(()) => info!(otel_stdout = config.otel_stdout, "Telemetry initialized"),
		Err(e) => warn!("Telemetry already initialized: {}", e),
	}

	TelemetryGuard { provider }
}
