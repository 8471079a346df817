//! Logging and optional OpenTelemetry setup.

use agentos_error::{ServerError, ServerErrorKind};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`. With the `otel` feature, spans
/// are also exported to stdout through OpenTelemetry.
pub fn init_logging(format: LogFormat) -> Result<(), ServerError> {
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(env_filter())
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_filter(env_filter())
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(fmt_layer);

    #[cfg(feature = "otel")]
    let subscriber = subscriber.with(otel::layer());

    subscriber
        .try_init()
        .map_err(|e| ServerError::new(ServerErrorKind::Telemetry(e.to_string())))
}

/// Flush pending spans before exit.
pub fn shutdown_telemetry() {
    #[cfg(feature = "otel")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(feature = "otel")]
mod otel {
    use super::env_filter;
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_sdk::{
        Resource,
        trace::{RandomIdGenerator, Sampler, TracerProvider},
    };
    use opentelemetry_stdout::SpanExporter;
    use tracing::Subscriber;
    use tracing_subscriber::{Layer, registry::LookupSpan};

    /// Span exporter layer writing to stdout.
    pub(super) fn layer<S>() -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let provider = TracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(Resource::default())
            .build();
        let tracer = provider.tracer("agentos");
        opentelemetry::global::set_tracer_provider(provider);

        tracing_opentelemetry::layer()
            .with_tracer(tracer)
            .with_filter(env_filter())
    }
}
