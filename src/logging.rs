// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tracing setup driven by [`LoggingConfig`]
//!
//! Log lines go to stderr, rendered from the configured template so stdout
//! stays free for command output.

use std::fmt::{self, Write as _};

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigResult, LoggingConfig};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fill a log template
///
/// Known placeholders are `{time}`, `{level}`, `{target}` and `{message}`;
/// anything else is copied unchanged.
pub fn render_log_line(template: &str, time: &str, level: &str, target: &str, message: &str) -> String {
    template
        .replace("{time}", time)
        .replace("{level}", level)
        .replace("{target}", target)
        .replace("{message}", message)
}

/// Event formatter using a [`render_log_line`] template
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    template: String,
}

impl TemplateFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        let metadata = event.metadata();
        let time = chrono::Local::now().format(TIME_FORMAT).to_string();
        let line = render_log_line(
            &self.template,
            &time,
            metadata.level().as_str(),
            metadata.target(),
            &message,
        );
        writeln!(writer, "{}", line)
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// leaves the first subscriber in place.
pub fn init(config: &LoggingConfig) -> ConfigResult<()> {
    let level = config.tracing_level()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let layer = tracing_subscriber::fmt::layer()
        .event_format(TemplateFormat::new(config.format.clone()))
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
