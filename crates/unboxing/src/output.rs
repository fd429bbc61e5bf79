//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats serialize the records as the API sent them, plain
//! emits one id per line.

use std::io::{self, IsTerminal, Write};

use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::warn;

use crate::cli::{ColorMode, OutputFormat};

// ── Color ────────────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a rendered list in the chosen format.
pub fn render_table(format: OutputFormat, table: &unboxing_core::Table) -> String {
    match format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(table.columns.iter().copied());
            for row in &table.rows {
                builder.push_record(row.cells.iter().cloned());
            }
            let mut rendered = builder.build();
            rendered.with(Style::rounded());
            rendered.to_string()
        }
        OutputFormat::Json => render_json(&table.records(), false),
        OutputFormat::JsonCompact => render_json(&table.records(), true),
        OutputFormat::Yaml => render_yaml(&table.records()),
        OutputFormat::Plain => table
            .rows
            .iter()
            .map(|row| row.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item views don't use a table.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// `label: value` lines with labels padded to a common width.
pub fn render_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let fields: Vec<_> = fields.into_iter().collect();
    let width = fields.iter().map(|(label, _)| label.len() + 1).max().unwrap_or(0);
    fields
        .iter()
        .map(|(label, value)| format!("{:width$}  {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| {
        warn!(error = %e, "JSON rendering failed");
        String::new()
    })
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| {
        warn!(error = %e, "YAML rendering failed");
        String::new()
    })
}
