//! Table output formatting for CLI commands
//!
//! Renders resolved configuration and add-on detection results using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::cli::models::{ConfigEntry, ValueSource};
use crate::domain::models::ConfigValue;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format configuration entries as a table
    pub fn format_config(&self, entries: &[ConfigEntry]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for entry in entries {
            let value_cell = match (&entry.value, self.use_colors) {
                (ConfigValue::Null, true) => Cell::new("null").fg(Color::DarkGrey),
                (value, _) => Cell::new(value.to_string()),
            };

            let source_cell = if self.use_colors {
                Cell::new(entry.source.to_string()).fg(source_color(entry.source))
            } else {
                Cell::new(entry.source.to_string())
            };

            table.add_row(vec![Cell::new(&entry.key), value_cell, source_cell]);
        }

        table.to_string()
    }

    /// Format add-on detection results as a two-column table
    pub fn format_addons(&self, rows: &[(&str, String)]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Add-on").add_attribute(Attribute::Bold),
            Cell::new("Detected").add_attribute(Attribute::Bold),
        ]);

        for (name, detected) in rows {
            let detected_cell = if self.use_colors && detected.starts_with("ambiguous") {
                Cell::new(detected).fg(Color::Red)
            } else {
                Cell::new(detected)
            };
            table.add_row(vec![Cell::new(name), detected_cell]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

const fn source_color(source: ValueSource) -> Color {
    match source {
        ValueSource::Application => Color::Yellow,
        ValueSource::Resolved => Color::Green,
    }
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}
