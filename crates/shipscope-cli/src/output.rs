use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    pub fn info(&self, message: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("{} {}", style("ℹ").blue().bold(), message);
        }
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Render rows as a table in human mode, or the payload as JSON.
    pub fn table<R: Tabled, P: Serialize>(&self, rows: &[R], payload: &P) {
        match self.format {
            OutputFormat::Human => {
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{table}");
            }
            OutputFormat::Json => self.json(payload),
        }
    }

    pub fn json<P: Serialize>(&self, payload: &P) {
        match serde_json::to_string_pretty(payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => eprintln!("failed to render JSON output: {e}"),
        }
    }
}
