//! Listing output for menu action 4, in the format chosen with `--format`.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use tabled::{settings::Style, Table, Tabled};

use congo_core::Item;

/// How `List Items by Description` renders the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// `- <description>: <location>` per line.
    #[default]
    Plain,
    /// Rounded table with id / description / location columns.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown list format '{other}'; expected: plain, table, json"
            )),
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFormat::Plain => write!(f, "plain"),
            ListFormat::Table => write!(f, "table"),
            ListFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Tabled)]
struct ItemTableRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "location")]
    location: String,
}

/// Render `items` (already in description order). Output ends with a newline
/// unless it is empty.
pub fn render(items: &[&Item], format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Plain => Ok(items
            .iter()
            .map(|item| format!("- {}: {}\n", item.description(), item.location()))
            .collect()),
        ListFormat::Table => {
            let rows = items.iter().map(|item| ItemTableRow {
                id: item.id().to_string(),
                description: item.description().to_owned(),
                location: item.location().to_owned(),
            });
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            Ok(format!("{table}\n"))
        }
        ListFormat::Json => {
            let json =
                serde_json::to_string_pretty(items).context("failed to serialize item list")?;
            Ok(format!("{json}\n"))
        }
    }
}
