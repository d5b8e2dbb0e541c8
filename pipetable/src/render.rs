//! Output formatting for the CLI: plain text tables or JSON.

use std::str::FromStr;

use pipetablelib::RenderedTable;

/// How rendered tables are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pipe-delimited text, tables separated by a blank line
    #[default]
    Text,
    /// Pretty-printed JSON array of rendered tables
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Format all tables for the given output mode
pub fn render_output(tables: &[RenderedTable], mode: OutputMode) -> Result<String, anyhow::Error> {
    match mode {
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(tables)?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Text => Ok(tables
            .iter()
            .map(|table| table.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
