use crate::domain::model::SnippetReport;
use crate::utils::error::{IdiomError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = IdiomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(IdiomError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn render(reports: &[SnippetReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
        OutputFormat::Csv => render_csv(reports),
    }
}

/// One `# name` header per snippet, then its display lines.
pub fn render_text(reports: &[SnippetReport]) -> String {
    let mut out = String::new();

    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("# {}\n", report.snippet));
        for line in &report.lines {
            out.push_str(&line.display);
            out.push('\n');
        }
    }

    out
}

pub fn render_json(reports: &[SnippetReport]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(reports)?;
    json.push('\n');
    Ok(json)
}

/// `snippet,label,value` rows; `value` is compact JSON.
pub fn render_csv(reports: &[SnippetReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["snippet", "label", "value"])?;

    for report in reports {
        for line in &report.lines {
            let value = serde_json::to_string(&line.value)?;
            writer.write_record([report.snippet.as_str(), line.label.as_str(), value.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| IdiomError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| IdiomError::IoError(std::io::Error::other(e)))
}
