//! Output format selection for command results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use navcomp_lib::RenderMode;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text tables.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON of the result summary.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> Option<RenderMode> {
        match self {
            OutputFormat::Text => Some(RenderMode::PlainText),
            OutputFormat::Rich => Some(RenderMode::RichText),
            OutputFormat::Json => None,
        }
    }

    /// Turn a summary into the text to print.
    pub fn format<T, F>(self, summary: &T, render: F) -> Result<String>
    where
        T: Serialize,
        F: FnOnce(&T, RenderMode) -> String,
    {
        match self.render_mode() {
            Some(mode) => Ok(render(summary, mode)),
            None => {
                let mut json =
                    serde_json::to_string_pretty(summary).context("failed to encode JSON output")?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
    }

    #[test]
    fn json_bypasses_renderer() {
        let out = OutputFormat::Json
            .format(&Sample { name: "Earth" }, |_, _| unreachable!())
            .expect("json");
        assert!(out.contains("\"name\": \"Earth\""));
    }

    #[test]
    fn text_modes_use_renderer() {
        let sample = Sample { name: "Earth" };
        let plain = OutputFormat::Text
            .format(&sample, |s, mode| format!("{}:{:?}", s.name, mode))
            .expect("text");
        assert_eq!(plain, "Earth:PlainText");
        let rich = OutputFormat::Rich
            .format(&sample, |_, mode| format!("{mode:?}"))
            .expect("rich");
        assert_eq!(rich, "RichText");
    }
}
