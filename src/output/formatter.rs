//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::MatchReport;
use colored::Colorize;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with colored score presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn score_line(&self, label: &str, score: f32) -> String {
        let value = format!("{:.1}%", score);
        let value = if !self.use_colors {
            value
        } else if score >= 70.0 {
            value.green().to_string()
        } else if score >= 40.0 {
            value.yellow().to_string()
        } else {
            value.red().to_string()
        };
        format!("  {:<24} {}", label, value)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "\nOverall match: {:.1}% ({})\n\n",
            report.final_score,
            report.verdict()
        ));
        out.push_str(&self.score_line("Exact keyword match:", report.keyword_score));
        out.push('\n');
        out.push_str(&self.score_line("Semantic similarity:", report.semantic_score));
        out.push('\n');

        out.push_str(&format!(
            "\nMatched keywords: {} of {}\n",
            report.matched_keywords.len(),
            report.jd_keyword_count
        ));

        if report.missing_keywords.is_empty() {
            out.push_str("No critical keywords missing.\n");
        } else {
            out.push_str(&format!(
                "Missing keywords ({}): {}\n",
                report.missing_keywords.len(),
                report.missing_keywords.join(", ")
            ));
        }

        if self.detailed {
            out.push_str(&format!(
                "\nMatched: {}\n",
                if report.matched_keywords.is_empty() {
                    "(none)".to_string()
                } else {
                    report.matched_keywords.join(", ")
                }
            ));
            out.push_str(&format!(
                "Resume keywords: {} | JD keywords: {}\n",
                report.resume_keyword_count, report.jd_keyword_count
            ));
            out.push_str(&format!(
                "Model: {} | Processed in {} ms\n",
                report.metadata.embedding_model, report.metadata.processing_time_ms
            ));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Match Report\n\n");
        out.push_str(&format!(
            "**Overall match: {:.1}%** — {}\n\n",
            report.final_score,
            report.verdict()
        ));
        out.push_str("| Score | Value |\n|---|---|\n");
        out.push_str(&format!(
            "| Exact keyword match | {:.1}% |\n",
            report.keyword_score
        ));
        out.push_str(&format!(
            "| Semantic similarity | {:.1}% |\n\n",
            report.semantic_score
        ));

        out.push_str("## Matched keywords\n\n");
        if report.matched_keywords.is_empty() {
            out.push_str("_None_\n\n");
        } else {
            for keyword in &report.matched_keywords {
                out.push_str(&format!("- {}\n", keyword));
            }
            out.push('\n');
        }

        out.push_str("## Missing keywords\n\n");
        if report.missing_keywords.is_empty() {
            out.push_str("_None — every job-description keyword is covered._\n");
        } else {
            for keyword in &report.missing_keywords {
                out.push_str(&format!("- {}\n", keyword));
            }
        }

        out.push_str(&format!(
            "\n---\nGenerated {} · model {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.embedding_model
        ));

        Ok(out)
    }
}

/// Pick a formatter for the requested output format
pub fn format_report(
    report: &MatchReport,
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(use_colors, detailed).format_report(report),
        OutputFormat::Json => JsonFormatter::new(true).format_report(report),
        OutputFormat::Markdown => MarkdownFormatter.format_report(report),
    }
}
