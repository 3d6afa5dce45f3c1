//! Output formatters: console, JSON, and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::AnalysisReport;
use colored::Colorize;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colored score bands
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize_score(&self, score: &str) -> String {
        if !self.use_colors {
            return score.to_string();
        }

        let value: f32 = score.strip_suffix('%').and_then(|s| s.parse().ok()).unwrap_or(0.0);
        let colored_score = if value >= 70.0 {
            score.green()
        } else if value >= 50.0 {
            score.yellow()
        } else {
            score.red()
        };
        colored_score.bold().to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("📄 Resume Analysis\n\n");
        out.push_str(&format!(
            "ATS Score: {}\n",
            self.colorize_score(&report.ats_score)
        ));
        out.push_str(&format!("Resume Score: {}\n", report.resume_score));

        if self.detailed && !report.matched_skills.is_empty() {
            out.push_str(&format!("\n✅ Matched Skills: {}\n", report.matched_skills));
        }
        if !report.missing_skills.is_empty() {
            out.push_str(&format!("\n🚧 Missing Skills: {}\n", report.missing_skills));
        }

        out.push_str("\n💡 Suggestions:\n");
        for suggestion in &report.suggestions {
            out.push_str(&format!("  • {}\n", suggestion));
        }

        let format = &report.format_evaluation;
        out.push_str("\n🖋  Formatting:\n");
        out.push_str(&format!("  • Font Consistency: {}\n", format.font_consistency));
        out.push_str(&format!("  • Headings: {}\n", format.headings));
        out.push_str(&format!("  • Bullet Points: {}\n", format.bullet_points));
        out.push_str(&format!(
            "  • Whitespace Management: {}\n",
            format.whitespace_management
        ));
        out.push_str(&format!(
            "  • Formatting Score: {}\n",
            format.formatting_score
        ));

        Ok(out)
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Analysis\n\n");
        out.push_str(&format!("**ATS Score:** {}\n\n", report.ats_score));
        out.push_str(&format!("**Resume Score:** {}\n\n", report.resume_score));

        if !report.matched_skills.is_empty() {
            out.push_str(&format!("**Matched Skills:** {}\n\n", report.matched_skills));
        }
        if !report.missing_skills.is_empty() {
            out.push_str(&format!("**Missing Skills:** {}\n\n", report.missing_skills));
        }

        out.push_str("## Suggestions\n\n");
        for suggestion in &report.suggestions {
            out.push_str(&format!("- {}\n", suggestion));
        }

        let format = &report.format_evaluation;
        out.push_str("\n## Formatting\n\n");
        out.push_str("| Check | Verdict |\n|---|---|\n");
        out.push_str(&format!("| Font Consistency | {} |\n", format.font_consistency));
        out.push_str(&format!("| Headings | {} |\n", format.headings));
        out.push_str(&format!("| Bullet Points | {} |\n", format.bullet_points));
        out.push_str(&format!(
            "| Whitespace Management | {} |\n",
            format.whitespace_management
        ));
        out.push_str(&format!(
            "| Formatting Score | {} |\n",
            format.formatting_score
        ));

        Ok(out)
    }
}

/// Pick a formatter for the requested output format.
pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisReport;

    fn sample_report() -> AnalysisReport {
        let engine = crate::processing::analyzer::AnalysisEngine::new(
            &crate::config::Config::default(),
        );
        engine.analyze(
            "Experience with Python and Docker\n• built services",
            "Need Python, Docker, Kubernetes",
        )
    }

    #[test]
    fn test_console_format_contains_scores() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("ATS Score:"));
        assert!(output.contains("Resume Score:"));
        assert!(output.contains("kubernetes"));
        assert!(output.contains("Formatting Score:"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        let parsed: AnalysisReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.ats_score, sample_report().ats_score);
    }

    #[test]
    fn test_markdown_format_structure() {
        let formatter = MarkdownFormatter;
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Resume Analysis"));
        assert!(output.contains("## Suggestions"));
        assert!(output.contains("| Check | Verdict |"));
    }
}
