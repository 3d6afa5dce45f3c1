//! Formatting heuristics evaluated against the raw resume text

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Sections worth +10 structural points each when present.
const STRUCTURAL_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
];

/// Headings searched for by the formatting check.
const HEADING_SECTIONS: &[&str] = &["education", "experience", "skills", "projects", "summary"];

/// Verdicts of the four formatting checks plus the aggregate percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEvaluation {
    pub font_consistency: String,
    pub headings: String,
    pub bullet_points: String,
    pub whitespace_management: String,
    pub formatting_score: String,
}

impl FormatEvaluation {
    /// Placeholder used when evaluation never ran.
    pub fn error() -> Self {
        Self {
            font_consistency: "Error".to_string(),
            headings: "Error".to_string(),
            bullet_points: "Error".to_string(),
            whitespace_management: "Error".to_string(),
            formatting_score: "Error".to_string(),
        }
    }

    /// Aggregate percentage as a number; None for the error placeholder.
    pub fn percentage(&self) -> Option<f32> {
        self.formatting_score.strip_suffix('%')?.parse().ok()
    }
}

pub struct FormatEvaluator {
    font_noise_regex: Regex,
    bullet_regex: Regex,
    blank_line_regex: Regex,
    heading_regexes: Vec<(&'static str, Regex)>,
}

impl Default for FormatEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatEvaluator {
    pub fn new() -> Self {
        let font_noise_regex = Regex::new(r"[^\w\s,.()-]").expect("Invalid font noise regex");
        let bullet_regex = Regex::new(r"[-•*]\s").expect("Invalid bullet regex");
        let blank_line_regex = Regex::new(r"\n\s*\n").expect("Invalid blank line regex");

        let heading_regexes = HEADING_SECTIONS
            .iter()
            .map(|section| {
                let pattern = format!(r"(?i)\b{}\b", section);
                (*section, Regex::new(&pattern).expect("Invalid heading regex"))
            })
            .collect();

        Self {
            font_noise_regex,
            bullet_regex,
            blank_line_regex,
            heading_regexes,
        }
    }

    /// Run the four formatting checks against raw (non-normalized) text.
    pub fn evaluate(&self, resume_text: &str) -> FormatEvaluation {
        // Character noise left by PDF extraction correlates with
        // inconsistent source formatting; a real font check is impossible
        // on plain text.
        let font_issues = self.font_noise_regex.find_iter(resume_text).count();
        let font_consistency = if font_issues < 5 {
            "Good".to_string()
        } else {
            "Inconsistent fonts detected".to_string()
        };

        let found_sections: Vec<&str> = self
            .heading_regexes
            .iter()
            .filter(|(_, regex)| regex.is_match(resume_text))
            .map(|(section, _)| *section)
            .collect();
        let headings = if found_sections.is_empty() {
            "No standard headings detected".to_string()
        } else {
            format!("Sections found: {}", found_sections.join(", "))
        };

        let bullet_count = self.bullet_regex.find_iter(resume_text).count();
        let bullet_points = if bullet_count > 2 {
            "Used properly".to_string()
        } else {
            "Few or no bullet points found".to_string()
        };

        let blank_runs = self.blank_line_regex.find_iter(resume_text).count();
        let whitespace_management = if blank_runs < 5 {
            "Proper spacing".to_string()
        } else {
            "Excessive blank spaces detected".to_string()
        };

        let verdicts = [
            &font_consistency,
            &headings,
            &bullet_points,
            &whitespace_management,
        ];
        let passing = verdicts
            .iter()
            .filter(|v| v.contains("Good") || v.contains("Used properly"))
            .count();
        let formatting_score = format!("{:.2}%", passing as f32 / verdicts.len() as f32 * 100.0);

        FormatEvaluation {
            font_consistency,
            headings,
            bullet_points,
            whitespace_management,
            formatting_score,
        }
    }

    /// Additive structural score: +10 per tracked section keyword present
    /// as a lowercase substring, +10 when any bullet character appears,
    /// +10 when the text runs past 300 words. Not a percentage.
    pub fn structural_score(&self, resume_text: &str) -> u32 {
        let mut score = 0;

        for section in STRUCTURAL_SECTIONS {
            if resume_text.contains(section) {
                score += 10;
            }
        }

        if resume_text.contains('•') || resume_text.contains('-') {
            score += 10;
        }

        if resume_text.unicode_words().count() > 300 {
            score += 10;
        }

        score
    }
}
