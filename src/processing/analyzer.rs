//! Analysis orchestrator: sequences normalization, skill extraction,
//! similarity scoring, and formatting checks into one report

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::processing::catalog::SkillCatalog;
use crate::processing::extractor::SkillExtractor;
use crate::processing::format_evaluator::{FormatEvaluation, FormatEvaluator};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::scorer::SimilarityScorer;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const MISSING_JOB_DESCRIPTION_WARNING: &str = "⚠️ Please provide a job description.";
pub const UNREADABLE_RESUME_WARNING: &str =
    "⚠️ Could not process the resume. Please check the file and try again.";

/// Final analysis output. Created once per call, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Blended content + skill similarity, two decimals + "%".
    pub ats_score: String,
    /// Additive structural score (sections, bullets, length).
    pub resume_score: u32,
    /// Per-category summary of skills found in both texts.
    pub matched_skills: String,
    /// Per-category summary of job-description skills the resume lacks.
    pub missing_skills: String,
    /// Ordered, human-readable recommendations.
    pub suggestions: Vec<String>,
    /// Named formatting verdicts plus the aggregate percentage.
    pub format_evaluation: FormatEvaluation,
}

impl AnalysisReport {
    fn zeroed(warning: String, format_evaluation: FormatEvaluation) -> Self {
        Self {
            ats_score: "0.00%".to_string(),
            resume_score: 0,
            matched_skills: String::new(),
            missing_skills: String::new(),
            suggestions: vec![warning],
            format_evaluation,
        }
    }

    /// Report for a blank job description.
    pub fn missing_job_description() -> Self {
        Self::zeroed(
            MISSING_JOB_DESCRIPTION_WARNING.to_string(),
            FormatEvaluation::default(),
        )
    }

    /// Report for a resume that could not be read or extracted.
    pub fn unreadable_resume() -> Self {
        Self::zeroed(
            UNREADABLE_RESUME_WARNING.to_string(),
            FormatEvaluation::default(),
        )
    }
}

/// Stateless engine scoring one (resume, job description) pair per call.
/// Concurrent analyses share nothing mutable; the TF-IDF vocabulary is
/// rebuilt inside every call.
pub struct AnalysisEngine {
    catalog: SkillCatalog,
    scoring: ScoringConfig,
    normalizer: TextNormalizer,
    format_evaluator: FormatEvaluator,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        let catalog = match &config.skills {
            Some(skills) => SkillCatalog::from_map(
                skills
                    .iter()
                    .map(|(category, tokens)| (category.clone(), tokens.clone())),
            ),
            None => SkillCatalog::default(),
        };
        Self::with_catalog(config.scoring.clone(), catalog)
    }

    pub fn with_catalog(scoring: ScoringConfig, catalog: SkillCatalog) -> Self {
        Self {
            catalog,
            scoring,
            normalizer: TextNormalizer::new(),
            format_evaluator: FormatEvaluator::new(),
        }
    }

    /// Analyze a resume against a job description. Never fails: input and
    /// computation errors become a zeroed report carrying a user-facing
    /// warning.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        if job_description.trim().is_empty() {
            warn!("Job description is blank, returning warning report");
            return AnalysisReport::missing_job_description();
        }

        match self.run(resume_text, job_description) {
            Ok(report) => report,
            Err(e) => {
                warn!("Analysis failed: {}", e);
                AnalysisReport::zeroed(
                    format!("⚠️ An error occurred: {}", e),
                    FormatEvaluation::error(),
                )
            }
        }
    }

    fn run(&self, resume_text: &str, job_description: &str) -> Result<AnalysisReport> {
        let resume_normalized = self.normalizer.normalize(resume_text);
        let jd_normalized = self.normalizer.normalize(job_description);

        let extractor = SkillExtractor::new(&self.catalog);
        let resume_skills = extractor.extract(&resume_normalized);
        let jd_skills = extractor.extract(&jd_normalized);
        debug!(
            "Extracted {} resume skills, {} job description skills",
            resume_skills.total(),
            jd_skills.total()
        );

        let scorer = SimilarityScorer::new(&self.scoring);
        let similarity = scorer.score(
            &resume_normalized,
            &jd_normalized,
            &resume_skills,
            &jd_skills,
        );

        let resume_score = self.format_evaluator.structural_score(resume_text);
        let format_evaluation = self.format_evaluator.evaluate(resume_text);
        let formatting_percentage = format_evaluation.percentage().unwrap_or(0.0);

        let matched_skills = resume_skills.matched(&jd_skills);
        let skill_gaps = jd_skills.gaps(&resume_skills);

        let mut suggestions = Vec::new();
        if similarity < 0.5 {
            suggestions.push(
                "💡 Consider tailoring your resume more specifically to this role".to_string(),
            );
        } else if similarity < 0.7 {
            suggestions.push(
                "💡 Your resume matches many requirements but could be optimized further"
                    .to_string(),
            );
        }

        for (category, missing) in skill_gaps.iter() {
            let joined: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
            suggestions.push(format!(
                "📚 Consider highlighting or adding these {} skills: {}",
                category,
                joined.join(", ")
            ));
        }

        if formatting_percentage > 50.0 {
            suggestions.push("✅ Your resume has good formatting!".to_string());
        }

        if suggestions.is_empty() {
            suggestions.push(
                "✅ Your resume appears to be very well-matched to the job requirements"
                    .to_string(),
            );
        }

        Ok(AnalysisReport {
            ats_score: format!("{:.2}%", similarity * 100.0),
            resume_score,
            matched_skills: matched_skills.summary(),
            missing_skills: skill_gaps.summary(),
            suggestions,
            format_evaluation,
        })
    }
}
