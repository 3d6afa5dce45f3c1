//! Weighted similarity scoring: TF-IDF cosine blended with skill overlap

use crate::config::ScoringConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::extractor::SkillSet;
use crate::processing::normalizer::NormalizedText;
use std::collections::{HashMap, HashSet};

/// Words excluded from the TF-IDF vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "before", "being", "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "during", "each", "for", "from", "had", "has", "have", "he", "her", "his", "how", "if", "in",
    "into", "is", "it", "its", "just", "more", "most", "must", "no", "not", "of", "on", "only",
    "or", "other", "our", "out", "over", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "under", "until", "up", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "will", "with", "would", "you", "your",
];

/// TF-IDF vectorizer over unigrams and bigrams of a small document corpus.
/// Built fresh per scoring call; no state survives between requests.
struct TfidfVectorizer {
    max_features: usize,
    max_doc_frequency: f32,
}

impl TfidfVectorizer {
    fn new(max_features: usize, max_doc_frequency: f32) -> Self {
        Self {
            max_features,
            max_doc_frequency,
        }
    }

    /// Stopword-filtered unigrams plus adjacent bigrams of the remaining
    /// token stream.
    fn terms(text: &NormalizedText) -> Vec<String> {
        let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
        let tokens: Vec<&str> = text
            .tokens()
            .into_iter()
            .filter(|token| !stop_words.contains(token))
            .collect();

        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        terms.extend(
            tokens
                .windows(2)
                .map(|pair| format!("{} {}", pair[0], pair[1])),
        );
        terms
    }

    /// Build the shared vocabulary and return one L2-normalized TF-IDF
    /// vector per document.
    fn fit_transform(&self, documents: &[&NormalizedText]) -> Result<Vec<Vec<f32>>> {
        let doc_count = documents.len();
        let doc_terms: Vec<Vec<String>> = documents.iter().map(|d| Self::terms(d)).collect();

        let mut term_counts: Vec<HashMap<&str, usize>> = Vec::with_capacity(doc_count);
        for terms in &doc_terms {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for term in terms {
                *counts.entry(term.as_str()).or_insert(0) += 1;
            }
            term_counts.push(counts);
        }

        // Document frequency per term.
        let mut doc_frequencies: HashMap<&str, usize> = HashMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *doc_frequencies.entry(*term).or_insert(0) += 1;
            }
        }

        // Upper document-frequency bound, rounded up so it stays inert for
        // a two-document corpus.
        let max_df_count = (self.max_doc_frequency * doc_count as f32).ceil() as usize;

        let mut totals: HashMap<&str, usize> = HashMap::new();
        for counts in &term_counts {
            for (term, count) in counts {
                *totals.entry(*term).or_insert(0) += *count;
            }
        }

        let mut vocabulary: Vec<(&str, usize)> = totals
            .into_iter()
            .filter(|(term, _)| doc_frequencies[term] <= max_df_count)
            .collect();
        // Most frequent terms first; ties broken alphabetically so the
        // vocabulary is deterministic.
        vocabulary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        vocabulary.truncate(self.max_features);

        if vocabulary.is_empty() {
            return Err(ResumeAnalyzerError::TextProcessing(
                "TF-IDF vocabulary is empty".to_string(),
            ));
        }

        let vectors = term_counts
            .iter()
            .map(|counts| {
                let mut vector: Vec<f32> = vocabulary
                    .iter()
                    .map(|(term, _)| {
                        let tf = *counts.get(term).unwrap_or(&0) as f32;
                        let df = doc_frequencies[term] as f32;
                        let idf =
                            ((1.0 + doc_count as f32) / (1.0 + df)).ln() + 1.0;
                        tf * idf
                    })
                    .collect();

                let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for value in &mut vector {
                        *value /= norm;
                    }
                }
                vector
            })
            .collect();

        Ok(vectors)
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Blends lexical TF-IDF similarity with the skill-overlap ratio and
/// applies the floor/rescale transform.
pub struct SimilarityScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Similarity in [0, 1]. Best effort: vectorization failure (for
    /// example both texts empty after filtering) scores 0.0 instead of
    /// propagating an error.
    pub fn score(
        &self,
        resume: &NormalizedText,
        job: &NormalizedText,
        resume_skills: &SkillSet,
        jd_skills: &SkillSet,
    ) -> f32 {
        let vectorizer = TfidfVectorizer::new(
            self.config.max_vocabulary,
            self.config.max_doc_frequency,
        );

        let content_similarity = match vectorizer.fit_transform(&[resume, job]) {
            Ok(vectors) => cosine_similarity(&vectors[0], &vectors[1]),
            Err(_) => return 0.0,
        };

        let total_jd_skills = jd_skills.total();
        if total_jd_skills == 0 {
            // No skill signal to blend with.
            return content_similarity;
        }

        let matched = resume_skills.matched_count(jd_skills);
        let skill_similarity = matched as f32 / total_jd_skills as f32;

        let blended = self.config.content_weight * content_similarity
            + self.config.skill_weight * skill_similarity;
        let adjusted = blended * self.config.score_scale + self.config.score_floor;

        adjusted.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::catalog::SkillCatalog;
    use crate::processing::extractor::SkillExtractor;
    use crate::processing::normalizer::TextNormalizer;

    fn score_pair(resume: &str, job: &str) -> f32 {
        let config = ScoringConfig::default();
        let catalog = SkillCatalog::default();
        let normalizer = TextNormalizer::new();
        let extractor = SkillExtractor::new(&catalog);

        let resume_text = normalizer.normalize(resume);
        let job_text = normalizer.normalize(job);
        let resume_skills = extractor.extract(&resume_text);
        let jd_skills = extractor.extract(&job_text);

        SimilarityScorer::new(&config).score(&resume_text, &job_text, &resume_skills, &jd_skills)
    }

    fn content_similarity(resume: &str, job: &str) -> f32 {
        let config = ScoringConfig::default();
        let normalizer = TextNormalizer::new();
        let vectorizer =
            TfidfVectorizer::new(config.max_vocabulary, config.max_doc_frequency);
        let vectors = vectorizer
            .fit_transform(&[&normalizer.normalize(resume), &normalizer.normalize(job)])
            .unwrap();
        cosine_similarity(&vectors[0], &vectors[1])
    }

    #[test]
    fn test_identical_text_content_similarity_is_one() {
        let text = "built scalable services in python with docker on aws";
        let content = content_similarity(text, text);
        assert!((content - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_identical_text_score_at_least_floor() {
        let text = "built scalable services in python with docker on aws";
        let score = score_pair(text, text);
        assert!(score >= 0.3);
        assert!(score <= 1.0);
        // full content and skill overlap saturates the scale
        assert!((score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_jd_skills_reduces_to_content_similarity() {
        let resume = "organized community gardening events every weekend";
        let job = "looking for someone to organize gardening events";

        let score = score_pair(resume, job);
        let content = content_similarity(resume, job);
        assert!((score - content).abs() < 1e-6);
    }

    #[test]
    fn test_empty_texts_score_zero() {
        assert_eq!(score_pair("", ""), 0.0);
        assert_eq!(score_pair("the and of", "with for from"), 0.0);
    }

    #[test]
    fn test_disjoint_texts_with_jd_skills_keep_floor() {
        let resume = "ceramics instructor teaching pottery classes";
        let job = "kubernetes administrator managing aws clusters";

        let score = score_pair(resume, job);
        // zero overlap both lexically and in skills: floor transform only
        assert!((score - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_partial_skill_overlap_raises_score() {
        let base = score_pair(
            "ceramics instructor teaching pottery classes",
            "need python docker kubernetes",
        );
        let better = score_pair(
            "python developer shipping docker containers",
            "need python docker kubernetes",
        );
        assert!(better > base);
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
