//! Category-based skill extraction from normalized text

use crate::processing::catalog::SkillCatalog;
use crate::processing::normalizer::NormalizedText;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Skills found in a document, grouped by catalog category.
/// Categories with no matches are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl SkillSet {
    pub fn insert(&mut self, category: &str, skill: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(skill.to_string());
    }

    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.categories.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of skills across all categories.
    pub fn total(&self) -> usize {
        self.categories.values().map(|skills| skills.len()).sum()
    }

    /// Number of skills shared with `other` within the same category.
    pub fn matched_count(&self, other: &SkillSet) -> usize {
        self.categories
            .iter()
            .filter_map(|(category, skills)| {
                other
                    .categories
                    .get(category)
                    .map(|theirs| skills.intersection(theirs).count())
            })
            .sum()
    }

    /// Skills present in both sets within the same category.
    pub fn matched(&self, other: &SkillSet) -> SkillSet {
        let mut shared = SkillSet::default();

        for (category, skills) in &self.categories {
            if let Some(theirs) = other.categories.get(category) {
                for skill in skills.intersection(theirs) {
                    shared.insert(category, skill);
                }
            }
        }

        shared
    }

    /// Skills present in `self` but missing from `resume`, per category.
    /// An absent category in `resume` behaves like an empty set, so the
    /// result categories are always a subset of `self`'s categories.
    pub fn gaps(&self, resume: &SkillSet) -> SkillSet {
        let mut missing = SkillSet::default();

        for (category, required) in &self.categories {
            let covered = resume.categories.get(category);
            for skill in required {
                if covered.map_or(true, |set| !set.contains(skill)) {
                    missing.insert(category, skill);
                }
            }
        }

        missing
    }

    /// Human-readable summary: "cloud: aws, docker, web_tech: react".
    pub fn summary(&self) -> String {
        self.categories
            .iter()
            .map(|(category, skills)| {
                let joined: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
                format!("{}: {}", category, joined.join(", "))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Scans normalized text against the skill catalog using unigram and
/// adjacent-bigram membership.
pub struct SkillExtractor<'a> {
    catalog: &'a SkillCatalog,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self { catalog }
    }

    /// A skill matches when its lowercase form is a unigram, its
    /// period-stripped form is a unigram ("node.js" vs "nodejs"), or it
    /// equals one of the adjacent word pairs ("machine learning").
    pub fn extract(&self, text: &NormalizedText) -> SkillSet {
        let tokens = text.tokens();

        let mut unigrams: HashSet<String> = HashSet::new();
        for token in &tokens {
            unigrams.insert(token.to_string());
            // Trailing punctuation survives normalization as a period;
            // index the stripped form so "python." still matches "python".
            let stripped: String = token.chars().filter(|c| *c != '.').collect();
            if !stripped.is_empty() {
                unigrams.insert(stripped);
            }
        }

        let bigrams: HashSet<String> = tokens
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();

        let mut found = SkillSet::default();
        for (category, skills) in self.catalog.iter() {
            for skill in skills {
                let dotless: String = skill.chars().filter(|c| *c != '.').collect();
                if unigrams.contains(skill.as_str())
                    || unigrams.contains(dotless.as_str())
                    || bigrams.contains(skill.as_str())
                {
                    found.insert(category, skill);
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::TextNormalizer;

    fn extract(text: &str) -> SkillSet {
        let catalog = SkillCatalog::default();
        let normalizer = TextNormalizer::new();
        let extractor = SkillExtractor::new(&catalog);
        extractor.extract(&normalizer.normalize(text))
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let variants = ["Python", "PYTHON.", "python "];

        for variant in variants {
            let skills = extract(variant);
            let programming = skills.get("programming").expect("programming category");
            assert!(programming.contains("python"), "failed for {:?}", variant);
        }
    }

    #[test]
    fn test_period_variant_matching() {
        let with_dot = extract("experience with node.js services");
        let without_dot = extract("experience with nodejs services");

        assert!(with_dot.get("web_tech").unwrap().contains("node.js"));
        assert!(without_dot.get("web_tech").unwrap().contains("node.js"));
    }

    #[test]
    fn test_bigram_requires_adjacency() {
        let adjacent = extract("applied machine learning daily");
        assert!(adjacent
            .get("machine_learning")
            .unwrap()
            .contains("machine learning"));

        let separated = extract("machine operator interested in learning");
        assert!(separated
            .get("machine_learning")
            .map_or(true, |skills| !skills.contains("machine learning")));
    }

    #[test]
    fn test_no_matches_means_absent_category() {
        let skills = extract("gardening and carpentry");
        assert!(skills.is_empty());
        assert_eq!(skills.total(), 0);
    }

    #[test]
    fn test_matched_count_within_categories() {
        let resume = extract("python rust docker");
        let jd = extract("python docker kubernetes");

        // python (programming) + docker (cloud and tools)
        assert_eq!(resume.matched_count(&jd), 3);
    }

    #[test]
    fn test_matched_is_per_category_intersection() {
        let resume = extract("python rust docker");
        let jd = extract("python docker kubernetes");

        let matched = resume.matched(&jd);
        assert!(matched.get("programming").unwrap().contains("python"));
        assert!(matched.get("cloud").unwrap().contains("docker"));
        assert!(!matched.get("programming").unwrap().contains("rust"));
        assert_eq!(matched.total(), resume.matched_count(&jd));
    }

    #[test]
    fn test_gaps_subset_of_jd_categories() {
        let resume = extract("python and docker");
        let jd = extract("need python docker kubernetes react");

        let gaps = jd.gaps(&resume);

        for (category, missing) in gaps.iter() {
            let required = jd.get(category).expect("gap category must exist in jd");
            assert!(missing.is_subset(required));
        }
        assert!(gaps.get("cloud").unwrap().contains("kubernetes"));
        assert!(gaps.get("web_tech").unwrap().contains("react"));
        // matched in both sets never shows up as missing
        assert!(!gaps
            .get("programming")
            .map_or(false, |s| s.contains("python")));
    }

    #[test]
    fn test_summary_format() {
        let mut skills = SkillSet::default();
        skills.insert("cloud", "docker");
        skills.insert("cloud", "aws");
        skills.insert("programming", "rust");

        assert_eq!(skills.summary(), "cloud: aws, docker, programming: rust");
    }
}
