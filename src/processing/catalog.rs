//! Static skill taxonomy: category names mapped to canonical skill tokens

use std::collections::{BTreeMap, BTreeSet};

/// Immutable mapping from skill category to canonical skill tokens.
/// Tokens may be single words ("python") or two-word phrases
/// ("machine learning"). Built once at startup and injected into the
/// extractor, so tests can substitute a small fixture catalog.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl SkillCatalog {
    /// Build a catalog from arbitrary category -> skills data.
    /// Skill tokens are lowercased on the way in.
    pub fn from_map<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let categories = entries
            .into_iter()
            .map(|(category, skills)| {
                let skills = skills
                    .into_iter()
                    .map(|s| s.into().to_lowercase())
                    .collect();
                (category.into(), skills)
            })
            .collect();

        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn skill_count(&self) -> usize {
        self.categories.values().map(|skills| skills.len()).sum()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::from_map([
            (
                "programming",
                vec![
                    "python", "java", "javascript", "js", "c++", "ruby", "php", "swift",
                    "kotlin", "typescript", "golang", "go", "rust", "scala", "perl", "shell",
                    "bash",
                ],
            ),
            (
                "web_tech",
                vec![
                    "html", "css", "react", "angular", "vue", "node.js", "nodejs", "django",
                    "flask", "express", "springboot", "spring", "asp.net", "jquery",
                    "bootstrap", "tailwind", "webpack", "redux", "rest", "restful", "graphql",
                ],
            ),
            (
                "database",
                vec![
                    "sql", "mongodb", "postgresql", "mysql", "redis", "oracle", "nosql",
                    "dynamodb", "cassandra", "elasticsearch", "mariadb", "sqlite",
                ],
            ),
            (
                "cloud",
                vec![
                    "aws", "azure", "gcp", "docker", "kubernetes", "k8s", "terraform",
                    "cloud", "microservices", "serverless", "lambda", "ec2", "s3",
                ],
            ),
            (
                "tools",
                vec![
                    "git", "jenkins", "jira", "confluence", "slack", "gradle", "maven",
                    "docker", "kubernetes", "ci/cd", "cicd", "agile", "scrum",
                ],
            ),
            (
                "machine_learning",
                vec![
                    "tensorflow", "pytorch", "scikit-learn", "sklearn", "ml", "ai",
                    "machine learning", "deep learning", "nlp", "computer vision",
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_categories() {
        let catalog = SkillCatalog::default();

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "cloud",
                "database",
                "machine_learning",
                "programming",
                "tools",
                "web_tech"
            ]
        );
        assert!(catalog.skill_count() > 50);
    }

    #[test]
    fn test_from_map_lowercases_skills() {
        let catalog = SkillCatalog::from_map([("programming", vec!["Python", "RUST"])]);

        let (_, skills) = catalog.iter().next().unwrap();
        assert!(skills.contains("python"));
        assert!(skills.contains("rust"));
        assert_eq!(catalog.len(), 1);
    }
}
