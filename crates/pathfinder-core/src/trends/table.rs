//! The built-in technology trend table.

use std::{collections::HashMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

/// A technology with its trend relevance and the professions it matters to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendEntry {
    pub name: String,
    pub category: String,
    /// Relevance score between 0 and 100
    pub relevance: u8,
    pub professions: Vec<String>,
}

impl TrendEntry {
    /// Builds an entry from borrowed parts.
    pub fn new(name: &str, category: &str, relevance: u8, professions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            relevance: relevance.min(100),
            professions: professions.iter().map(ToString::to_string).collect(),
        }
    }

    /// Whether `profession` appears in the entry's profession list, ignoring
    /// case.
    pub fn applies_to(&self, profession: &str) -> bool {
        self.professions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(profession))
    }
}

type Seed = (&'static str, &'static str, u8, &'static [&'static str]);

const SEED: &[Seed] = &[
    ("GPT-4", "LLM", 95, &["AI Engineer", "Machine Learning Engineer"]),
    ("Claude 3", "LLM", 92, &["AI Engineer", "Machine Learning Engineer"]),
    ("Gemini", "LLM", 90, &["AI Engineer", "Machine Learning Engineer"]),
    ("Llama 2", "LLM", 88, &["AI Engineer", "Machine Learning Engineer"]),
    ("Mistral", "LLM", 85, &["AI Engineer", "Machine Learning Engineer"]),
    (
        "Hugging Face",
        "AI Framework",
        90,
        &["AI Engineer", "Machine Learning Engineer", "Data Scientist"],
    ),
    ("TensorFlow 2.14", "ML Framework", 85, &["Machine Learning Engineer", "AI Engineer"]),
    ("PyTorch 2.0", "ML Framework", 92, &["Machine Learning Engineer", "AI Engineer"]),
    ("JAX", "ML Framework", 80, &["Machine Learning Engineer", "Data Scientist"]),
    ("Prompt Engineering", "AI Skill", 95, &["AI Engineer", "Data Scientist"]),
    ("RAG Systems", "AI Technique", 90, &["AI Engineer"]),
    ("Fine-tuning", "AI Skill", 88, &["AI Engineer", "Machine Learning Engineer"]),
    ("CrewAI", "AI Framework", 85, &["AI Engineer"]),
    ("LangChain", "AI Framework", 88, &["AI Engineer"]),
    ("React 18", "Frontend", 90, &["Web Developer", "Frontend Developer"]),
    ("Vue 3", "Frontend", 82, &["Web Developer", "Frontend Developer"]),
    (
        "Next.js 14",
        "Frontend",
        92,
        &["Web Developer", "Frontend Developer", "Full Stack Developer"],
    ),
    ("Svelte", "Frontend", 80, &["Frontend Developer", "Web Developer"]),
    ("Astro", "Frontend", 78, &["Frontend Developer", "Web Developer"]),
    (
        "Tailwind CSS",
        "CSS Framework",
        88,
        &["Frontend Developer", "Web Developer", "UI/UX Developer"],
    ),
    ("FastAPI", "Backend", 85, &["Backend Engineer", "Web Developer", "Software Engineer"]),
    ("Django 5", "Backend", 80, &["Backend Engineer", "Web Developer", "Software Engineer"]),
    ("Rust", "Language", 85, &["Systems Engineer", "Backend Engineer", "Software Engineer"]),
    ("Go 1.21", "Language", 82, &["Backend Engineer", "Cloud Engineer", "DevOps Engineer"]),
    ("Kubernetes 1.28", "Orchestration", 90, &["DevOps Engineer", "Cloud Engineer"]),
    ("Docker", "Containerization", 92, &["DevOps Engineer", "Cloud Engineer", "Backend Engineer"]),
    ("AWS", "Cloud", 95, &["Cloud Engineer", "DevOps Engineer", "Backend Engineer"]),
    ("Azure", "Cloud", 90, &["Cloud Engineer", "DevOps Engineer"]),
    ("Google Cloud", "Cloud", 88, &["Cloud Engineer", "DevOps Engineer", "Data Engineer"]),
    ("Terraform", "IaC", 88, &["DevOps Engineer", "Cloud Engineer"]),
    ("Ansible", "IaC", 82, &["DevOps Engineer", "Systems Administrator"]),
    ("Apache Spark", "Big Data", 85, &["Data Engineer", "Data Scientist"]),
    ("Dbt", "Data Tools", 80, &["Data Engineer", "Analytics Engineer"]),
    (
        "Postgres 16",
        "Database",
        85,
        &["Database Administrator", "Data Engineer", "Backend Engineer"],
    ),
    ("MongoDB", "Database", 82, &["Backend Engineer", "Database Administrator", "Data Engineer"]),
    ("Flutter", "Mobile", 85, &["Mobile Developer"]),
    ("React Native", "Mobile", 88, &["Mobile Developer"]),
    ("Swift", "Language", 85, &["iOS Developer", "Mobile Developer"]),
    ("Kotlin", "Language", 85, &["Android Developer", "Mobile Developer"]),
    ("TypeScript", "Language", 90, &["Web Developer", "Frontend Developer", "Backend Engineer"]),
    ("GraphQL", "API", 85, &["Backend Engineer", "Web Developer", "Full Stack Developer"]),
    ("WebAssembly", "Web", 78, &["Frontend Developer", "Software Engineer"]),
    ("Blockchain", "Emerging", 75, &["Blockchain Developer", "Software Engineer"]),
    ("Web3", "Emerging", 72, &["Blockchain Developer"]),
];

/// Immutable trend reference data.
///
/// Entries keep their declaration order, which is what breaks relevance ties
/// in every listing.
#[derive(Debug, Clone)]
pub struct TrendTable {
    entries: Vec<TrendEntry>,
    index: HashMap<String, usize>,
}

impl TrendTable {
    /// The process-wide built-in table, constructed on first use.
    pub fn builtin() -> &'static TrendTable {
        static TABLE: OnceLock<TrendTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            Self::from_entries(
                SEED.iter()
                    .map(|(name, category, relevance, professions)| {
                        TrendEntry::new(name, category, *relevance, professions)
                    })
                    .collect(),
            )
        })
    }

    /// Builds a table from entries. A later entry with the same
    /// (case-insensitive) name replaces the earlier one in place.
    pub fn from_entries(entries: Vec<TrendEntry>) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
        };
        for entry in entries {
            let key = entry.name.to_lowercase();
            match table.index.get(&key) {
                Some(&position) => table.entries[position] = entry,
                None => {
                    table.index.insert(key, table.entries.len());
                    table.entries.push(entry);
                }
            }
        }
        table
    }

    /// Looks up an entry by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&TrendEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[TrendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_shared() {
        let first = TrendTable::builtin();
        let second = TrendTable::builtin();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), SEED.len());
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = TrendTable::builtin();
        let entry = table.get("pytorch 2.0").expect("PyTorch 2.0 is seeded");
        assert_eq!(entry.name, "PyTorch 2.0");
        assert_eq!(entry.relevance, 92);
        assert!(entry.applies_to("ai engineer"));
        assert!(table.get("COBOL").is_none());
    }

    #[test]
    fn test_duplicate_names_replace_in_place() {
        let table = TrendTable::from_entries(vec![
            TrendEntry::new("Alpha", "Tool", 80, &["Tester"]),
            TrendEntry::new("Beta", "Tool", 70, &["Tester"]),
            TrendEntry::new("alpha", "Tool", 90, &["Tester"]),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].relevance, 90);
        assert_eq!(table.entries()[1].name, "Beta");
    }
}
