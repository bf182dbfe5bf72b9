//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{models::PlanSummary, trends::TrendEntry};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// # Examples
///
/// ```rust
/// use pathfinder_core::{
///     display::PlanSummaries,
///     models::{PlanStatus, PlanSummary},
/// };
/// use jiff::Timestamp;
///
/// let plan = PlanSummary {
///     id: 1,
///     goal: "Web Developer".to_string(),
///     duration_months: 1,
///     start_date: Timestamp::now(),
///     end_date: Timestamp::now(),
///     milestones: vec![],
///     technologies: vec!["React".to_string()],
///     status: PlanStatus::Active,
///     version: 1,
///     total_days: 30,
///     completed_days: 3,
///     completion_percentage: 10.0,
/// };
///
/// let summaries = PlanSummaries(vec![plan]);
/// assert!(summaries.to_string().contains("Web Developer"));
/// assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper rendering trend entries as a markdown table.
pub struct TrendList(pub Vec<TrendEntry>);

impl TrendList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrendEntry> {
        self.0.iter()
    }
}

impl fmt::Display for TrendList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_trend_table(f, &self.0)
    }
}

/// Writes trend entries as a markdown table, or a placeholder line when
/// there are none.
pub(crate) fn fmt_trend_table(f: &mut fmt::Formatter<'_>, entries: &[TrendEntry]) -> fmt::Result {
    if entries.is_empty() {
        return writeln!(f, "No technologies found.");
    }
    writeln!(f, "| Technology | Category | Relevance | Professions |")?;
    writeln!(f, "|:-|:-|-:|:-|")?;
    for entry in entries {
        writeln!(
            f,
            "| {} | {} | {} | {} |",
            entry.name,
            entry.category,
            entry.relevance,
            entry.professions.join(", ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_list_renders_table_rows() {
        let list = TrendList(vec![
            TrendEntry::new("Rust", "Language", 88, &["Backend Developer"]),
            TrendEntry::new("Astro", "Framework", 78, &["Frontend Developer"]),
        ]);
        let output = list.to_string();
        assert_eq!(list.len(), 2);
        assert!(output.contains("| Rust | Language | 88 | Backend Developer |"));
        assert!(output.contains("| Astro | Framework | 78 | Frontend Developer |"));
    }

    #[test]
    fn test_empty_trend_list() {
        assert!(TrendList(vec![]).is_empty());
        assert_eq!(TrendList(vec![]).to_string(), "No technologies found.\n");
    }
}
