use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

/// Posterior for a single disease next to its prior
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseasePosterior {
    pub name: String,
    pub prior: f64,
    pub posterior: f64,
}

/// Posteriors for every disease of a network, in declaration order.
///
/// Downstream consumers mostly want [`PosteriorTable::ranked`]: a flat list of
/// `(name, probability)` pairs that is easy to strip of numbers or aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PosteriorTable {
    entries: Vec<DiseasePosterior>,
}

impl PosteriorTable {
    pub fn new(entries: Vec<DiseasePosterior>) -> Self {
        Self { entries }
    }

    pub fn get(&self, disease: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == disease)
            .map(|entry| entry.posterior)
    }

    pub fn entries(&self) -> &[DiseasePosterior] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending posterior; equal posteriors keep
    /// declaration order.
    pub fn ranked_entries(&self) -> Vec<&DiseasePosterior> {
        let mut ranked: Vec<&DiseasePosterior> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.posterior.total_cmp(&a.posterior));
        ranked
    }

    /// `(name, posterior)` pairs, highest first
    pub fn ranked(&self) -> Vec<(String, f64)> {
        self.ranked_entries()
            .into_iter()
            .map(|entry| (entry.name.clone(), entry.posterior))
            .collect()
    }

    /// Highest posterior, first declared disease on ties
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        self.ranked_entries()
            .first()
            .map(|entry| (entry.name.as_str(), entry.posterior))
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.posterior))
            .collect()
    }

    /// Renders the ranking as aligned text, one disease per line
    pub fn render_table<F>(&self, display_name: F) -> String
    where
        F: Fn(&str) -> &str,
    {
        let mut out = String::new();
        for entry in self.ranked_entries() {
            let _ = writeln!(
                out,
                "  {:45} {:>6.1}%   (prior {:>5.1}%)",
                display_name(&entry.name),
                entry.posterior * 100.0,
                entry.prior * 100.0
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, prior: f64, posterior: f64) -> DiseasePosterior {
        DiseasePosterior {
            name: name.to_string(),
            prior,
            posterior,
        }
    }

    #[test]
    fn test_ranking_is_stable() {
        let table = PosteriorTable::new(vec![
            entry("Edema", 0.1, 0.2),
            entry("Pneumonia", 0.15, 0.6),
            entry("COPD", 0.1, 0.2),
            entry("PE", 0.05, 0.05),
        ]);

        let names: Vec<String> = table.ranked().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Pneumonia", "Edema", "COPD", "PE"]);
        assert_eq!(table.most_likely(), Some(("Pneumonia", 0.6)));
    }

    #[test]
    fn test_lookup() {
        let table = PosteriorTable::new(vec![entry("PE", 0.05, 0.3)]);
        assert_eq!(table.get("PE"), Some(0.3));
        assert_eq!(table.get("Gout"), None);
        assert_eq!(table.to_map().get("PE"), Some(&0.3));
        assert_eq!(table.len(), 1);
        assert!(PosteriorTable::default().most_likely().is_none());
    }

    #[test]
    fn test_render_table() {
        let table = PosteriorTable::new(vec![entry("PE", 0.05, 0.25), entry("COPD", 0.1, 0.5)]);
        let rendered = table.render_table(|name| name);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("COPD"));
        assert!(lines[0].contains("50.0%"));
        assert!(lines[1].contains("(prior   5.0%)"));
    }
}
