use super::fuzzy::similarity;
use crate::services::config::SearchConfig;
use crate::types::Asset;

/// Category filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A ranked search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub asset: &'a Asset,
    pub score: f64,
}

/// Read-only query service over a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: SearchConfig,
}

impl QueryEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Category filter then tag filter (every required tag must be present).
    pub fn filter<'a>(
        &self,
        catalog: &'a [Asset],
        category: &str,
        tags: &[&str],
    ) -> Vec<&'a Asset> {
        catalog
            .iter()
            .filter(|a| category == ALL_CATEGORIES || a.category == category)
            .filter(|a| tags.iter().all(|t| a.has_tag(t)))
            .collect()
    }

    /// Best similarity of `term` across the searchable fields of an asset.
    pub fn score(&self, asset: &Asset, term: &str) -> f64 {
        let distance = self.config.distance;
        let metadata = &asset.metadata;

        std::iter::once(asset.name.as_str())
            .chain(asset.description.as_deref())
            .chain(asset.tags.iter().map(String::as_str))
            .chain(std::iter::once(asset.category.as_str()))
            .chain(metadata.title.as_deref())
            .chain(metadata.description.as_deref())
            .map(|field| similarity(term, field, distance))
            .fold(0.0, f64::max)
    }

    /// Score candidates, keep those at or above the threshold, best first.
    /// Equal scores keep their input order.
    pub fn rank<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Asset>,
        term: &str,
    ) -> Vec<SearchHit<'a>> {
        let term = term.trim();
        let mut hits: Vec<SearchHit<'a>> = candidates
            .into_iter()
            .map(|asset| SearchHit {
                asset,
                score: self.score(asset, term),
            })
            .filter(|hit| hit.score >= self.config.min_similarity)
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }

    /// Filter, then rank by `term` when it is not blank.
    pub fn search<'a>(
        &self,
        catalog: &'a [Asset],
        term: &str,
        category: &str,
        tags: &[&str],
    ) -> Vec<&'a Asset> {
        let filtered = self.filter(catalog, category, tags);
        if term.trim().is_empty() {
            return filtered;
        }
        self.rank(filtered, term)
            .into_iter()
            .map(|hit| hit.asset)
            .collect()
    }
}

/// Query a catalog with the default search settings.
pub fn query<'a>(catalog: &'a [Asset], term: &str, category: &str, tags: &[&str]) -> Vec<&'a Asset> {
    QueryEngine::default().search(catalog, term, category, tags)
}
