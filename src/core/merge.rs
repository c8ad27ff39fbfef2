use indexmap::IndexMap;
use crate::core::normalize::normalize_keyword;
use crate::models::{Keyword, RawKeyword, IMPLICIT_WEIGHT};

/// Merge newly extracted keywords into an existing profile
///
/// `existing` entries are assumed normalized and seed the map as-is. Each
/// incoming entry is normalized; on collision the higher weight wins and the
/// sources are unioned. Output keeps existing entries first, then new keywords
/// in the order they were encountered.
pub fn merge_keywords(existing: Vec<Keyword>, incoming: Vec<RawKeyword>) -> Vec<Keyword> {
    let mut merged: IndexMap<String, Keyword> = IndexMap::with_capacity(existing.len() + incoming.len());

    for keyword in existing {
        merged.insert(keyword.keyword.clone(), keyword);
    }

    let seeded = merged.len();

    for raw in incoming {
        let key = match raw.keyword.as_deref().map(normalize_keyword) {
            Some(key) if !key.is_empty() => key,
            _ => {
                tracing::trace!("Skipping incoming keyword without text");
                continue;
            }
        };

        let weight = raw.weight.unwrap_or(IMPLICIT_WEIGHT);
        let sources = raw.source_list();

        match merged.get_mut(&key) {
            Some(current) => {
                current.weight = current.weight.max(weight);
                union_sources(&mut current.sources, sources);
            }
            None => {
                let mut deduped = Vec::with_capacity(sources.len());
                union_sources(&mut deduped, sources);
                merged.insert(
                    key.clone(),
                    Keyword {
                        keyword: key,
                        weight,
                        category: raw.category,
                        sources: deduped,
                    },
                );
            }
        }
    }

    tracing::debug!(
        "Merged keywords: {} existing, {} new, {} total",
        seeded,
        merged.len() - seeded,
        merged.len()
    );

    merged.into_values().collect()
}

#[inline]
fn union_sources(target: &mut Vec<String>, sources: Vec<String>) {
    for source in sources {
        if !target.contains(&source) {
            target.push(source);
        }
    }
}
