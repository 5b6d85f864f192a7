use std::cmp::Reverse;

use crate::types::{ExperienceBlock, FilterRules};
use crate::util;

/// Select and order experience blocks for one template.
///
/// Pipeline: hidden-for exclusion, exclude tags, include tags, recency
/// cutoff, ranking, truncation. Never mutates the input; every call
/// produces a fresh list. Blocks with no parsable start year are exempt
/// from the recency cutoff and rank as current-year.
pub fn apply_experience_filters(
    blocks: &[ExperienceBlock],
    rules: &FilterRules,
    max_items: Option<usize>,
    template_key: Option<&str>,
    current_year: i32,
) -> Vec<ExperienceBlock> {
    let tokens = template_key
        .map(util::template_tokens)
        .unwrap_or_default();

    let mut result: Vec<ExperienceBlock> = blocks
        .iter()
        .filter(|block| {
            if !tokens.is_empty()
                && block
                    .hidden_for
                    .iter()
                    .any(|h| tokens.contains(&h.to_lowercase()))
            {
                return false;
            }
            if block.tags.iter().any(|t| rules.exclude_tags.contains(t)) {
                return false;
            }
            if !rules.include_tags.is_empty()
                && !block.tags.iter().any(|t| rules.include_tags.contains(t))
            {
                return false;
            }
            if let Some(limit) = rules.limit_years {
                if let Some(start) = block.start_year() {
                    if current_year - start > limit {
                        return false;
                    }
                }
            }
            true
        })
        .cloned()
        .collect();

    // With nothing configured the survivors keep their original order.
    if rules.is_empty() && max_items.is_none() {
        return result;
    }

    // Current roles first, then newest start year, then priority-tag hits.
    // sort_by_key is stable, so ties preserve input order.
    result.sort_by_key(|block| {
        let priority_score = block
            .tags
            .iter()
            .filter(|t| rules.priority_tags.contains(t))
            .count();
        (
            if block.is_current() { 0u8 } else { 1 },
            Reverse(block.start_year().unwrap_or(current_year)),
            Reverse(priority_score),
        )
    });

    if let Some(cap) = max_items {
        result.truncate(cap);
    }

    result
}
