use crate::domain::model::{Category, CategoryCounts};

/// Tallies how often each category occurs. Categories that never occur have no entry.
pub fn count_categories<I>(categories: I) -> CategoryCounts
where
    I: IntoIterator<Item = Category>,
{
    categories
        .into_iter()
        .fold(CategoryCounts::new(), |mut counts, category| {
            *counts.entry(category).or_insert(0) += 1;
            counts
        })
}
