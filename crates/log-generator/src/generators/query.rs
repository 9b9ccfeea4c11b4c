//! Query string generator.

use crate::sampler::WeightedChoice;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::LazyLock;

/// Category of query string attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    None,
    Pagination,
    Filtering,
    Sorting,
    Search,
}

impl QueryKind {
    /// Literal `key=value[&key=value]` strings for this category.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            QueryKind::None => &[],
            QueryKind::Pagination => &PAGINATION_PARAMS,
            QueryKind::Filtering => &FILTERING_PARAMS,
            QueryKind::Sorting => &SORTING_PARAMS,
            QueryKind::Search => &SEARCH_PARAMS,
        }
    }
}

pub const QUERY_KIND_WEIGHTS: [(QueryKind, u32); 5] = [
    (QueryKind::None, 40),
    (QueryKind::Pagination, 25),
    (QueryKind::Filtering, 20),
    (QueryKind::Sorting, 10),
    (QueryKind::Search, 5),
];

pub const PAGINATION_PARAMS: [&str; 6] = [
    "page=1&limit=10",
    "page=2&limit=20",
    "page=1&limit=50",
    "page=3&limit=25",
    "offset=0&limit=10",
    "offset=20&limit=20",
];

pub const FILTERING_PARAMS: [&str; 9] = [
    "status=active",
    "status=pending",
    "category=posts",
    "category=comments",
    "user_id=123",
    "created_after=2024-01-01",
    "status=active&category=posts",
    "user_id=456&status=active",
    "category=comments&status=pending",
];

pub const SORTING_PARAMS: [&str; 5] = [
    "sort=created_at&order=desc",
    "sort=updated_at&order=asc",
    "sort=name&order=asc",
    "sort=id&order=desc",
    "sort_by=created_at&sort_order=desc",
];

pub const SEARCH_PARAMS: [&str; 5] = [
    "q=user+search",
    "q=post+content",
    "q=comment+text",
    "search=api+query",
    "query=test+data",
];

static QUERY_KINDS: LazyLock<WeightedChoice<QueryKind>> =
    LazyLock::new(|| WeightedChoice::from_static(&QUERY_KIND_WEIGHTS));

/// Generate a query string: empty, or `?` followed by one catalogue entry.
pub fn generate_query_parameters<R: Rng + ?Sized>(rng: &mut R) -> String {
    let kind = *QUERY_KINDS.sample(rng);
    kind.catalog()
        .choose(rng)
        .map_or_else(String::new, |params| format!("?{params}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(query: &str) {
        if query.is_empty() {
            return;
        }
        let body = query.strip_prefix('?').expect("query starts with ?");
        assert!(!body.contains('?'), "{query}");
        for pair in body.split('&') {
            let (key, value) = pair.split_once('=').expect("pair has =");
            assert!(!key.is_empty() && !value.is_empty(), "{query}");
            assert!(!value.contains('='), "{query}");
        }
    }

    #[test]
    fn test_generated_queries_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_well_formed(&generate_query_parameters(&mut rng));
        }
    }

    #[test]
    fn test_catalogs_are_well_formed() {
        for (kind, _) in QUERY_KIND_WEIGHTS {
            for params in kind.catalog() {
                assert_well_formed(&format!("?{params}"));
            }
        }
    }

    #[test]
    fn test_empty_share() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty = (0..1000)
            .filter(|_| generate_query_parameters(&mut rng).is_empty())
            .count();

        assert!((300..500).contains(&empty), "{empty}");
    }
}
