use itertools::Itertools;
use std::cmp::Reverse;

/// One fetched collection plus its loading state.
///
/// `all` keeps the order the source returned; `top` is the ranked, capped
/// view used by the projects grid.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    pub loading: bool,
    pub top: Vec<T>,
    pub all: Vec<T>,
    pub failed: bool,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            loading: false,
            top: Vec::new(),
            all: Vec::new(),
            failed: false,
        }
    }
}

impl<T: Clone> Feed<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Replaces the whole collection with the outcome of one fetch.
    pub fn settle<E, K, F>(
        &mut self,
        result: Result<Vec<T>, E>,
        cap: usize,
        key: F,
        fallback: Vec<T>,
    ) where
        K: Ord,
        F: Fn(&T) -> K,
    {
        match result {
            Ok(items) => {
                self.top = rank_top(&items, cap, key);
                self.all = items;
                self.failed = false;
            }
            Err(_) => {
                self.top = fallback.clone();
                self.all = fallback;
                self.failed = true;
            }
        }
        self.loading = false;
    }
}

/// Stable descending sort by `key`, truncated to `cap`.
pub fn rank_top<T, K, F>(items: &[T], cap: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .sorted_by_key(|item| Reverse(key(*item)))
        .take(cap)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::types::{ModelSummary, RepoSummary};
    use crate::test_utils::*;

    fn stars(repos: &[RepoSummary]) -> Vec<u32> {
        repos.iter().map(|r| r.stars).collect()
    }

    #[test]
    fn repos_ranked_by_stars_descending() {
        let repos = vec![make_repo("a", 5), make_repo("b", 50), make_repo("c", 1)];
        let top = rank_top(&repos, 3, |r| r.stars);
        assert_eq!(stars(&top), vec![50, 5, 1]);
    }

    #[test]
    fn rank_truncates_to_cap() {
        let repos: Vec<_> = (0..10).map(|i| make_repo(&format!("r{i}"), i)).collect();
        let top = rank_top(&repos, 3, |r| r.stars);
        assert_eq!(stars(&top), vec![9, 8, 7]);
    }

    #[test]
    fn rank_keeps_source_order_for_ties() {
        let repos = vec![make_repo("first", 4), make_repo("second", 4), make_repo("third", 9)];
        let top = rank_top(&repos, 3, |r| r.stars);
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn rank_with_zero_cap_is_empty() {
        let repos = vec![make_repo("a", 1)];
        assert!(rank_top(&repos, 0, |r| r.stars).is_empty());
    }

    #[test]
    fn settle_success_keeps_unsorted_full_list() {
        let mut feed: Feed<RepoSummary> = Feed::default();
        feed.begin();
        let repos = vec![make_repo("a", 5), make_repo("b", 50), make_repo("c", 1)];
        feed.settle::<String, _, _>(Ok(repos), 2, |r| r.stars, vec![make_repo("fallback", 0)]);

        assert!(!feed.loading);
        assert!(!feed.failed);
        assert_eq!(stars(&feed.top), vec![50, 5]);
        assert_eq!(stars(&feed.all), vec![5, 50, 1]);
    }

    #[test]
    fn settle_failure_uses_fallback() {
        let mut feed: Feed<RepoSummary> = Feed::default();
        feed.begin();
        let fallback = make_repo("fallback", 0);
        feed.settle(Err("boom"), 3, |r| r.stars, vec![fallback.clone()]);

        assert!(!feed.loading);
        assert!(feed.failed);
        assert_eq!(feed.top, vec![fallback.clone()]);
        assert_eq!(feed.all, vec![fallback]);
    }

    #[test]
    fn settle_replaces_instead_of_merging() {
        let mut feed: Feed<ModelSummary> = Feed::default();
        feed.settle::<String, _, _>(Ok(vec![make_model("a/one", 1)]), 2, |m| m.downloads, vec![]);
        feed.begin();
        feed.settle::<String, _, _>(Ok(vec![make_model("a/two", 2)]), 2, |m| m.downloads, vec![]);

        assert_eq!(feed.all.len(), 1);
        assert_eq!(feed.all[0].id, "a/two");
    }

    #[test]
    fn models_ranked_by_downloads() {
        let mut feed: Feed<ModelSummary> = Feed::default();
        let models = vec![
            make_model("a/low", 10),
            make_model("a/high", 5_700),
            make_model("a/mid", 2_100),
        ];
        feed.settle::<String, _, _>(Ok(models), 2, |m| m.downloads, vec![]);
        let ids: Vec<_> = feed.top.iter().map(|m| m.display_name()).collect();
        assert_eq!(ids, vec!["high", "mid"]);
    }

    #[test]
    fn model_failure_empties_feed() {
        let mut feed: Feed<ModelSummary> = Feed::default();
        feed.settle::<String, _, _>(Ok(vec![make_model("a/one", 1)]), 2, |m| m.downloads, vec![]);
        feed.begin();
        feed.settle(Err("offline"), 2, |m| m.downloads, vec![]);
        assert!(feed.top.is_empty());
        assert!(feed.all.is_empty());
        assert!(!feed.loading);
    }
}
