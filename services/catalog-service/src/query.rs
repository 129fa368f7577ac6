use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use common::{GameRecord, Platform};

/// Filter parameters of the search endpoint. `q` is the free-text
/// title search; `title` is the exact-title lookup used for resolving
/// featured games by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    pub platform: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "q")]
    pub query: Option<String>,
    pub title: Option<String>,
}

/// Resolve the filters over the stored records.
///
/// Precedence: the platform filter restricts the pool; a genre filter
/// then tries an exact case-sensitive match and, on zero hits, retries
/// case-insensitively as a substring, short-circuiting every later
/// filter; otherwise an exact title lookup wins over the free-text
/// search. Results always come back newest release first, the genre
/// path included (see DESIGN.md for the ordering decision).
pub fn resolve(records: Vec<GameRecord>, filters: &SearchFilters) -> Vec<GameRecord> {
    let mut pool = records;

    if let Some(name) = filters.platform.as_deref() {
        match Platform::from_name(name) {
            Some(platform) => pool.retain(|g| g.platforms.contains(&platform)),
            // An unknown platform cannot be listed by any record.
            None => return Vec::new(),
        }
    }

    if let Some(genre) = filters.genre.as_deref() {
        let exact: Vec<GameRecord> = pool
            .iter()
            .filter(|g| g.genres.iter().any(|x| x == genre))
            .cloned()
            .collect();
        let matched = if exact.is_empty() {
            let pattern = insensitive_pattern(genre);
            pool.iter()
                .filter(|g| g.genres.iter().any(|x| pattern.is_match(x)))
                .cloned()
                .collect()
        } else {
            exact
        };
        return newest_first(matched);
    }

    if let Some(title) = filters.title.as_deref() {
        pool.retain(|g| g.title == title);
    } else if let Some(text) = filters.query.as_deref() {
        let pattern = insensitive_pattern(text);
        pool.retain(|g| pattern.is_match(&g.title));
    }

    newest_first(pool)
}

fn insensitive_pattern(text: &str) -> Regex {
    RegexBuilder::new(&regex::escape(text))
        .case_insensitive(true)
        .build()
        .expect("escaped pattern is always valid")
}

fn newest_first(mut games: Vec<GameRecord>) -> Vec<GameRecord> {
    games.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    games
}
