//! Rating aggregation for the test-results view.

#[cfg(test)]
#[path = "rating_stats_test.rs"]
mod rating_stats_test;

/// Star values shown in the distribution, highest first.
pub const STARS: [u8; 5] = [5, 4, 3, 2, 1];

/// Count and share of responses for one star value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarBucket {
    pub stars: u8,
    pub count: usize,
    /// Whole percent of all responses, `0` when there are none.
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingStats {
    /// Mean rating rounded to one decimal; `0.0` with no responses.
    pub average: f64,
    pub total: usize,
    pub distribution: Vec<StarBucket>,
}

impl RatingStats {
    pub fn from_ratings(ratings: &[u8]) -> Self {
        let total = ratings.len();
        let distribution = STARS
            .iter()
            .map(|&stars| {
                let count = ratings.iter().filter(|&&r| r == stars).count();
                StarBucket { stars, count, percent: percent_of(count, total) }
            })
            .collect();
        Self { average: average_rating(ratings), total, distribution }
    }

    /// Average formatted for display (`4.7`, `0`).
    pub fn average_label(&self) -> String {
        format!("{}", self.average)
    }
}

/// Arithmetic mean rounded to one decimal; `0.0` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn average_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// `count / total` as a whole percent rounded to nearest; `0` when `total == 0`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Filled and empty stars for a `1..=5` rating, e.g. `★★★★☆`.
pub fn star_glyphs(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
