//! Average rating derived from review documents.

use crate::{model::review::AverageRatingDto, server::util::parse::parse_rating};

/// Aggregate of every review referencing one scholarship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// `sum / count`, or `0` when there are no reviews.
    pub average_rating: f64,
    pub total_reviews: u64,
}

impl RatingSummary {
    /// Aggregates raw stored ratings.
    ///
    /// Every review counts toward `total_reviews`; missing or unparsable ratings
    /// contribute `0` to the sum.
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let (sum, total_reviews) = ratings
            .into_iter()
            .fold((0.0_f64, 0_u64), |(sum, count), rating| {
                (sum + parse_rating(rating), count + 1)
            });

        let average_rating = if total_reviews == 0 {
            0.0
        } else {
            sum / total_reviews as f64
        };

        Self {
            average_rating,
            total_reviews,
        }
    }

    /// Converts to the standalone endpoint's DTO, rounding to two decimal places.
    pub fn into_dto(self) -> AverageRatingDto {
        AverageRatingDto {
            average_rating: round_to_cents(self.average_rating),
            total_reviews: self.total_reviews,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
