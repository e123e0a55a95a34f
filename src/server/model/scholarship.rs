//! Domain models for scholarship data operations.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    model::scholarship::{ScholarshipDto, ScholarshipPayloadDto},
    server::model::json_object,
};

/// Scholarship listing as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Scholarship {
    /// Store-assigned identifier.
    pub id: i32,
    pub scholarship_name: String,
    pub university_name: String,
    pub degree: String,
    pub application_fees: f64,
    pub post_date: DateTime<Utc>,
    /// Email of the moderator or admin who posted the listing.
    pub posted_by: Option<String>,
    /// Additional attributes without a dedicated column.
    pub attributes: Map<String, Value>,
}

impl Scholarship {
    /// Converts an entity model to a scholarship domain model at the repository boundary.
    pub fn from_entity(entity: entity::scholarship::Model) -> Self {
        Self {
            id: entity.id,
            scholarship_name: entity.scholarship_name,
            university_name: entity.university_name,
            degree: entity.degree,
            application_fees: entity.application_fees,
            post_date: entity.post_date,
            posted_by: entity.posted_by,
            attributes: json_object(entity.attributes),
        }
    }

    /// Converts to a DTO without a rating, as served by the top-scholarships listing.
    pub fn into_dto(self) -> ScholarshipDto {
        self.into_dto_with_rating(None)
    }

    fn into_dto_with_rating(self, rating: Option<f64>) -> ScholarshipDto {
        ScholarshipDto {
            id: self.id,
            scholarship_name: self.scholarship_name,
            university_name: self.university_name,
            degree: self.degree,
            application_fees: self.application_fees,
            post_date: self.post_date,
            posted_by: self.posted_by,
            attributes: self.attributes,
            rating,
        }
    }
}

/// Scholarship enriched with the average rating of its live reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedScholarship {
    pub scholarship: Scholarship,
    /// Unrounded average rating, `0` without reviews.
    pub rating: f64,
}

impl RatedScholarship {
    pub fn into_dto(self) -> ScholarshipDto {
        self.scholarship.into_dto_with_rating(Some(self.rating))
    }
}

/// Fields written when creating or replacing a scholarship.
#[derive(Debug, Clone)]
pub struct ScholarshipParams {
    pub scholarship_name: String,
    pub university_name: String,
    pub degree: String,
    pub application_fees: f64,
    pub post_date: DateTime<Utc>,
    pub posted_by: Option<String>,
    pub attributes: Map<String, Value>,
}

impl ScholarshipParams {
    /// Builds write parameters from a request body.
    ///
    /// # Arguments
    /// - `dto` - Request body
    /// - `posted_by` - Email of the authenticated poster
    /// - `now` - Post date used when the body carries none
    pub fn from_dto(dto: ScholarshipPayloadDto, posted_by: String, now: DateTime<Utc>) -> Self {
        Self {
            scholarship_name: dto.scholarship_name,
            university_name: dto.university_name,
            degree: dto.degree,
            application_fees: dto.application_fees,
            post_date: dto.post_date.unwrap_or(now),
            posted_by: Some(posted_by),
            attributes: dto.attributes,
        }
    }
}
