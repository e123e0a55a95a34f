use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scholarship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scholarship_name: String,
    pub university_name: String,
    pub degree: String,
    #[sea_orm(column_type = "Double")]
    pub application_fees: f64,
    pub post_date: DateTimeUtc,
    pub posted_by: Option<String>,
    /// Free-form attributes that have no dedicated column.
    pub attributes: Json,
    /// Lowercased name, university and degree; kept in sync by every writer.
    pub search_text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Separates the folded fields so a match never spans two of them.
const SEARCH_TEXT_SEPARATOR: char = '\u{1f}';

/// Builds the `search_text` value for a scholarship.
///
/// Folding happens here rather than in SQL since SQLite's `LOWER()` only folds ASCII.
pub fn search_text(scholarship_name: &str, university_name: &str, degree: &str) -> String {
    [scholarship_name, university_name, degree]
        .iter()
        .map(|field| field.to_lowercase())
        .collect::<Vec<_>>()
        .join(&SEARCH_TEXT_SEPARATOR.to_string())
}
