use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// String form of the reviewed scholarship's id. Not a foreign key.
    pub scholarship_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    /// Rating as submitted by the client; parsed when aggregated.
    pub rating: Option<String>,
    pub comment: Option<String>,
    pub review_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
