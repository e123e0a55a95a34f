use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// String form of the scholarship's id. Not a foreign key.
    pub scholarship_id: String,
    pub user_email: String,
    pub status: String,
    pub feedback: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub application_fees: f64,
    pub transaction_id: Option<String>,
    pub details: Json,
    pub applied_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
