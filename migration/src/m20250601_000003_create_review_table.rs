use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // scholarship_id is a plain string reference: reviews outlive the
        // scholarship they point at, so there is no foreign key here.
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string(Review::ScholarshipId))
                    .col(string(Review::UserEmail))
                    .col(string_null(Review::UserName))
                    .col(string_null(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(
                        timestamp_with_time_zone(Review::ReviewDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_scholarship_user")
                    .table(Review::Table)
                    .col(Review::ScholarshipId)
                    .col(Review::UserEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    ScholarshipId,
    UserEmail,
    UserName,
    Rating,
    Comment,
    ReviewDate,
}
