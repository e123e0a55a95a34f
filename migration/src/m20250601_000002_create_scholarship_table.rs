use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scholarship::Table)
                    .if_not_exists()
                    .col(pk_auto(Scholarship::Id))
                    .col(string(Scholarship::ScholarshipName))
                    .col(string(Scholarship::UniversityName))
                    .col(string(Scholarship::Degree))
                    .col(double(Scholarship::ApplicationFees).default(0.0))
                    .col(
                        timestamp_with_time_zone(Scholarship::PostDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(Scholarship::PostedBy))
                    .col(json(Scholarship::Attributes))
                    .col(string(Scholarship::SearchText).default(""))
                    .to_owned(),
            )
            .await?;

        // Backs the cheapest-then-newest listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_scholarship_fees_post_date")
                    .table(Scholarship::Table)
                    .col(Scholarship::ApplicationFees)
                    .col(Scholarship::PostDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scholarship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scholarship {
    Table,
    Id,
    ScholarshipName,
    UniversityName,
    Degree,
    ApplicationFees,
    PostDate,
    PostedBy,
    Attributes,
    SearchText,
}
