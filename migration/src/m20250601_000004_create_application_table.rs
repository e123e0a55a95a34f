use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::ScholarshipId))
                    .col(string(Application::UserEmail))
                    .col(string(Application::Status).default("pending"))
                    .col(text_null(Application::Feedback))
                    .col(double(Application::ApplicationFees).default(0.0))
                    .col(string_null(Application::TransactionId))
                    .col(json(Application::Details))
                    .col(
                        timestamp_with_time_zone(Application::AppliedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_application_user_email")
                    .table(Application::Table)
                    .col(Application::UserEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    ScholarshipId,
    UserEmail,
    Status,
    Feedback,
    ApplicationFees,
    TransactionId,
    Details,
    AppliedAt,
}
