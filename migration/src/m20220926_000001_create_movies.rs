use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No IF NOT EXISTS: a second apply without a rollback must fail,
        // the version ledger is what keeps reruns out.
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .col(pk_auto(Movies::Id))
                    .col(string_null(Movies::Title))
                    .col(integer_null(Movies::Year))
                    .col(integer_null(Movies::Length))
                    .col(string_null(Movies::Director))
                    .col(string_null(Movies::Description))
                    .col(string_null(Movies::PosterUrl))
                    .col(string_null(Movies::Category))
                    .col(boolean_null(Movies::Discount))
                    .col(boolean_null(Movies::FemaleDirector))
                    .col(timestamp(Movies::CreatedAt))
                    .col(timestamp(Movies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Year,
    Length,
    Director,
    Description,
    PosterUrl,
    Category,
    Discount,
    FemaleDirector,
    CreatedAt,
    UpdatedAt,
}
