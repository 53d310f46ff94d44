use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogfulArticles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogfulArticles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogfulArticles::Title).text().not_null())
                    .col(ColumnDef::new(BlogfulArticles::Content).text().not_null())
                    .col(ColumnDef::new(BlogfulArticles::Style).text().not_null())
                    .col(
                        ColumnDef::new(BlogfulArticles::DatePublished)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogfulArticles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogfulArticles {
    Table,
    Id,
    Title,
    Content,
    Style,
    DatePublished,
}
