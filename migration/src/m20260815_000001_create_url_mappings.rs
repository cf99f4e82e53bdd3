use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // short_code is the primary key, which carries the uniqueness
        // constraint the shortening flow relies on at insert time.
        manager
            .create_table(
                Table::create()
                    .table(UrlMapping::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlMapping::ShortCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UrlMapping::OriginalUrl).text().not_null())
                    .col(
                        ColumnDef::new(UrlMapping::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_url_mappings_created_at")
                    .table(UrlMapping::Table)
                    .col(UrlMapping::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_url_mappings_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UrlMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UrlMapping {
    #[sea_orm(iden = "url_mappings")]
    Table,
    ShortCode,
    OriginalUrl,
    CreatedAt,
}
