use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Level1).string().not_null())
                    .col(ColumnDef::new(Categories::Level2).string().null())
                    .col(ColumnDef::new(Categories::Level3).string().null())
                    .col(ColumnDef::new(Categories::Level4).string().null())
                    .col(ColumnDef::new(Categories::Level5).string().null())
                    .col(ColumnDef::new(Categories::Level6).string().null())
                    .col(ColumnDef::new(Categories::Level7).string().null())
                    .col(ColumnDef::new(Categories::Level8).string().null())
                    .col(ColumnDef::new(Categories::Code).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_categories_level1")
                    .table(Categories::Table)
                    .col(Categories::Level1)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    #[sea_orm(iden = "level1")]
    Level1,
    #[sea_orm(iden = "level2")]
    Level2,
    #[sea_orm(iden = "level3")]
    Level3,
    #[sea_orm(iden = "level4")]
    Level4,
    #[sea_orm(iden = "level5")]
    Level5,
    #[sea_orm(iden = "level6")]
    Level6,
    #[sea_orm(iden = "level7")]
    Level7,
    #[sea_orm(iden = "level8")]
    Level8,
    Code,
}
