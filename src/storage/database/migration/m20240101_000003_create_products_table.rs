use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::ManagementNumber).string().not_null())
                    .col(ColumnDef::new(Products::Images).text().not_null())
                    .col(ColumnDef::new(Products::Title).string().null())
                    .col(ColumnDef::new(Products::CandidateTitles).text().null())
                    .col(ColumnDef::new(Products::Level).string().null())
                    .col(ColumnDef::new(Products::Measurement).string().null())
                    .col(ColumnDef::new(Products::SizeForeign).string().null())
                    .col(ColumnDef::new(Products::SizeJapanese).string().null())
                    .col(ColumnDef::new(Products::Condition).string().null())
                    .col(ColumnDef::new(Products::Category).string().null())
                    .col(ColumnDef::new(Products::CategoryList).text().null())
                    .col(ColumnDef::new(Products::Shop1).string().null())
                    .col(ColumnDef::new(Products::Shop2).string().null())
                    .col(ColumnDef::new(Products::Shop3).string().null())
                    .col(ColumnDef::new(Products::Price).big_integer().null())
                    .col(ColumnDef::new(Products::WorkerId).integer().null())
                    .col(ColumnDef::new(Products::FolderId).integer().null())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_worker_id")
                            .from(Products::Table, Products::WorkerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_folder_id")
                            .from(Products::Table, Products::FolderId)
                            .to(Folders::Table, Folders::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_management_number")
                    .table(Products::Table)
                    .col(Products::ManagementNumber)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_folder_id")
                    .table(Products::Table)
                    .col(Products::FolderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    ManagementNumber,
    Images,
    Title,
    CandidateTitles,
    Level,
    Measurement,
    SizeForeign,
    SizeJapanese,
    Condition,
    Category,
    CategoryList,
    #[sea_orm(iden = "shop1")]
    Shop1,
    #[sea_orm(iden = "shop2")]
    Shop2,
    #[sea_orm(iden = "shop3")]
    Shop3,
    Price,
    WorkerId,
    FolderId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Folders {
    Table,
    Id,
}
