use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkProcesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkProcesses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkProcesses::WorkerId).integer().null())
                    .col(ColumnDef::new(WorkProcesses::ProductIds).text().not_null())
                    .col(
                        ColumnDef::new(WorkProcesses::CurrentProductId)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WorkProcesses::FinishedProducts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkProcesses::Finished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WorkProcesses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WorkProcesses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_work_processes_worker_finished")
                    .table(WorkProcesses::Table)
                    .col(WorkProcesses::WorkerId)
                    .col(WorkProcesses::Finished)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkProcesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkProcesses {
    Table,
    Id,
    WorkerId,
    ProductIds,
    CurrentProductId,
    FinishedProducts,
    Finished,
    CreatedAt,
    UpdatedAt,
}
