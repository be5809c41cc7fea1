use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SecretsUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SecretsUser::Id))
                    .col(string_null(SecretsUser::Username).unique_key())
                    .col(string_null(SecretsUser::PasswordHash))
                    .col(string_null(SecretsUser::GoogleId).unique_key())
                    .col(text_null(SecretsUser::Secret))
                    .col(timestamp(SecretsUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SecretsUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SecretsUser {
    Table,
    Id,
    Username,
    PasswordHash,
    GoogleId,
    Secret,
    CreatedAt,
}
