use sea_orm_migration::{prelude::*, schema::*};

const UNIQUE_OBSERVATION_INDEX: &str = "idx_world_bank_data_country_indicator_year";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorldBankData::Table)
                    .if_not_exists()
                    .col(pk_auto(WorldBankData::Id))
                    .col(string_len(WorldBankData::CountryCode, 3))
                    .col(string_len(WorldBankData::CountryName, 100))
                    .col(string_len(WorldBankData::IndicatorCode, 50))
                    .col(string_len(WorldBankData::IndicatorName, 200))
                    .col(integer(WorldBankData::Year))
                    .col(double_null(WorldBankData::Value))
                    .col(timestamp_with_time_zone(WorldBankData::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_OBSERVATION_INDEX)
                    .table(WorldBankData::Table)
                    .col(WorldBankData::CountryCode)
                    .col(WorldBankData::IndicatorCode)
                    .col(WorldBankData::Year)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UNIQUE_OBSERVATION_INDEX)
                    .table(WorldBankData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorldBankData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorldBankData {
    Table,
    Id,
    CountryCode,
    CountryName,
    IndicatorCode,
    IndicatorName,
    Year,
    Value,
    CreatedAt,
}
