use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hospital::Table)
                    .if_not_exists()
                    .col(pk_auto(Hospital::Id))
                    .col(string_len_uniq(Hospital::Name, 50))
                    .col(string(Hospital::Address))
                    .col(string(Hospital::District))
                    .col(string(Hospital::Province))
                    .col(string_len(Hospital::Postalcode, 5))
                    .col(string_null(Hospital::Tel))
                    .col(string(Hospital::Region))
                    .col(
                        timestamp_with_time_zone(Hospital::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hospital::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hospital {
    Table,
    Id,
    Name,
    Address,
    District,
    Province,
    Postalcode,
    Tel,
    Region,
    CreatedAt,
}
