/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::Operator).uuid().not_null())
                    .col(ColumnDef::new(Orders::Forklift).uuid().not_null())
                    .col(
                        ColumnDef::new(Orders::State)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Orders::EstimateAt).date_time().not_null())
                    .col(ColumnDef::new(Orders::OrderAt).date_time())
                    .col(ColumnDef::new(Orders::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Orders::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-orders-operator")
                            .from(Orders::Table, Orders::Operator)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-orders-forklift")
                            .from(Orders::Table, Orders::Forklift)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    Operator,
    Forklift,
    State,
    EstimateAt,
    OrderAt,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
