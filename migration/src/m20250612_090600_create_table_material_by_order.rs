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
                    .table(MaterialByOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MaterialByOrder::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MaterialByOrder::Order).uuid().not_null())
                    .col(ColumnDef::new(MaterialByOrder::Material).uuid().not_null())
                    .col(
                        ColumnDef::new(MaterialByOrder::Quantity)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-material_by_order-order")
                            .from(MaterialByOrder::Table, MaterialByOrder::Order)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-material_by_order-material")
                            .from(MaterialByOrder::Table, MaterialByOrder::Material)
                            .to(Materials::Table, Materials::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaterialByOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MaterialByOrder {
    Table,
    Id,
    Order,
    Material,
    Quantity,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Materials {
    Table,
    Id,
}
