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
                    .table(Forklifts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Forklifts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Forklifts::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-forklifts-role_by_user")
                            .from(Forklifts::Table, Forklifts::Id)
                            .to(RoleByUser::Table, RoleByUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Forklifts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Forklifts {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum RoleByUser {
    Table,
    Id,
}
