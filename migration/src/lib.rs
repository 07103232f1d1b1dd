/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250612_090000_create_table_users;
mod m20250612_090100_create_table_roles;
mod m20250612_090200_create_table_role_by_user;
mod m20250612_090300_create_table_operators;
mod m20250612_090310_create_table_forklifts;
mod m20250612_090320_create_table_admins;
mod m20250612_090400_create_table_materials;
mod m20250612_090500_create_table_orders;
mod m20250612_090600_create_table_material_by_order;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_090000_create_table_users::Migration),
            Box::new(m20250612_090100_create_table_roles::Migration),
            Box::new(m20250612_090200_create_table_role_by_user::Migration),
            Box::new(m20250612_090300_create_table_operators::Migration),
            Box::new(m20250612_090310_create_table_forklifts::Migration),
            Box::new(m20250612_090320_create_table_admins::Migration),
            Box::new(m20250612_090400_create_table_materials::Migration),
            Box::new(m20250612_090500_create_table_orders::Migration),
            Box::new(m20250612_090600_create_table_material_by_order::Migration),
        ]
    }
}
