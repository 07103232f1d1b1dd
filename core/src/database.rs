/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Condition, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::BASE_ROLES;
use super::input::load_secret;
use super::roles::RoleProfile;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db, cli).await.context("Failed to seed database")?;
    Ok(db)
}

/// Seeds the role catalog and the bootstrap super user.
async fn update_db(db: &DatabaseConnection, cli: &Cli) -> Result<(), DbErr> {
    for role in BASE_ROLES {
        let existing = ERole::find_by_id(role).one(db).await?;

        if existing.is_none() {
            let arole = ARole {
                id: Set(role.to_string()),
            };

            arole.insert(db).await?;
        }
    }

    let super_user = EUser::find()
        .filter(CUser::SuperUser.eq(true))
        .one(db)
        .await?;

    if super_user.is_none() {
        let password = match &cli.super_user_password_file {
            Some(file) => load_secret(file),
            None => cli.super_user_password.clone(),
        };

        let now = Utc::now().naive_utc();
        let auser = AUser {
            id: Set(Uuid::new_v4()),
            username: Set(cli.super_user_username.clone()),
            password: Set(generate_hash(password)),
            active: Set(true),
            super_user: Set(true),
            created_at: Set(now),
            modified_at: Set(now),
        };

        auser.insert(db).await?;
        tracing::info!("Created bootstrap super user {}", cli.super_user_username);
    }

    Ok(())
}

pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<MUser>, DbErr> {
    EUser::find()
        .filter(CUser::Username.eq(username))
        .one(db)
        .await
}

pub async fn get_role_assignment(
    db: &DatabaseConnection,
    user_id: Uuid,
    role: &str,
) -> Result<Option<MRoleByUser>, DbErr> {
    ERoleByUser::find()
        .filter(
            Condition::all()
                .add(CRoleByUser::User.eq(user_id))
                .add(CRoleByUser::Role.eq(role)),
        )
        .one(db)
        .await
}

pub async fn load_role_ids(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<String>, DbErr> {
    let assignments = ERoleByUser::find()
        .filter(CRoleByUser::User.eq(user_id))
        .all(db)
        .await?;

    Ok(assignments
        .into_iter()
        .map(|assignment| assignment.role)
        .collect())
}

/// Creates a user together with its role assignment and the matching
/// profile row in one transaction, so a half-attached profile can
/// never be observed.
pub async fn create_user_with_profile(
    db: &DatabaseConnection,
    username: &str,
    password_hash: String,
    active: bool,
    profile: RoleProfile,
) -> Result<MUser, DbErr> {
    let txn = db.begin().await?;
    let now = Utc::now().naive_utc();

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password: Set(password_hash),
        active: Set(active),
        super_user: Set(false),
        created_at: Set(now),
        modified_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let assignment = ARoleByUser {
        id: Set(Uuid::new_v4()),
        role: Set(profile.role_id().to_string()),
        user: Set(user.id),
    }
    .insert(&txn)
    .await?;

    match profile {
        RoleProfile::Admin {
            first_name,
            last_name,
        } => {
            AAdmin {
                id: Set(assignment.id),
                first_name: Set(first_name),
                last_name: Set(last_name),
            }
            .insert(&txn)
            .await?;
        }
        RoleProfile::Operator { machine, area } => {
            AOperator {
                id: Set(assignment.id),
                machine: Set(machine),
                area: Set(area),
            }
            .insert(&txn)
            .await?;
        }
        RoleProfile::Forklift { name } => {
            AForklift {
                id: Set(assignment.id),
                name: Set(name),
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    Ok(user)
}
