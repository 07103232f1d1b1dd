/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "MiMaterial", display_name = "MiMaterial", bin_name = "mimaterial-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "MIMATERIAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "MIMATERIAL_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "MIMATERIAL_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "MIMATERIAL_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "MIMATERIAL_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "MIMATERIAL_JWT_ACCESS_SECRET_FILE")]
    pub jwt_access_secret_file: String,
    #[arg(long, env = "MIMATERIAL_JWT_REFRESH_SECRET_FILE")]
    pub jwt_refresh_secret_file: String,
    #[arg(long, env = "MIMATERIAL_ACCESS_TOKEN_EXPIRATION", value_parser = greater_than_zero::<i64>, default_value = "1800")]
    pub access_token_expiration: i64,
    #[arg(long, env = "MIMATERIAL_REFRESH_TOKEN_EXPIRATION", value_parser = greater_than_zero::<i64>, default_value = "86400")]
    pub refresh_token_expiration: i64,
    #[arg(long, env = "MIMATERIAL_MAX_PAGE_SIZE", value_parser = greater_than_zero::<u64>, default_value = "100")]
    pub max_page_size: u64,
    #[arg(long, env = "MIMATERIAL_SUPER_USER_USERNAME", default_value = "superadmin")]
    pub super_user_username: String,
    #[arg(long, env = "MIMATERIAL_SUPER_USER_PASSWORD", default_value = "password")]
    pub super_user_password: String,
    #[arg(long, env = "MIMATERIAL_SUPER_USER_PASSWORD_FILE")]
    pub super_user_password_file: Option<String>,
    #[arg(long, env = "MIMATERIAL_CORS_ALLOW", default_value = "true")]
    pub cors_allow: bool,
    #[arg(long, env = "MIMATERIAL_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

/// The authenticated actor behind a request: the user record plus the
/// ids of every role assigned to it.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: MUser,
    pub roles: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Paginated<T> {
    pub data: T,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

pub type EAdmin = admin::Entity;
pub type EForklift = forklift::Entity;
pub type EMaterial = material::Entity;
pub type EMaterialByOrder = material_by_order::Entity;
pub type EOperator = operator::Entity;
pub type EOrder = order::Entity;
pub type ERole = role::Entity;
pub type ERoleByUser = role_by_user::Entity;
pub type EUser = user::Entity;

pub type MAdmin = admin::Model;
pub type MForklift = forklift::Model;
pub type MMaterial = material::Model;
pub type MMaterialByOrder = material_by_order::Model;
pub type MOperator = operator::Model;
pub type MOrder = order::Model;
pub type MRole = role::Model;
pub type MRoleByUser = role_by_user::Model;
pub type MUser = user::Model;

pub type AAdmin = admin::ActiveModel;
pub type AForklift = forklift::ActiveModel;
pub type AMaterial = material::ActiveModel;
pub type AMaterialByOrder = material_by_order::ActiveModel;
pub type AOperator = operator::ActiveModel;
pub type AOrder = order::ActiveModel;
pub type ARole = role::ActiveModel;
pub type ARoleByUser = role_by_user::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CAdmin = admin::Column;
pub type CForklift = forklift::Column;
pub type CMaterial = material::Column;
pub type CMaterialByOrder = material_by_order::Column;
pub type COperator = operator::Column;
pub type COrder = order::Column;
pub type CRole = role::Column;
pub type CRoleByUser = role_by_user::Column;
pub type CUser = user::Column;
