/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod crud;
pub mod database;
pub mod filter;
pub mod input;
pub mod orders;
pub mod roles;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
