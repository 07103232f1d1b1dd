/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_access_secret_file: "test_access_secret".to_string(),
        jwt_refresh_secret_file: "test_refresh_secret".to_string(),
        access_token_expiration: 1800,
        refresh_token_expiration: 86400,
        max_page_size: 100,
        super_user_username: "superadmin".to_string(),
        super_user_password: "password".to_string(),
        super_user_password_file: None,
        cors_allow: false,
        report_errors: false,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    Arc::new(ServerState { db, cli })
}
