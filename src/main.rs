/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use core::init_state;
use core::types::Cli;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let _sentry_guard = cli
        .report_errors
        .then(|| sentry::init(sentry::ClientOptions::default()));

    let state = init_state(cli).await?;

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
