/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;
pub mod requests;

use axum::routing::{get, post};
use axum::{Router, middleware};
use core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let mut app = Router::new()
        .route(
            "/api/auth/me",
            get(endpoints::auth::get_me).patch(endpoints::auth::patch_me),
        )
        .route(
            "/api/auth/me/change-password",
            axum::routing::patch(endpoints::auth::patch_me_password),
        )
        .route(
            "/api/user",
            get(endpoints::users::get).post(endpoints::users::post),
        )
        .route(
            "/api/user/{user}",
            get(endpoints::users::get_user)
                .patch(endpoints::users::patch_user)
                .delete(endpoints::users::delete_user),
        )
        .route(
            "/api/user/{user}/change-password",
            axum::routing::patch(endpoints::users::patch_user_password),
        )
        .route(
            "/api/material",
            get(endpoints::materials::get).post(endpoints::materials::post),
        )
        .route(
            "/api/material/{material}",
            get(endpoints::materials::get_material)
                .patch(endpoints::materials::patch_material)
                .delete(endpoints::materials::delete_material),
        )
        .route(
            "/api/operator",
            get(endpoints::operators::get).post(endpoints::operators::post),
        )
        .route(
            "/api/operator/{user}",
            get(endpoints::operators::get_operator)
                .patch(endpoints::operators::patch_operator)
                .delete(endpoints::operators::delete_operator),
        )
        .route(
            "/api/forklift",
            get(endpoints::forklifts::get).post(endpoints::forklifts::post),
        )
        .route(
            "/api/forklift/{user}",
            get(endpoints::forklifts::get_forklift)
                .patch(endpoints::forklifts::patch_forklift)
                .delete(endpoints::forklifts::delete_forklift),
        )
        .route(
            "/api/admin",
            get(endpoints::admins::get).post(endpoints::admins::post),
        )
        .route(
            "/api/admin/{user}",
            get(endpoints::admins::get_admin)
                .patch(endpoints::admins::patch_admin)
                .delete(endpoints::admins::delete_admin),
        )
        .route(
            "/api/order",
            get(endpoints::orders::get).post(endpoints::orders::post),
        )
        .route(
            "/api/order/{order}",
            get(endpoints::orders::get_order).delete(endpoints::orders::delete_order),
        )
        .route(
            "/api/order/{order}/confirm",
            post(endpoints::orders::post_confirm),
        )
        .route(
            "/api/order/{order}/no-material",
            post(endpoints::orders::post_no_material),
        )
        .route(
            "/api/order/{order}/delivered",
            post(endpoints::orders::post_delivered),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/auth/refresh", post(endpoints::auth::post_refresh))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404);

    if state.cli.cors_allow {
        app = app.layer(CorsLayer::permissive());
    }

    let app = app.with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
