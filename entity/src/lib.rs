/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod forklift;
pub mod material;
pub mod material_by_order;
pub mod operator;
pub mod order;
pub mod role;
pub mod role_by_user;
pub mod user;
