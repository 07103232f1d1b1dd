/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_OPERATOR: &str = "operator";
pub const ROLE_FORKLIFT: &str = "forklift";

pub const BASE_ROLES: [&str; 3] = [ROLE_ADMIN, ROLE_OPERATOR, ROLE_FORKLIFT];
