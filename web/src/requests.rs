/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    100
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: default_page(),
            skip: 0,
            size: default_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub size: u64,
    pub skip: u64,
}

impl PageParams {
    /// Caps the requested page size at the configured maximum and
    /// folds the page number into an absolute offset.
    pub fn clamp(&self, max_size: u64) -> PageWindow {
        let size = self.size.min(max_size);
        let page = self.page.max(1);

        PageWindow {
            page,
            size,
            skip: (page - 1).saturating_mul(size).saturating_add(self.skip),
        }
    }
}

/// Deserializes an entity filter from the raw query string. Anything
/// that does not match the expected filter shape means "no filter".
pub fn parse_filter<F: DeserializeOwned>(query: Option<&str>) -> Option<F> {
    query.and_then(|query| serde_urlencoded::from_str(query).ok())
}
