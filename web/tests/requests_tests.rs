/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use core::filter::{OrderFilter, UserFilter};
use web::requests::{PageParams, parse_filter};

#[test]
fn test_page_defaults() {
    let params: PageParams = serde_urlencoded::from_str("").unwrap();

    assert_eq!(params.page, 1);
    assert_eq!(params.skip, 0);
    assert_eq!(params.size, 100);
}

#[test]
fn test_page_size_is_clamped() {
    let params: PageParams = serde_urlencoded::from_str("size=1000").unwrap();
    let window = params.clamp(100);

    assert_eq!(window.size, 100);
}

#[test]
fn test_absolute_offset_folds_page_and_skip() {
    let params: PageParams = serde_urlencoded::from_str("page=3&size=10&skip=5").unwrap();
    let window = params.clamp(100);

    assert_eq!(window.page, 3);
    assert_eq!(window.size, 10);
    assert_eq!(window.skip, 25);
}

#[test]
fn test_zero_page_is_treated_as_first() {
    let params: PageParams = serde_urlencoded::from_str("page=0&size=10").unwrap();
    let window = params.clamp(100);

    assert_eq!(window.page, 1);
    assert_eq!(window.skip, 0);
}

#[test]
fn test_parse_filter_accepts_matching_shape() {
    let filter: Option<UserFilter> = parse_filter(Some("username_like=ali&active=true"));

    let filter = filter.unwrap();
    assert_eq!(filter.username_like.as_deref(), Some("ali"));
    assert_eq!(filter.active, Some(true));
}

#[test]
fn test_parse_filter_falls_back_to_no_filter() {
    // A predicate that does not type-match the filter shape means the
    // whole filter is dropped, not an error.
    let filter: Option<OrderFilter> = parse_filter(Some("created_gt=yesterday"));

    assert!(filter.is_none());
}

#[test]
fn test_parse_filter_ignores_pagination_keys() {
    let filter: Option<OrderFilter> = parse_filter(Some("page=2&size=10&canceled=false"));

    let filter = filter.unwrap();
    assert_eq!(filter.canceled, Some(false));
}

#[test]
fn test_parse_filter_none_query() {
    let filter: Option<OrderFilter> = parse_filter(None);

    assert!(filter.is_none());
}
