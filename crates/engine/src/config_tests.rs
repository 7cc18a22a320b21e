// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn defaults_are_valid() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[parameterized(
    order_base = { u64::MAX, 1, "first_order_id" },
    bot_base = { 1001, u64::MAX, "first_bot_id" },
    order_checked_first = { u64::MAX, u64::MAX, "first_order_id" },
)]
fn unincrementable_base_is_rejected(order: u64, bot: u64, key: &str) {
    let config = EngineConfig {
        first_order_id: order,
        first_bot_id: bot,
        ..EngineConfig::default()
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, EngineError::IdBase { key: k, value: u64::MAX } if k == key));
}

#[test]
fn base_one_below_max_is_accepted() {
    let config = EngineConfig {
        first_order_id: u64::MAX - 1,
        ..EngineConfig::default()
    };
    assert_eq!(config.exhausted_id_base(), None);
}
