// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Order Bots engine: order registry, bot pool, and the controller that
//! assigns orders to bots

mod clock;
pub mod config;
mod controller;
mod error;
pub mod pool;
pub mod registry;
pub mod work;

pub use clock::TokioClock;
pub use config::EngineConfig;
pub use controller::{BotSnapshot, Controller};
pub use error::EngineError;
pub use pool::{Bot, BotPool};
pub use registry::OrderRegistry;
pub use work::{WorkHandle, WorkOutcome};
