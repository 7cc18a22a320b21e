// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obot-core: Core domain types for the Order Bots pool

pub mod bot;
pub mod clock;
pub mod event;
pub mod id;
pub mod order;
pub mod summary;
pub mod time_fmt;

pub use bot::{BotId, BotStatus};
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::Event;
pub use id::{IdExhausted, IdSequence};
pub use order::{Order, OrderClass, OrderId, OrderStatus, ParseOrderClassError};
pub use summary::Summary;
pub use time_fmt::{duration_ms, format_secs};
