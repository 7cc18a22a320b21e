// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types emitted on every observable transition

use crate::bot::BotId;
use crate::order::{OrderClass, OrderId, OrderStatus};
use crate::summary::Summary;
use crate::time_fmt::format_secs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transitions reported to the event sink, in the order they happen.
///
/// Serializes with `{"type": "event:name", ...fields}` format. `Display`
/// renders the human-readable transcript message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // -- order --
    #[serde(rename = "order:created")]
    OrderCreated { id: OrderId, class: OrderClass },

    #[serde(rename = "order:picked_up")]
    OrderPickedUp {
        id: OrderId,
        class: OrderClass,
        bot: BotId,
    },

    #[serde(rename = "order:completed")]
    OrderCompleted {
        id: OrderId,
        class: OrderClass,
        bot: BotId,
        processing_ms: u64,
    },

    // -- bot --
    #[serde(rename = "bot:created")]
    BotCreated { bot: BotId },

    /// A bot finished an order and found nothing left to pick up
    #[serde(rename = "bot:idle")]
    BotIdle { bot: BotId },

    #[serde(rename = "bot:destroyed")]
    BotDestroyedIdle { bot: BotId },

    /// A processing bot was removed and its order went back to pending
    #[serde(rename = "bot:preempted")]
    BotDestroyedProcessing { bot: BotId, order: OrderId },

    // -- status --
    #[serde(rename = "status:final")]
    FinalStatus { summary: Summary },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::OrderCreated { .. } => "order:created",
            Event::OrderPickedUp { .. } => "order:picked_up",
            Event::OrderCompleted { .. } => "order:completed",
            Event::BotCreated { .. } => "bot:created",
            Event::BotIdle { .. } => "bot:idle",
            Event::BotDestroyedIdle { .. } => "bot:destroyed",
            Event::BotDestroyedProcessing { .. } => "bot:preempted",
            Event::FinalStatus { .. } => "status:final",
        }
    }

    /// Compact `key=value` form for structured logs.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::OrderCreated { id, class } => format!("{t} id={id} class={class}"),
            Event::OrderPickedUp { id, class, bot } => {
                format!("{t} id={id} class={class} bot={bot}")
            }
            Event::OrderCompleted {
                id,
                class,
                bot,
                processing_ms,
            } => format!("{t} id={id} class={class} bot={bot} ms={processing_ms}"),
            Event::BotCreated { bot } | Event::BotIdle { bot } | Event::BotDestroyedIdle { bot } => {
                format!("{t} bot={bot}")
            }
            Event::BotDestroyedProcessing { bot, order } => format!("{t} bot={bot} order={order}"),
            Event::FinalStatus { summary } => format!(
                "{t} completed={} vip={} normal={} bots={} pending={}",
                summary.completed_total(),
                summary.completed_vip,
                summary.completed_normal,
                summary.active_bots,
                summary.pending
            ),
        }
    }

    /// Order this event is about, if any.
    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            Event::OrderCreated { id, .. }
            | Event::OrderPickedUp { id, .. }
            | Event::OrderCompleted { id, .. } => Some(*id),
            Event::BotDestroyedProcessing { order, .. } => Some(*order),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::OrderCreated { id, class } => {
                write!(f, "Created {class} Order #{id} - Status: {}", OrderStatus::Pending)
            }
            Event::OrderPickedUp { id, class, bot } => write!(
                f,
                "Bot #{bot} picked up {class} Order #{id} - Status: {}",
                OrderStatus::Processing
            ),
            Event::OrderCompleted {
                id,
                class,
                bot,
                processing_ms,
            } => write!(
                f,
                "Bot #{bot} completed {class} Order #{id} - Status: {} (Processing time: {})",
                OrderStatus::Complete,
                format_secs(*processing_ms)
            ),
            Event::BotCreated { bot } => write!(f, "Bot #{bot} created - Status: ACTIVE"),
            Event::BotIdle { bot } => write!(f, "Bot #{bot} is now IDLE - No pending orders"),
            Event::BotDestroyedIdle { bot } => write!(f, "Bot #{bot} destroyed while IDLE"),
            Event::BotDestroyedProcessing { bot, order } => write!(
                f,
                "Bot #{bot} destroyed while processing Order #{order} - Order returned to PENDING"
            ),
            Event::FinalStatus { summary } => write!(f, "{}", summary.lines().join("\n")),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
