// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order model: identity, priority class, and lifecycle status

use crate::bot::BotId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

crate::define_id! {
    /// Unique identifier for an order, allocated in creation order.
    pub struct OrderId;
}

/// Priority class of an order. VIP orders are served before Normal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderClass {
    Normal,
    Vip,
}

impl OrderClass {
    pub fn is_vip(self) -> bool {
        matches!(self, OrderClass::Vip)
    }
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderClass::Normal => write!(f, "Normal"),
            OrderClass::Vip => write!(f, "VIP"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order class: {0} (expected 'normal' or 'vip')")]
pub struct ParseOrderClassError(pub String);

impl FromStr for OrderClass {
    type Err = ParseOrderClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(OrderClass::Normal),
            "vip" => Ok(OrderClass::Vip),
            _ => Err(ParseOrderClassError(s.to_string())),
        }
    }
}

/// Lifecycle status of an order.
///
/// Each status corresponds to exactly one collection: the pending queue,
/// a bot's slot, or the completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Complete,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Processing => write!(f, "PROCESSING"),
            OrderStatus::Complete => write!(f, "COMPLETE"),
        }
    }
}

/// A single order and its timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub class: OrderClass,
    pub status: OrderStatus,
    /// Bot currently holding this order (set only while Processing)
    pub bot: Option<BotId>,
    pub created_at: Instant,
    pub started_at: Option<Instant>,
    pub completed_at: Option<Instant>,
}

impl Order {
    /// Build a fresh Pending order.
    pub fn new(id: OrderId, class: OrderClass, now: Instant) -> Self {
        Self {
            id,
            class,
            status: OrderStatus::Pending,
            bot: None,
            created_at: now,
            started_at: None,
            completed_at: None,
        }
    }

    /// Hand the order to a bot.
    pub fn start(&mut self, bot: BotId, now: Instant) {
        self.status = OrderStatus::Processing;
        self.bot = Some(bot);
        self.started_at = Some(now);
    }

    /// Mark the order finished. The bot assignment is kept as a record of
    /// who completed it.
    pub fn complete(&mut self, now: Instant) {
        self.status = OrderStatus::Complete;
        self.completed_at = Some(now);
    }

    /// Return a preempted order to Pending. `id` and `created_at` survive.
    pub fn release(&mut self) {
        self.status = OrderStatus::Pending;
        self.bot = None;
        self.started_at = None;
    }

    /// Time between pickup and completion, if both happened.
    pub fn processing_time(&self) -> Option<Duration> {
        let started = self.started_at?;
        let completed = self.completed_at?;
        Some(completed.saturating_duration_since(started))
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
