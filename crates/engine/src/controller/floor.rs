// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared state behind the controller lock

use crate::error::EngineError;
use crate::pool::BotPool;
use crate::registry::OrderRegistry;
use obot_core::{OrderClass, OrderStatus, Summary};
use std::collections::HashSet;

/// Everything the controller's lock guards: the queue, the completed set, and
/// pool membership. In-flight orders live in the bots' slots.
pub(crate) struct Floor {
    pub registry: OrderRegistry,
    pub pool: BotPool,
}

impl Floor {
    pub fn new(first_order_id: u64, first_bot_id: u64) -> Self {
        Self {
            registry: OrderRegistry::new(first_order_id),
            pool: BotPool::new(first_bot_id),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            completed_vip: self.registry.completed_count(OrderClass::Vip),
            completed_normal: self.registry.completed_count(OrderClass::Normal),
            active_bots: self.pool.len(),
            pending: self.registry.pending_len(),
        }
    }

    /// Check every structural invariant.
    ///
    /// Each created order must sit in exactly one of pending, a bot slot, or
    /// completed, with a status matching that place. The queue must be a VIP
    /// prefix followed by Normals, and no bot may idle while orders wait.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen = HashSet::new();
        let mut in_vip_prefix = true;

        for order in self.registry.pending() {
            if order.status != OrderStatus::Pending || order.bot.is_some() {
                return Err(invariant(format!(
                    "queued order #{} is {} on {:?}",
                    order.id, order.status, order.bot
                )));
            }
            if order.class.is_vip() && !in_vip_prefix {
                return Err(invariant(format!(
                    "VIP order #{} queued behind a Normal order",
                    order.id
                )));
            }
            in_vip_prefix &= order.class.is_vip();
            if !seen.insert(order.id) {
                return Err(invariant(format!("order #{} queued twice", order.id)));
            }
        }

        for bot in self.pool.iter() {
            let slot = bot.slot();
            match &slot.order {
                Some(order) => {
                    if order.status != OrderStatus::Processing || order.bot != Some(bot.id()) {
                        return Err(invariant(format!(
                            "bot #{} holds order #{} marked {} for {:?}",
                            bot.id(),
                            order.id,
                            order.status,
                            order.bot
                        )));
                    }
                    if slot.work.is_none() {
                        return Err(invariant(format!("bot #{} is processing without a timer", bot.id())));
                    }
                    if !seen.insert(order.id) {
                        return Err(invariant(format!("order #{} held twice", order.id)));
                    }
                }
                None => {
                    if slot.work.is_some() {
                        return Err(invariant(format!("idle bot #{} still has a timer", bot.id())));
                    }
                    if self.registry.has_pending() {
                        return Err(invariant(format!(
                            "bot #{} is idle while {} orders wait",
                            bot.id(),
                            self.registry.pending_len()
                        )));
                    }
                }
            }
        }

        for order in self.registry.completed() {
            if order.status != OrderStatus::Complete {
                return Err(invariant(format!(
                    "completed order #{} is {}",
                    order.id, order.status
                )));
            }
            if !seen.insert(order.id) {
                return Err(invariant(format!("order #{} completed while tracked elsewhere", order.id)));
            }
        }

        let created = self.registry.created_count();
        if seen.len() != created {
            return Err(invariant(format!(
                "{} orders created but {} tracked",
                created,
                seen.len()
            )));
        }
        Ok(())
    }
}

fn invariant(message: String) -> EngineError {
    EngineError::Invariant(message)
}
