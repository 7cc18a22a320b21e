// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot pool: membership in creation order plus each bot's own slot

use crate::work::WorkHandle;
use obot_core::{BotId, BotStatus, IdExhausted, IdSequence, Order, OrderId};
use parking_lot::{Mutex, MutexGuard};

/// A bot's mutable fields, guarded by the bot's own lock.
///
/// The bot is Processing exactly when `order` is set.
#[derive(Default)]
pub(crate) struct BotSlot {
    pub order: Option<Order>,
    pub work: Option<WorkHandle>,
    /// Incremented each time the bot picks up an order
    pub cycle: u64,
}

impl BotSlot {
    pub fn status(&self) -> BotStatus {
        if self.order.is_some() {
            BotStatus::Processing
        } else {
            BotStatus::Idle
        }
    }
}

/// A unit of processing capacity.
pub struct Bot {
    id: BotId,
    slot: Mutex<BotSlot>,
}

impl Bot {
    fn new(id: BotId) -> Self {
        Self {
            id,
            slot: Mutex::new(BotSlot::default()),
        }
    }

    pub fn id(&self) -> BotId {
        self.id
    }

    pub fn status(&self) -> BotStatus {
        self.slot.lock().status()
    }

    /// Snapshot of the order this bot is working on.
    pub fn current_order(&self) -> Option<Order> {
        self.slot.lock().order.clone()
    }

    pub fn current_order_id(&self) -> Option<OrderId> {
        self.slot.lock().order.as_ref().map(|o| o.id)
    }

    pub(crate) fn slot(&self) -> MutexGuard<'_, BotSlot> {
        self.slot.lock()
    }

    /// Stop the bot's current cycle, if any, and hand back its order.
    ///
    /// The cancel signal is raised before the order leaves the slot. The
    /// returned order is still marked Processing; the caller requeues it.
    pub(crate) fn preempt(&self) -> Option<Order> {
        let mut slot = self.slot.lock();
        if let Some(mut work) = slot.work.take() {
            if !work.cancel() {
                tracing::debug!(bot = %self.id, "timer already fired, completion will be discarded");
            }
        }
        slot.order.take()
    }
}

/// Bots in creation order.
pub struct BotPool {
    ids: IdSequence,
    bots: Vec<Bot>,
}

impl BotPool {
    /// Create an empty pool whose first bot gets `first_id`.
    pub fn new(first_id: u64) -> Self {
        Self {
            ids: IdSequence::starting_at(first_id),
            bots: Vec::new(),
        }
    }

    /// Append a new Idle bot.
    pub fn add(&mut self) -> Result<BotId, IdExhausted> {
        let id = self.ids.next_id()?;
        self.bots.push(Bot::new(id));
        Ok(id)
    }

    /// Remove the most recently added bot still in the pool.
    pub fn remove_newest(&mut self) -> Option<Bot> {
        self.bots.pop()
    }

    pub fn get(&self, id: BotId) -> Option<&Bot> {
        self.bots.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BotId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bot> {
        self.bots.iter()
    }

    pub fn ids(&self) -> Vec<BotId> {
        self.bots.iter().map(Bot::id).collect()
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
