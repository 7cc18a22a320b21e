// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment pass: idle bots take pending orders

use super::floor::Floor;
use super::Shared;
use crate::work::WorkHandle;
use obot_adapters::EventSink;
use obot_core::{BotId, Clock, Event};
use std::sync::Arc;

impl<S, C> Shared<S, C>
where
    S: EventSink,
    C: Clock,
{
    /// Walk the pool in creation order and hand the head of the queue to
    /// each idle bot. The only place an order leaves the pending queue for
    /// a bot.
    ///
    /// Safe to call redundantly: with no idle bot or no pending order it
    /// changes nothing and emits nothing.
    pub(super) fn assign_pending(self: &Arc<Self>, floor: &mut Floor) -> usize {
        let Floor { registry, pool } = floor;
        let mut assigned = 0;

        for bot in pool.iter() {
            if !registry.has_pending() {
                break;
            }
            let mut slot = bot.slot();
            if slot.order.is_some() {
                continue;
            }
            let Some(mut order) = registry.pop_next() else {
                break;
            };

            order.start(bot.id(), self.clock.now());
            slot.cycle += 1;
            let cycle = slot.cycle;
            self.emit(Event::OrderPickedUp {
                id: order.id,
                class: order.class,
                bot: bot.id(),
            });
            slot.work = Some(self.start_work(bot.id(), cycle));
            slot.order = Some(order);
            assigned += 1;
        }

        assigned
    }

    /// Start the bot's fixed-duration timer for one cycle.
    fn start_work(self: &Arc<Self>, bot: BotId, cycle: u64) -> WorkHandle {
        let shared = Arc::downgrade(self);
        WorkHandle::spawn(&self.runtime, self.config.processing_time, move || {
            // Controller gone: nothing left to report to
            if let Some(shared) = shared.upgrade() {
                shared.complete(bot, cycle);
            }
        })
    }
}
