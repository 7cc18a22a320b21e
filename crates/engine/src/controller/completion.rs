// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion path: a bot's timer elapsed

use super::Shared;
use obot_adapters::EventSink;
use obot_core::{duration_ms, BotId, BotStatus, Clock, Event};
use std::sync::Arc;

impl<S, C> Shared<S, C>
where
    S: EventSink,
    C: Clock,
{
    /// Finish the order a bot picked up on `cycle`.
    ///
    /// Runs on the bot's timer task once the duration elapsed. If the bot
    /// was removed, or moved on to another cycle, before this got the lock,
    /// the preemption already owns the order and this is discarded.
    pub(super) fn complete(self: &Arc<Self>, bot_id: BotId, cycle: u64) {
        let mut floor = self.lock();

        let order = {
            let Some(bot) = floor.pool.get(bot_id) else {
                tracing::debug!(bot = %bot_id, cycle, "bot removed before completion, discarding");
                return;
            };
            let mut slot = bot.slot();
            if slot.cycle != cycle {
                tracing::warn!(
                    bot = %bot_id,
                    cycle,
                    current = slot.cycle,
                    "stale completion, discarding"
                );
                return;
            }
            let Some(mut order) = slot.order.take() else {
                tracing::warn!(bot = %bot_id, cycle, "completion for idle bot, discarding");
                return;
            };
            slot.work = None;
            order.complete(self.clock.now());
            order
        };

        let processing_ms = order.processing_time().map(duration_ms).unwrap_or_default();
        self.emit(Event::OrderCompleted {
            id: order.id,
            class: order.class,
            bot: bot_id,
            processing_ms,
        });
        floor.registry.complete(order);

        self.assign_pending(&mut floor);

        let still_idle = floor
            .pool
            .get(bot_id)
            .is_some_and(|bot| bot.status() == BotStatus::Idle);
        if still_idle {
            self.emit(Event::BotIdle { bot: bot_id });
        }
        self.check(&floor);
    }
}
