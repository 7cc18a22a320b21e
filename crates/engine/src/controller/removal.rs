// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Removal path: shrink the pool and recover in-flight work

use super::Shared;
use obot_adapters::EventSink;
use obot_core::{BotId, Clock, Event};
use std::sync::Arc;

impl<S, C> Shared<S, C>
where
    S: EventSink,
    C: Clock,
{
    /// Remove the newest bot.
    ///
    /// Membership changes first, under the floor lock, so a timer that
    /// fires concurrently can no longer find the bot and its completion is
    /// discarded: cancellation always wins.
    pub(super) fn remove_newest_bot(self: &Arc<Self>) -> Option<BotId> {
        let mut floor = self.lock();
        let Some(bot) = floor.pool.remove_newest() else {
            tracing::debug!("remove requested on empty pool");
            return None;
        };

        match bot.preempt() {
            None => {
                self.emit(Event::BotDestroyedIdle { bot: bot.id() });
            }
            Some(order) => {
                let order_id = order.id;
                floor.registry.reinsert(order);
                self.emit(Event::BotDestroyedProcessing {
                    bot: bot.id(),
                    order: order_id,
                });
                self.assign_pending(&mut floor);
            }
        }

        self.check(&floor);
        Some(bot.id())
    }
}
