// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller: the synchronized control surface over orders and bots

mod assign;
mod completion;
mod floor;
mod removal;

use crate::clock::TokioClock;
use crate::config::EngineConfig;
use crate::error::EngineError;
use floor::Floor;
use obot_adapters::EventSink;
use obot_core::{BotId, BotStatus, Clock, Event, Order, OrderClass, OrderId, Summary};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Read-only view of one bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSnapshot {
    pub id: BotId,
    pub status: BotStatus,
    pub order: Option<OrderId>,
}

/// State shared between the controller handles and the bots' timers
pub(crate) struct Shared<S, C> {
    floor: Mutex<Floor>,
    sink: S,
    clock: C,
    config: EngineConfig,
    runtime: Handle,
}

/// Order and bot control surface.
///
/// Every mutating call runs to completion under one lock and ends with an
/// assignment pass, so each call is atomic with respect to the others and to
/// bot completions. Events reach the sink in the order the transitions
/// happen. Clones share the same state.
pub struct Controller<S, C = TokioClock> {
    shared: Arc<Shared<S, C>>,
}

impl<S, C> Clone for Controller<S, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: EventSink> Controller<S, TokioClock> {
    /// Create a controller timed by tokio. Must be called inside a tokio runtime.
    pub fn new(sink: S, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_clock(sink, TokioClock, config)
    }
}

impl<S, C> Controller<S, C>
where
    S: EventSink,
    C: Clock,
{
    /// Create a controller with a custom timestamp clock.
    ///
    /// Fails when either id base in `config` cannot be incremented.
    pub fn with_clock(sink: S, clock: C, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| EngineError::NoRuntime)?;
        Ok(Self {
            shared: Arc::new(Shared {
                floor: Mutex::new(Floor::new(config.first_order_id, config.first_bot_id)),
                sink,
                clock,
                config,
                runtime,
            }),
        })
    }

    pub fn create_normal_order(&self) -> Result<OrderId, EngineError> {
        self.create_order(OrderClass::Normal)
    }

    pub fn create_vip_order(&self) -> Result<OrderId, EngineError> {
        self.create_order(OrderClass::Vip)
    }

    /// Queue a new order by class priority and run the assignment pass.
    ///
    /// Fails without changing state once order ids run out.
    pub fn create_order(&self, class: OrderClass) -> Result<OrderId, EngineError> {
        self.shared.create_order(class)
    }

    /// Add an idle bot at the end of the pool and run the assignment pass.
    pub fn add_bot(&self) -> Result<BotId, EngineError> {
        self.shared.add_bot()
    }

    /// Remove the newest bot. A processing bot's order goes back to pending.
    ///
    /// Returns the removed bot, or `None` when the pool is empty.
    pub fn remove_bot(&self) -> Option<BotId> {
        self.shared.remove_newest_bot()
    }

    /// Match idle bots with pending orders. Returns how many were picked up.
    pub fn assign_pending(&self) -> usize {
        let mut floor = self.shared.lock();
        self.shared.assign_pending(&mut floor)
    }

    /// Let time pass, then run the assignment pass.
    pub async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
        self.assign_pending();
    }

    pub fn summary(&self) -> Summary {
        self.shared.lock().summary()
    }

    /// Emit the final status report and return it.
    pub fn print_status(&self) -> Summary {
        let floor = self.shared.lock();
        let summary = floor.summary();
        self.shared.emit(Event::FinalStatus { summary });
        summary
    }

    /// Pending orders in service order.
    pub fn pending_orders(&self) -> Vec<Order> {
        self.shared.lock().registry.pending().cloned().collect()
    }

    /// Orders currently held by bots, in pool order.
    pub fn processing_orders(&self) -> Vec<Order> {
        let floor = self.shared.lock();
        floor
            .pool
            .iter()
            .filter_map(|bot| bot.current_order())
            .collect()
    }

    /// Completed orders in completion order.
    pub fn completed_orders(&self) -> Vec<Order> {
        self.shared.lock().registry.completed().to_vec()
    }

    /// Bots in creation order.
    pub fn bots(&self) -> Vec<BotSnapshot> {
        let floor = self.shared.lock();
        floor
            .pool
            .iter()
            .map(|bot| {
                let slot = bot.slot();
                BotSnapshot {
                    id: bot.id(),
                    status: slot.status(),
                    order: slot.order.as_ref().map(|o| o.id),
                }
            })
            .collect()
    }

    /// Check every structural invariant of the current state.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.shared.lock().validate()
    }
}

impl<S, C> Shared<S, C>
where
    S: EventSink,
    C: Clock,
{
    fn lock(&self) -> MutexGuard<'_, Floor> {
        self.floor.lock()
    }

    /// Report a transition. Callers hold the floor lock so sink order
    /// matches transition order.
    fn emit(&self, event: Event) {
        tracing::debug!("{}", event.log_summary());
        self.sink.emit(&event);
    }

    fn create_order(self: &Arc<Self>, class: OrderClass) -> Result<OrderId, EngineError> {
        let mut floor = self.lock();
        let order = floor.registry.create(class, self.clock.now())?;
        self.emit(Event::OrderCreated {
            id: order.id,
            class,
        });
        self.assign_pending(&mut floor);
        self.check(&floor);
        Ok(order.id)
    }

    fn add_bot(self: &Arc<Self>) -> Result<BotId, EngineError> {
        let mut floor = self.lock();
        let bot = floor.pool.add()?;
        self.emit(Event::BotCreated { bot });
        self.assign_pending(&mut floor);
        self.check(&floor);
        Ok(bot)
    }

    /// Debug-build invariant guard, run after every mutation.
    fn check(&self, floor: &Floor) {
        if cfg!(debug_assertions) {
            let result = floor.validate();
            if let Err(ref e) = result {
                tracing::error!(error = %e, "controller state is inconsistent");
            }
            debug_assert!(result.is_ok(), "{:?}", result);
        }
    }
}

#[cfg(test)]
#[path = "../controller_tests/mod.rs"]
mod tests;
