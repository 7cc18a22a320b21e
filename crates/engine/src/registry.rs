// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order registry: the pending queue and the completed set

use obot_core::{IdExhausted, IdSequence, Order, OrderClass, OrderStatus};
use std::collections::VecDeque;
use std::time::Instant;

/// Owns pending and completed orders and allocates order IDs.
///
/// The pending queue is always a run of VIP orders followed by a run of
/// Normal orders, each in insertion order. In-flight orders live in bot
/// slots, not here.
#[derive(Debug)]
pub struct OrderRegistry {
    ids: IdSequence,
    pending: VecDeque<Order>,
    completed: Vec<Order>,
}

impl OrderRegistry {
    /// Create an empty registry whose first order gets `first_id`.
    pub fn new(first_id: u64) -> Self {
        Self {
            ids: IdSequence::starting_at(first_id),
            pending: VecDeque::new(),
            completed: Vec::new(),
        }
    }

    /// Create a Normal order at the tail of the queue.
    pub fn create_normal(&mut self, now: Instant) -> Result<Order, IdExhausted> {
        self.create(OrderClass::Normal, now)
    }

    /// Create a VIP order behind every pending VIP and ahead of every Normal.
    pub fn create_vip(&mut self, now: Instant) -> Result<Order, IdExhausted> {
        self.create(OrderClass::Vip, now)
    }

    /// Nothing is queued when the id space is exhausted.
    pub fn create(&mut self, class: OrderClass, now: Instant) -> Result<Order, IdExhausted> {
        let order = Order::new(self.ids.next_id()?, class, now);
        self.insert(order.clone());
        Ok(order)
    }

    /// Return a preempted order to the queue.
    ///
    /// Placement is the same as a fresh order of its class: no memory of its
    /// earlier position survives, however many times it has been requeued.
    pub fn reinsert(&mut self, mut order: Order) {
        order.release();
        self.insert(order);
    }

    fn insert(&mut self, order: Order) {
        match order.class {
            OrderClass::Normal => self.pending.push_back(order),
            OrderClass::Vip => {
                let at = self.vip_boundary();
                self.pending.insert(at, order);
            }
        }
    }

    /// Index just past the last pending VIP order (0 if none).
    fn vip_boundary(&self) -> usize {
        self.pending.partition_point(|o| o.class.is_vip())
    }

    /// Take the highest-priority pending order.
    pub fn pop_next(&mut self) -> Option<Order> {
        self.pending.pop_front()
    }

    /// Record a finished order. It is never moved again.
    pub fn complete(&mut self, order: Order) {
        debug_assert_eq!(order.status, OrderStatus::Complete);
        self.completed.push(order);
    }

    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.pending.iter()
    }

    pub fn completed(&self) -> &[Order] {
        &self.completed
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn completed_count(&self, class: OrderClass) -> usize {
        self.completed.iter().filter(|o| o.class == class).count()
    }

    /// Number of orders ever created.
    pub fn created_count(&self) -> usize {
        usize::try_from(self.ids.issued()).unwrap_or(usize::MAX)
    }

    /// ID the next created order will receive, if any remain.
    pub fn next_id(&self) -> Option<u64> {
        self.ids.peek()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
