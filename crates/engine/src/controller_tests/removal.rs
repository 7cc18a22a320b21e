// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn remove_from_empty_pool_is_noop() {
    let (ctrl, sink) = setup();

    assert_eq!(ctrl.remove_bot(), None);
    assert!(sink.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn removes_newest_bot_first() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();

    assert_eq!(ctrl.remove_bot(), Some(BotId::new(3)));
    assert_eq!(ctrl.remove_bot(), Some(BotId::new(2)));

    let ids: Vec<BotId> = ctrl.bots().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BotId::new(1)]);
    assert_eq!(
        sink.messages()[3..],
        ["Bot #3 destroyed while IDLE", "Bot #2 destroyed while IDLE"]
    );
}

#[tokio::test(start_paused = true)]
async fn bot_ids_are_not_reused() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.remove_bot();

    assert_eq!(ctrl.add_bot().unwrap(), BotId::new(3));
}

#[tokio::test(start_paused = true)]
async fn removing_processing_bot_requeues_order() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    let order = ctrl.create_normal_order().unwrap();
    sleep_secs(3.0).await;

    assert_eq!(ctrl.remove_bot(), Some(BotId::new(1)));

    let pending = ctrl.pending_orders();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, order);
    assert_eq!(pending[0].class, OrderClass::Normal);
    assert_eq!(pending[0].status, OrderStatus::Pending);
    assert_eq!(pending[0].bot, None);
    assert_eq!(pending[0].started_at, None);
    assert_eq!(
        sink.messages().last().map(String::as_str),
        Some("Bot #1 destroyed while processing Order #1001 - Order returned to PENDING")
    );

    // The cancelled timer never reports a completion
    sleep_secs(20.0).await;
    assert!(ctrl.completed_orders().is_empty());
    assert!(!sink.names().contains(&"order:completed"));
    ctrl.validate().unwrap();
}

#[tokio::test(start_paused = true)]
async fn requeued_vip_goes_behind_waiting_vips() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_vip_order().unwrap(); // bot 1
    ctrl.create_vip_order().unwrap(); // bot 2
    ctrl.create_vip_order().unwrap();
    ctrl.create_normal_order().unwrap();

    ctrl.remove_bot();

    assert_eq!(pending_ids(&ctrl), vec![1003, 1002, 1004]);
}

#[tokio::test(start_paused = true)]
async fn requeued_normal_goes_to_back() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap(); // bot 1
    ctrl.create_normal_order().unwrap(); // bot 2
    ctrl.create_normal_order().unwrap();
    ctrl.create_vip_order().unwrap();

    ctrl.remove_bot();

    assert_eq!(pending_ids(&ctrl), vec![1004, 1003, 1002]);
}

#[tokio::test(start_paused = true)]
async fn preempted_order_restarts_with_full_duration() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap(); // bot 1
    sleep_secs(2.0).await;
    ctrl.create_normal_order().unwrap(); // bot 2
    sleep_secs(6.0).await;

    // t=8: bot 2 goes, its order waits for bot 1
    ctrl.remove_bot();
    assert_eq!(pending_ids(&ctrl), vec![1002]);

    // t=10: bot 1 finishes 1001 and takes 1002 from scratch
    sleep_secs(2.5).await;
    assert_eq!(completed_ids(&ctrl), vec![1001]);
    assert_eq!(ctrl.bots()[0].order, Some(OrderId::new(1002)));

    sleep_secs(10.0).await;
    assert_eq!(completed_ids(&ctrl), vec![1001, 1002]);
    let completions: Vec<String> = sink
        .messages()
        .into_iter()
        .filter(|m| m.contains("completed"))
        .collect();
    assert_eq!(
        completions,
        vec![
            "Bot #1 completed Normal Order #1001 - Status: COMPLETE (Processing time: 10s)",
            "Bot #1 completed Normal Order #1002 - Status: COMPLETE (Processing time: 10s)",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn repeated_preemption_keeps_one_copy() {
    let (ctrl, _sink) = setup();
    let order = ctrl.create_vip_order().unwrap();

    for _ in 0..3 {
        ctrl.add_bot().unwrap();
        assert_eq!(ctrl.processing_orders().len(), 1);
        sleep_secs(4.0).await;
        ctrl.remove_bot();
        assert_eq!(pending_ids(&ctrl), vec![order.get()]);
        ctrl.validate().unwrap();
    }

    assert!(ctrl.completed_orders().is_empty());
}

#[tokio::test(start_paused = true)]
async fn late_completion_after_removal_is_discarded() {
    let (ctrl, sink) = setup();
    let bot = ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.remove_bot();
    let before = sink.events().len();

    // Simulates a timer that fired just before the removal took the lock
    ctrl.shared.complete(bot, 1);

    assert_eq!(sink.events().len(), before);
    assert!(ctrl.completed_orders().is_empty());
    assert_eq!(pending_ids(&ctrl), vec![1001]);
}

#[tokio::test(start_paused = true)]
async fn requeued_order_waits_while_other_bots_busy() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_vip_order().unwrap(); // bot 1
    ctrl.create_vip_order().unwrap(); // bot 2
    sleep_secs(1.0).await;

    ctrl.remove_bot();

    assert_eq!(pending_ids(&ctrl), vec![1002]);
    assert_eq!(
        sink.events().last(),
        Some(&Event::BotDestroyedProcessing {
            bot: BotId::new(2),
            order: OrderId::new(1002),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn requeued_order_taken_by_older_idle_bot() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap(); // bot 1
    sleep_secs(5.0).await;
    ctrl.create_normal_order().unwrap(); // bot 2
    sleep_secs(5.5).await;

    // t=10.5: bot 1 is idle, bot 2 still on 1002
    assert_eq!(ctrl.bots()[0].status, BotStatus::Idle);
    ctrl.remove_bot();

    assert!(ctrl.pending_orders().is_empty());
    assert_eq!(ctrl.bots()[0].order, Some(OrderId::new(1002)));
    let messages = sink.messages();
    assert_eq!(
        messages[messages.len() - 2..],
        [
            "Bot #2 destroyed while processing Order #1002 - Order returned to PENDING",
            "Bot #1 picked up Normal Order #1002 - Status: PROCESSING",
        ]
    );
}
