// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test(start_paused = true)]
async fn order_completes_after_processing_time() {
    let (ctrl, sink) = setup();
    let order = ctrl.create_normal_order().unwrap();
    let bot = ctrl.add_bot().unwrap();

    sleep_secs(9.5).await;
    assert!(ctrl.completed_orders().is_empty());

    sleep_secs(1.0).await;
    let completed = ctrl.completed_orders();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, order);
    assert_eq!(completed[0].status, OrderStatus::Complete);
    assert_eq!(completed[0].processing_time(), Some(Duration::from_secs(10)));

    assert_eq!(
        sink.events()[3..],
        [
            Event::OrderCompleted {
                id: order,
                class: OrderClass::Normal,
                bot,
                processing_ms: 10_000,
            },
            Event::BotIdle { bot },
        ]
    );
    assert_eq!(ctrl.bots()[0].status, BotStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn completion_chains_into_next_order() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();

    sleep_secs(10.5).await;

    assert_eq!(completed_ids(&ctrl), vec![1001]);
    assert_eq!(ctrl.bots()[0].order, Some(OrderId::new(1002)));
    assert!(!sink.names().contains(&"bot:idle"));
    assert_eq!(
        sink.messages().last().map(String::as_str),
        Some("Bot #1 picked up Normal Order #1002 - Status: PROCESSING")
    );

    sleep_secs(10.0).await;
    assert_eq!(completed_ids(&ctrl), vec![1001, 1002]);
    assert_eq!(
        sink.messages().last().map(String::as_str),
        Some("Bot #1 is now IDLE - No pending orders")
    );
}

#[tokio::test(start_paused = true)]
async fn stale_cycle_completion_is_discarded() {
    let (ctrl, sink) = setup();
    let bot = ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();
    sleep_secs(10.5).await;
    let before = sink.events().len();

    // Cycle 1 already completed; the bot is now on cycle 2
    ctrl.shared.complete(bot, 1);

    assert_eq!(sink.events().len(), before);
    assert_eq!(completed_ids(&ctrl), vec![1001]);
    assert_eq!(ctrl.bots()[0].order, Some(OrderId::new(1002)));
}

#[tokio::test(start_paused = true)]
async fn completion_for_idle_bot_is_discarded() {
    let (ctrl, sink) = setup();
    let bot = ctrl.add_bot().unwrap();

    ctrl.shared.complete(bot, 0);

    assert_eq!(sink.events().len(), 1);
    assert!(ctrl.completed_orders().is_empty());
}

#[tokio::test(start_paused = true)]
async fn wait_runs_assignment_pass() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.create_vip_order().unwrap();

    ctrl.wait(Duration::from_secs(11)).await;

    assert_eq!(completed_ids(&ctrl), vec![1001]);
    assert_eq!(ctrl.assign_pending(), 0);
    ctrl.validate().unwrap();
}

#[tokio::test(start_paused = true)]
async fn timestamps_come_from_injected_clock() {
    let sink = FakeSink::new();
    let clock = FakeClock::new();
    let ctrl = Controller::with_clock(sink.clone(), clock.clone(), EngineConfig::default()).unwrap();
    ctrl.add_bot().unwrap();
    ctrl.create_vip_order().unwrap();

    // Bot timers still follow tokio; the order's stamps follow the fake clock
    clock.advance(Duration::from_secs(3));
    sleep_secs(10.5).await;

    let completed = ctrl.completed_orders();
    assert_eq!(completed[0].processing_time(), Some(Duration::from_secs(3)));
    assert!(sink
        .messages()
        .contains(&"Bot #1 completed VIP Order #1001 - Status: COMPLETE (Processing time: 3s)".to_string()));
}
