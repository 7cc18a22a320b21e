// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end sequences

use super::*;

#[tokio::test(start_paused = true)]
async fn demo_sequence_transcript() {
    let (ctrl, sink) = setup();

    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_vip_order().unwrap();
    ctrl.wait(Duration::from_secs(12)).await;

    ctrl.create_vip_order().unwrap();
    ctrl.create_vip_order().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.wait(Duration::from_secs(12)).await;

    ctrl.add_bot().unwrap();
    ctrl.wait(Duration::from_secs(15)).await;
    let summary = ctrl.print_status();

    let mut messages = sink.messages();
    let final_status = messages.pop().unwrap();
    assert_eq!(
        messages,
        vec![
            "Bot #1 created - Status: ACTIVE",
            "Created Normal Order #1001 - Status: PENDING",
            "Bot #1 picked up Normal Order #1001 - Status: PROCESSING",
            "Created VIP Order #1002 - Status: PENDING",
            "Bot #1 completed Normal Order #1001 - Status: COMPLETE (Processing time: 10s)",
            "Bot #1 picked up VIP Order #1002 - Status: PROCESSING",
            "Created VIP Order #1003 - Status: PENDING",
            "Created VIP Order #1004 - Status: PENDING",
            "Created Normal Order #1005 - Status: PENDING",
            "Created Normal Order #1006 - Status: PENDING",
            "Bot #1 completed VIP Order #1002 - Status: COMPLETE (Processing time: 10s)",
            "Bot #1 picked up VIP Order #1003 - Status: PROCESSING",
            "Bot #2 created - Status: ACTIVE",
            "Bot #2 picked up VIP Order #1004 - Status: PROCESSING",
            "Bot #1 completed VIP Order #1003 - Status: COMPLETE (Processing time: 10s)",
            "Bot #1 picked up Normal Order #1005 - Status: PROCESSING",
            "Bot #2 completed VIP Order #1004 - Status: COMPLETE (Processing time: 10s)",
            "Bot #2 picked up Normal Order #1006 - Status: PROCESSING",
        ]
    );

    assert_eq!(
        summary,
        Summary {
            completed_vip: 3,
            completed_normal: 1,
            active_bots: 2,
            pending: 0,
        }
    );
    assert_eq!(
        final_status,
        "\nFinal Status:\n\
         - Total Orders Processed: 4 (3 VIP, 1 Normal)\n\
         - Orders Completed: 4\n\
         - Active Bots: 2\n\
         - Pending Orders: 0"
    );
}

#[tokio::test(start_paused = true)]
async fn two_bots_drain_queue_in_priority_order() {
    let (ctrl, sink) = setup();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_vip_order().unwrap();
    ctrl.create_vip_order().unwrap();

    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();

    let picked: Vec<Event> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::OrderPickedUp { .. }))
        .collect();
    assert_eq!(
        picked,
        vec![
            Event::OrderPickedUp {
                id: OrderId::new(1003),
                class: OrderClass::Vip,
                bot: BotId::new(1),
            },
            Event::OrderPickedUp {
                id: OrderId::new(1004),
                class: OrderClass::Vip,
                bot: BotId::new(2),
            },
        ]
    );

    sleep_secs(25.0).await;

    let mut done = completed_ids(&ctrl);
    done.sort_unstable();
    assert_eq!(done, vec![1001, 1002, 1003, 1004]);
    assert!(ctrl.bots().iter().all(|b| b.status == BotStatus::Idle));
    assert_eq!(
        sink.names().iter().filter(|n| **n == "bot:idle").count(),
        2
    );
    ctrl.validate().unwrap();
}

#[tokio::test(start_paused = true)]
async fn idle_bot_picks_up_new_order_immediately() {
    let (ctrl, sink) = setup();
    let bot = ctrl.add_bot().unwrap();
    sleep_secs(5.0).await;

    ctrl.create_vip_order().unwrap();

    assert_eq!(
        sink.events().last(),
        Some(&Event::OrderPickedUp {
            id: OrderId::new(1001),
            class: OrderClass::Vip,
            bot,
        })
    );
    assert!(ctrl.pending_orders().is_empty());
}

#[tokio::test(start_paused = true)]
async fn clones_share_state() {
    let (ctrl, sink) = setup();
    let other = ctrl.clone();

    other.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();

    assert_eq!(other.processing_orders().len(), 1);
    assert_eq!(sink.events().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn dropped_controller_silences_timers() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    let before = sink.events().len();

    drop(ctrl);
    sleep_secs(15.0).await;

    assert_eq!(sink.events().len(), before);
}
