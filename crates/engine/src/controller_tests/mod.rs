// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller tests

mod completion;
mod removal;
mod scenario;

use super::*;
use obot_adapters::FakeSink;
use obot_core::{FakeClock, OrderStatus};

type TestController = Controller<FakeSink>;

/// Controller with default config recording into a fake sink.
/// Must be called inside a (paused) tokio runtime.
fn setup() -> (TestController, FakeSink) {
    let sink = FakeSink::new();
    let ctrl = Controller::new(sink.clone(), EngineConfig::default()).unwrap();
    (ctrl, sink)
}

fn pending_ids(ctrl: &TestController) -> Vec<u64> {
    ctrl.pending_orders().iter().map(|o| o.id.get()).collect()
}

fn pending_classes(ctrl: &TestController) -> Vec<OrderClass> {
    ctrl.pending_orders().iter().map(|o| o.class).collect()
}

fn completed_ids(ctrl: &TestController) -> Vec<u64> {
    ctrl.completed_orders().iter().map(|o| o.id.get()).collect()
}

async fn sleep_secs(secs: f64) {
    tokio::time::sleep(Duration::from_secs_f64(secs)).await;
}

#[test]
fn new_outside_runtime_fails() {
    let result = Controller::new(FakeSink::new(), EngineConfig::default());
    assert!(matches!(result, Err(EngineError::NoRuntime)));
}

#[tokio::test(start_paused = true)]
async fn new_rejects_order_base_at_max() {
    let config = EngineConfig {
        first_order_id: u64::MAX,
        ..EngineConfig::default()
    };

    let result = Controller::new(FakeSink::new(), config);

    assert!(matches!(
        result,
        Err(EngineError::IdBase {
            key: "first_order_id",
            value: u64::MAX
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn create_after_last_order_id_fails_without_events() {
    let sink = FakeSink::new();
    let config = EngineConfig {
        first_order_id: u64::MAX - 1,
        ..EngineConfig::default()
    };
    let ctrl = Controller::new(sink.clone(), config).unwrap();

    ctrl.create_normal_order().unwrap();
    assert_eq!(ctrl.create_vip_order().unwrap(), OrderId::new(u64::MAX));
    let before = sink.names().len();

    let result = ctrl.create_normal_order();

    assert!(matches!(result, Err(EngineError::Ids(_))));
    assert_eq!(pending_ids(&ctrl), vec![u64::MAX, u64::MAX - 1]);
    assert_eq!(sink.names().len(), before);
    assert!(ctrl.validate().is_ok());
}

#[tokio::test(start_paused = true)]
async fn vip_is_queued_ahead_of_earlier_normal() {
    let (ctrl, sink) = setup();

    assert_eq!(ctrl.create_normal_order().unwrap(), OrderId::new(1001));
    assert_eq!(ctrl.create_vip_order().unwrap(), OrderId::new(1002));

    assert_eq!(pending_ids(&ctrl), vec![1002, 1001]);
    assert_eq!(pending_classes(&ctrl), vec![OrderClass::Vip, OrderClass::Normal]);
    assert_eq!(
        sink.messages(),
        vec![
            "Created Normal Order #1001 - Status: PENDING",
            "Created VIP Order #1002 - Status: PENDING",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn vip_promoted_ahead_of_three_normals() {
    let (ctrl, _sink) = setup();

    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_vip_order().unwrap();
    ctrl.create_normal_order().unwrap();

    assert_eq!(
        pending_classes(&ctrl),
        vec![
            OrderClass::Vip,
            OrderClass::Normal,
            OrderClass::Normal,
            OrderClass::Normal
        ]
    );
    assert_eq!(pending_ids(&ctrl), vec![1003, 1001, 1002, 1004]);
}

#[tokio::test(start_paused = true)]
async fn bot_added_to_empty_queue_stays_idle() {
    let (ctrl, sink) = setup();

    assert_eq!(ctrl.add_bot().unwrap(), BotId::new(1));

    assert_eq!(
        ctrl.bots(),
        vec![BotSnapshot {
            id: BotId::new(1),
            status: BotStatus::Idle,
            order: None,
        }]
    );
    assert_eq!(sink.messages(), vec!["Bot #1 created - Status: ACTIVE"]);

    sleep_secs(30.0).await;
    assert_eq!(sink.events().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn assignment_pass_is_idempotent() {
    let (ctrl, sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();
    let before = sink.events().len();

    assert_eq!(ctrl.assign_pending(), 0);
    assert_eq!(ctrl.assign_pending(), 0);

    assert_eq!(sink.events().len(), before);
    assert_eq!(pending_ids(&ctrl), vec![1002]);
}

#[tokio::test(start_paused = true)]
async fn order_ids_are_unique_and_increasing() {
    let (ctrl, _sink) = setup();
    let ids: Vec<OrderId> = (0..10)
        .map(|i| {
            if i % 3 == 0 {
                ctrl.create_vip_order().unwrap()
            } else {
                ctrl.create_normal_order().unwrap()
            }
        })
        .collect();

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids[0], 1001);
    assert_eq!(ids[9], 1010);
}

#[tokio::test(start_paused = true)]
async fn config_sets_id_bases_and_duration() {
    let sink = FakeSink::new();
    let config = EngineConfig {
        processing_time: Duration::from_secs(2),
        first_order_id: 1,
        first_bot_id: 100,
    };
    let ctrl = Controller::new(sink.clone(), config).unwrap();

    assert_eq!(ctrl.add_bot().unwrap(), BotId::new(100));
    assert_eq!(ctrl.create_vip_order().unwrap(), OrderId::new(1));

    sleep_secs(2.5).await;
    assert_eq!(completed_ids(&ctrl), vec![1]);
    assert!(sink
        .messages()
        .contains(&"Bot #100 completed VIP Order #1 - Status: COMPLETE (Processing time: 2s)".to_string()));
}

#[tokio::test(start_paused = true)]
async fn summary_counts_by_class() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.create_vip_order().unwrap();
    ctrl.create_normal_order().unwrap();
    ctrl.create_normal_order().unwrap();

    sleep_secs(25.0).await;

    let summary = ctrl.summary();
    assert_eq!(
        summary,
        Summary {
            completed_vip: 1,
            completed_normal: 1,
            active_bots: 1,
            pending: 0,
        }
    );
    assert_eq!(ctrl.processing_orders().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn print_status_emits_final_report() {
    let (ctrl, sink) = setup();
    ctrl.create_normal_order().unwrap();

    let summary = ctrl.print_status();

    assert_eq!(summary.pending, 1);
    assert_eq!(
        sink.events().last(),
        Some(&Event::FinalStatus { summary })
    );
}

#[tokio::test(start_paused = true)]
async fn every_order_tracked_exactly_once() {
    let (ctrl, _sink) = setup();
    ctrl.add_bot().unwrap();
    ctrl.add_bot().unwrap();
    for i in 0..8 {
        if i % 2 == 0 {
            ctrl.create_normal_order().unwrap();
        } else {
            ctrl.create_vip_order().unwrap();
        }
    }

    for step in 0..6 {
        sleep_secs(4.0).await;
        if step == 2 {
            ctrl.remove_bot();
        }
        if step == 3 {
            ctrl.add_bot().unwrap();
        }
        ctrl.validate().unwrap();

        let mut ids: Vec<u64> = pending_ids(&ctrl);
        ids.extend(ctrl.processing_orders().iter().map(|o| o.id.get()));
        ids.extend(completed_ids(&ctrl));
        ids.sort_unstable();
        assert_eq!(ids, (1001..=1008).collect::<Vec<u64>>());
    }
}

#[tokio::test(start_paused = true)]
async fn processing_orders_reflect_bot_slots() {
    let (ctrl, _sink) = setup();
    ctrl.create_vip_order().unwrap();
    let bot = ctrl.add_bot().unwrap();

    let processing = ctrl.processing_orders();
    assert_eq!(processing.len(), 1);
    assert_eq!(processing[0].status, OrderStatus::Processing);
    assert_eq!(processing[0].bot, Some(bot));
    assert!(processing[0].started_at.is_some());
}
