use std::sync::Arc;
use std::time::Duration;

use image::{DynamicImage, RgbaImage};
use stampr_config::Config;
use stampr_core::Pipeline;
use stampr_ocr::StaticGate;
use stampr_types::{AppEvent, DeliveryMode};
use tokio::time::timeout;

use super::{BrokenOcr, EchoOcr};
use crate::controller::AppController;
use crate::profile;
use crate::state::AppState;

fn controller(primary: Pipeline, local: Pipeline) -> AppController {
    AppController::new(Arc::new(AppState::with_pipelines(
        Config::default(),
        primary,
        local,
    )))
}

fn photo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::new(width, height))
}

#[tokio::test]
async fn both_mode_routes_callback_to_local_backend() {
    let crop = Config::default().crop;
    let primary = Pipeline::new(crop, Arc::new(EchoOcr("API 12")), Arc::new(StaticGate(true)));
    let local = Pipeline::new(crop, Arc::new(EchoOcr("KIT 12")), Arc::new(StaticGate(true)));
    let controller = controller(primary, local);

    let outcomes = timeout(
        Duration::from_secs(2),
        controller.run(&photo(640, 480), DeliveryMode::Both),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().any(|e| matches!(e, AppEvent::CallbackText { text, .. } if text == "KIT12")));
    assert!(outcomes.iter().any(|e| matches!(e, AppEvent::ObservedText { text, .. } if text == "API12")));
}

#[tokio::test]
async fn offline_primary_reports_error_event() {
    let crop = Config::default().crop;
    let primary = Pipeline::new(crop, Arc::new(BrokenOcr), Arc::new(StaticGate(false)));
    let local = Pipeline::new(crop, Arc::new(EchoOcr("")), Arc::new(StaticGate(true)));
    let controller = controller(primary, local);

    let outcomes = timeout(
        Duration::from_secs(2),
        controller.run(&photo(640, 480), DeliveryMode::Observable),
    )
    .await
    .unwrap()
    .unwrap();

    match outcomes.as_slice() {
        [AppEvent::ObservedError { reason, .. }] => {
            assert_eq!(reason, "No internet connection available");
        }
        other => panic!("unexpected outcomes: {other:?}"),
    }
}

#[tokio::test]
async fn callback_mode_swallows_failure() {
    let crop = Config::default().crop;
    let primary = Pipeline::new(crop, Arc::new(BrokenOcr), Arc::new(StaticGate(false)));
    let local = Pipeline::new(crop, Arc::new(EchoOcr("unused")), Arc::new(StaticGate(true)));
    let controller = controller(primary, local);

    let outcomes = controller.run(&photo(640, 480), DeliveryMode::Callback).await.unwrap();

    match outcomes.as_slice() {
        [AppEvent::CallbackText { text, .. }] => assert_eq!(text, ""),
        other => panic!("unexpected outcomes: {other:?}"),
    }
}

#[tokio::test]
async fn uncroppable_photo_starts_nothing() {
    let crop = Config::default().crop;
    let primary = Pipeline::new(crop, Arc::new(EchoOcr("x")), Arc::new(StaticGate(true)));
    let local = Pipeline::new(crop, Arc::new(EchoOcr("x")), Arc::new(StaticGate(true)));
    let controller = controller(primary, local);

    let outcomes = controller.run(&photo(0, 0), DeliveryMode::Both).await.unwrap();
    assert!(outcomes.is_empty());
}

#[test]
fn margin_override_applies_on_top_of_profile() {
    let config = profile::load_config(None, Some(40)).unwrap();
    assert_eq!(config.crop.bottom_margin_px, 40);

    let rendered = profile::render_config(&config).unwrap();
    assert!(rendered.contains("\"bottom_margin_px\": 40"));
}

#[tokio::test]
async fn concurrent_runs_keep_their_own_outcomes() {
    let crop = Config::default().crop;
    let primary = Pipeline::new(crop, Arc::new(EchoOcr("A 1")), Arc::new(StaticGate(true)));
    let local = Pipeline::new(crop, Arc::new(EchoOcr("B 2")), Arc::new(StaticGate(true)));
    let controller = controller(primary, local);
    let (small, large) = (photo(320, 40), photo(1280, 720));

    let (first, second) = timeout(Duration::from_secs(2), async {
        tokio::join!(
            controller.run(&small, DeliveryMode::Both),
            controller.run(&large, DeliveryMode::Observable),
        )
    })
    .await
    .unwrap();
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.len(), 2);
    assert!(first.iter().any(|e| matches!(e, AppEvent::CallbackText { text, .. } if text == "B2")));
    assert!(first.iter().any(|e| matches!(e, AppEvent::ObservedText { text, .. } if text == "A1")));
    match second.as_slice() {
        [AppEvent::ObservedText { text, .. }] => assert_eq!(text, "A1"),
        other => panic!("unexpected outcomes: {other:?}"),
    }
}
