#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfeel::engine::WirePayload;
use tempfeel::error::ServiceError;
use tempfeel::service::{
    ClothingResponse, ClothingTargets, FeelsResponse, PredictionService, ServiceFuture,
};

/// In-process prediction service that replays queued replies in order and
/// records every payload it receives.
#[derive(Default)]
pub struct QueuedService {
    feels: Mutex<VecDeque<Result<FeelsResponse, ServiceError>>>,
    clothing: Mutex<VecDeque<Result<ClothingResponse, ServiceError>>>,
    seen: Mutex<Vec<WirePayload>>,
    calls: AtomicUsize,
}

impl QueuedService {
    pub fn feels(self, label: &str) -> Self {
        self.feels.lock().unwrap().push_back(Ok(FeelsResponse {
            prediction: label.to_string(),
            model_accuracy: None,
            probabilities: None,
        }));
        self
    }

    pub fn feels_failure(self) -> Self {
        self.feels
            .lock()
            .unwrap()
            .push_back(Err(ServiceError::Transport {
                endpoint: "/predict-feels".into(),
                message: "network unreachable".into(),
            }));
        self
    }

    pub fn clothing(self, upr_clo: f64, lwr_clo: f64) -> Self {
        self.clothing.lock().unwrap().push_back(Ok(ClothingResponse {
            predictions: ClothingTargets { upr_clo, lwr_clo },
        }));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<WirePayload> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, payload: &WirePayload) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(payload.clone());
    }
}

impl PredictionService for QueuedService {
    fn name(&self) -> &str {
        "queued"
    }

    fn predict_feels<'a>(&'a self, payload: &'a WirePayload) -> ServiceFuture<'a, FeelsResponse> {
        self.record(payload);
        let next = self.feels.lock().unwrap().pop_front();
        Box::pin(async move { next.expect("feels reply queued") })
    }

    fn predict_clothing<'a>(
        &'a self,
        payload: &'a WirePayload,
    ) -> ServiceFuture<'a, ClothingResponse> {
        self.record(payload);
        let next = self.clothing.lock().unwrap().pop_front();
        Box::pin(async move { next.expect("clothing reply queued") })
    }
}
