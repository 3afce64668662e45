use super::types::{ClothingResponse, FeelsResponse};
use crate::engine::schema::WirePayload;
use crate::error::ServiceError;
use std::future::Future;
use std::pin::Pin;

pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// Remote thermal-comfort model. Each call sends one payload and resolves
/// to the decoded response body or a single failure.
pub trait PredictionService: Send + Sync {
    /// Service identifier used in logs.
    fn name(&self) -> &str;

    fn predict_feels<'a>(&'a self, payload: &'a WirePayload) -> ServiceFuture<'a, FeelsResponse>;

    fn predict_clothing<'a>(
        &'a self,
        payload: &'a WirePayload,
    ) -> ServiceFuture<'a, ClothingResponse>;
}
