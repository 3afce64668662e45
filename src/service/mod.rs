pub mod http;
pub mod traits;
pub mod types;

pub use http::{HttpPredictionService, build_service_client};
pub use traits::{PredictionService, ServiceFuture};
pub use types::{ClothingResponse, ClothingTargets, FeelsResponse};
