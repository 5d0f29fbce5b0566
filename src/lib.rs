pub mod errors;
pub mod implementations;
pub mod models;
pub mod render;
pub mod session;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use errors::{ClientError, ClientResult};
pub use implementations::config::{api_base_url, ClientConfig, ConfigError, DEFAULT_API_URL};
pub use implementations::http_backend::HttpValidationBackend;
pub use models::{
    claim::{Claim, ConfidenceBucket},
    health::{ApiInfo, HealthReport},
    report::ValidationRecord,
    validation::{ValidationRequest, ValidationResponse},
};
pub use render::{render_results, ClaimCard, ConfidencePill, RenderedResults};
pub use session::{Screen, StatusKind, StatusLine, SubmitOutcome, ValidationSession};
pub use traits::ValidationBackend;
