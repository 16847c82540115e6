mod drafts;
mod middleware;
mod public;
pub mod rate_limit;

pub use public::{HttpState, build_router};
pub use rate_limit::PreviewRateLimiter;
