pub mod error;
pub mod feed;
pub mod health;
pub mod logger;
pub mod routes;
pub mod upstream;

pub use error::{Result, ServerError};
pub use feed::SimulatedFeed;
pub use routes::build_router;
pub use upstream::{FeedInputs, Upstream};
