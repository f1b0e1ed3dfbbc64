//! HTTP API handlers

pub mod analytics;
pub mod health;
pub mod movies;
pub mod options;

pub use analytics::get_analytics;
pub use health::health_routes;
pub use movies::list_movies;
pub use options::get_filter_options;
