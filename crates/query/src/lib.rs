//! Filtering, sorting and pagination of the movie catalog.
//!
//! This crate provides:
//! - QuerySpec, the parameters of one listing request
//! - Filter trait and one implementation per listing predicate
//! - FilterPipeline for composing filters
//! - Stable, nulls-last sorting and 1-based pagination
//! - QueryEngine tying the steps together
//!
//! ## Architecture
//! A listing request is processed in stages:
//! 1. Filters drop records failing any given predicate (all predicates ANDed)
//! 2. The remaining records are sorted without touching the dataset
//! 3. The total is taken, then a single page is sliced out
//!
//! ## Example Usage
//! ```ignore
//! use query::{QueryEngine, QuerySpec, SortKey, SortOrder};
//!
//! let engine = QueryEngine::new(dataset.clone());
//! let spec = QuerySpec {
//!     genre: Some("Drama".to_string()),
//!     year_min: Some(1990),
//!     ..Default::default()
//! }
//! .sorted(SortKey::Rating, SortOrder::Descending);
//!
//! let page = engine.execute(&spec);
//! println!("{} matches, showing {}", page.total, page.movies.len());
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod query_spec;
pub mod sort;
pub mod traits;

// Re-export main types
pub use engine::{MoviePage, QueryEngine, execute};
pub use filter_pipeline::FilterPipeline;
pub use query_spec::{QuerySpec, SortKey, SortOrder};
pub use traits::Filter;
