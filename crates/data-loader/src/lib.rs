//! # Data Loader Crate
//!
//! This crate loads the movie catalog CSV into an immutable, typed `Dataset`.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, GenreNames, Dataset)
//! - **genres**: Static TMDB genre code to name lookup
//! - **parser**: One coercion function per source column, plus row decoding
//! - **loader**: `Dataset::load_from_file` / `Dataset::load_from_reader`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("movies_dataset.csv"))?;
//! println!("Loaded {} movies", dataset.len());
//! ```
//!
//! ## Null policy
//!
//! Loading never drops a row. A malformed cell degrades only its own field:
//! text becomes `""`, numbers and dates become `None`, and the genre list
//! becomes empty. The only error a load can return is for the source as a
//! whole (missing file, unreadable stream).

// Public modules
pub mod error;
pub mod genres;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use genres::{display_name, genre_name};
pub use types::{
    // Type aliases
    GenreCode,
    MovieId,
    // Core types
    Dataset,
    GenreNames,
    MovieRecord,
};
