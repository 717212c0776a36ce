//! # Cinelist Core
//!
//! Core library for the cinelist movie watchlist, providing the external
//! title lookup, the search workflow state machine, and the de-duplicated
//! watchlist port.
//!
//! ## Overview
//!
//! - **Lookup**: a thin OMDb client that resolves a title query to either a
//!   raw movie payload or a typed "no match" marker.
//! - **Search workflow**: a state machine sequencing submit → fetch →
//!   normalize → preview and preview → dedup-check → append, with the phases
//!   a host UI renders (idle, loading, previewing, errored).
//! - **Watchlist**: an injected append-only collection keyed by IMDb id.
//!
//! The crate performs no rendering and persists nothing; hosts own the
//! watchlist's lifetime and render whatever state the workflow exposes.
//!
//! ## Example
//!
//! ```no_run
//! use cinelist_core::{MovieList, OmdbClient, SearchWorkflow, Settings};
//! use std::sync::Arc;
//!
//! async fn search_and_add() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OmdbClient::new(&Settings::gather())?;
//!     let mut workflow = SearchWorkflow::new(Arc::new(client));
//!     let mut watchlist = MovieList::new();
//!
//!     workflow.change_query("Fight Club");
//!     workflow.submit().await?;
//!
//!     if workflow.state().candidate().is_some() {
//!         workflow.append(&mut watchlist);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod lookup;
pub mod search;
pub mod settings;
pub mod watchlist;

pub use cinelist_model as model;
pub use cinelist_model::{ImdbId, Movie, MovieQuery};

pub use error::{LookupError, Result};
pub use lookup::{
    MovieLookup, OmdbClient, RawLookupResult, PLACEHOLDER_IMAGE_URL,
};
pub use search::{Phase, SearchController, SearchState, SearchWorkflow};
pub use settings::Settings;
pub use watchlist::{MovieList, Watchlist};
