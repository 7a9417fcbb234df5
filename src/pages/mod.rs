//! Page objects wrapping DOM queries for the application under test.
//!
//! Accessors hide CSS selectors from spec files: a spec asks for "the intro
//! text", never for `.App-header > p`. Selector bindings are fixed at
//! harness-definition time.

mod app;

pub use app::AppPage;
