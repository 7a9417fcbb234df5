//! Page-object browser test harness for the reference React application.
//!
//! The harness separates browser-driving logic from assertions: [`Harness`]
//! owns configuration and the per-case session lifecycle, [`Session`] owns
//! the live engine handles for exactly one test case, and [`AppPage`]
//! exposes semantic content queries against the loaded page. Spec files
//! under `tests/` compare the returned strings against literal expectations
//! with `assert_eq!`.
//!
//! ```no_run
//! use pagespec::{AppPage, Harness, HarnessConfig};
//!
//! # async fn spec() -> pagespec::Result<()> {
//! let harness = Harness::new(HarnessConfig::from_env()?);
//! harness
//!     .run(|session| async move {
//!         let app = AppPage::new(&session);
//!         assert_eq!(app.title().await?, "React App");
//!         Ok(())
//!     })
//!     .await
//! # }
//! ```

pub mod config;
pub mod error;
mod harness;
pub mod logging;
pub mod pages;
pub mod session;

pub use config::{BrowserKind, ContextConfig, HarnessConfig, LaunchConfig};
pub use error::{HarnessError, Result};
pub use harness::Harness;
pub use pages::AppPage;
pub use session::Session;

/// Engine types surfaced for spec files that need raw page access.
pub use playwright::api::{ElementHandle, Page, Viewport};
