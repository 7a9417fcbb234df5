mod builder;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use playwright::Playwright;
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

/// Live browser session owned by one test case.
///
/// A session owns the engine runtime handles (driver, browser, context,
/// page) created by [`Session::load`]. Handles are cheap clones sharing one
/// inner state, so the teardown bracket and the test body can both hold the
/// session; exclusive ownership per test case is a usage contract, not a
/// type-level one.
#[derive(Clone)]
pub struct Session {
	inner: Arc<SessionInner>,
}

struct SessionInner {
	_playwright: Playwright,
	browser: Browser,
	context: BrowserContext,
	page: Page,
	closed: AtomicBool,
}

impl Session {
	/// Launches the configured browser, opens one context and one page, and
	/// navigates to the configured base URL.
	pub async fn load(config: &HarnessConfig) -> Result<Self> {
		builder::build(config).await
	}

	pub(crate) fn assemble(playwright: Playwright, browser: Browser, context: BrowserContext, page: Page) -> Self {
		Self {
			inner: Arc::new(SessionInner {
				_playwright: playwright,
				browser,
				context,
				page,
				closed: AtomicBool::new(false),
			}),
		}
	}

	/// Returns the live page handle.
	///
	/// Fails with [`HarnessError::NotLoaded`] once the session is closed, so
	/// accessors can never read stale page state silently.
	pub fn page(&self) -> Result<&Page> {
		if self.inner.closed.load(Ordering::Acquire) {
			return Err(HarnessError::NotLoaded);
		}
		Ok(&self.inner.page)
	}

	/// User agent the live page actually reports.
	pub async fn effective_user_agent(&self) -> Result<String> {
		let page = self.page()?;
		page.eval::<String>("() => navigator.userAgent")
			.await
			.map_err(|e| HarnessError::JsEval(e.to_string()))
	}

	/// Viewport the live page actually reports.
	pub async fn effective_viewport(&self) -> Result<Viewport> {
		let page = self.page()?;
		let (width, height) = page
			.eval::<(i32, i32)>("() => [window.innerWidth, window.innerHeight]")
			.await
			.map_err(|e| HarnessError::JsEval(e.to_string()))?;
		Ok(Viewport { width, height })
	}

	/// Tears down context and browser, releasing OS-level resources.
	///
	/// The first call wins; later calls are no-ops. Teardown failures are
	/// logged rather than raised so they can never mask the failure that
	/// ended the test body.
	pub async fn close(&self) {
		if self.inner.closed.swap(true, Ordering::AcqRel) {
			return;
		}

		if let Err(err) = self.inner.context.close().await {
			debug!(target = "pagespec", error = %err, "context close failed");
		}
		if let Err(err) = self.inner.browser.close().await {
			debug!(target = "pagespec", error = %err, "browser close failed");
		}
	}
}
