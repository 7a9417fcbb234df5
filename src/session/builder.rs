use playwright::Playwright;
use playwright::api::{Browser, BrowserContext};
use tracing::debug;

use super::Session;
use crate::config::{BrowserKind, HarnessConfig};
use crate::error::{HarnessError, Result};

/// Builds a fully initialized [`Session`] from harness configuration.
///
/// Construction is strictly ordered: driver, browser, context, page,
/// navigation. A failure at any step closes whatever was already acquired
/// before the error is returned, so a failed `load` never leaks a browser
/// process and leaves nothing for the caller to tear down.
pub(crate) async fn build(config: &HarnessConfig) -> Result<Session> {
	debug!(
		target = "pagespec",
		browser = %config.browser,
		headless = config.launch.headless,
		url = %config.base_url,
		"starting browser session..."
	);

	let playwright = Playwright::initialize().await.map_err(|e| HarnessError::Launch(e.to_string()))?;
	playwright.prepare().map_err(|e| HarnessError::Launch(e.to_string()))?;

	let browser = launch_browser(&playwright, config).await?;

	let devices = playwright.devices();
	let resolved = match config.context.resolve(&devices) {
		Ok(resolved) => resolved,
		Err(err) => {
			discard(&browser, None).await;
			return Err(err);
		}
	};

	let mut context_builder = browser.context_builder();
	if let Some(viewport) = resolved.viewport.clone() {
		context_builder = context_builder.viewport(Some(viewport));
	}
	if let Some(user_agent) = resolved.user_agent.as_deref() {
		context_builder = context_builder.user_agent(user_agent);
	}
	let context = match context_builder.build().await {
		Ok(context) => context,
		Err(err) => {
			discard(&browser, None).await;
			return Err(HarnessError::Launch(err.to_string()));
		}
	};

	let page = match context.new_page().await {
		Ok(page) => page,
		Err(err) => {
			discard(&browser, Some(&context)).await;
			return Err(HarnessError::Launch(err.to_string()));
		}
	};

	if let Err(err) = page.goto_builder(&config.base_url).goto().await {
		discard(&browser, Some(&context)).await;
		return Err(HarnessError::Navigation {
			url: config.base_url.clone(),
			source: anyhow::anyhow!(err),
		});
	}

	Ok(Session::assemble(playwright, browser, context, page))
}

async fn launch_browser(playwright: &Playwright, config: &HarnessConfig) -> Result<Browser> {
	let browser_type = match config.browser {
		BrowserKind::Chromium => playwright.chromium(),
		BrowserKind::Firefox => playwright.firefox(),
		BrowserKind::Webkit => playwright.webkit(),
	};

	let mut launcher = browser_type.launcher().headless(config.launch.headless);
	if let Some(delay) = config.launch.slow_mo {
		launcher = launcher.slowmo(delay.as_millis() as f64);
	}

	launcher.launch().await.map_err(|e| HarnessError::Launch(e.to_string()))
}

/// Best-effort teardown for partially constructed sessions.
async fn discard(browser: &Browser, context: Option<&BrowserContext>) {
	if let Some(context) = context {
		if let Err(err) = context.close().await {
			debug!(target = "pagespec", error = %err, "context close failed during cleanup");
		}
	}
	if let Err(err) = browser.close().await {
		debug!(target = "pagespec", error = %err, "browser close failed during cleanup");
	}
}
