use playwright::api::ElementHandle;

use crate::error::{HarnessError, Result};
use crate::session::Session;

/// App mount point rendered by the reference application.
const ROOT_SELECTOR: &str = "#root";
/// Introductory paragraph inside the app header.
const INTRO_SELECTOR: &str = ".App-header > p";
/// Primary documentation link.
const LINK_SELECTOR: &str = ".App-link";

/// Page object over the reference application.
///
/// Every accessor re-queries the live DOM through the session's page
/// handle; nothing is cached between calls, so returned text reflects any
/// mutation the application performed after initial load. Queries wait for
/// their node within the engine's default timeout and fail with
/// [`HarnessError::SelectorNotFound`] if it never appears.
pub struct AppPage<'a> {
	session: &'a Session,
}

impl<'a> AppPage<'a> {
	pub fn new(session: &'a Session) -> Self {
		Self { session }
	}

	/// Document title of the loaded page.
	pub async fn title(&self) -> Result<String> {
		let page = self.session.page()?;
		page.title().await.map_err(|e| HarnessError::Engine(e.to_string()))
	}

	/// Handle on the app mount element.
	pub async fn root(&self) -> Result<ElementHandle> {
		self.wait_for(ROOT_SELECTOR).await
	}

	/// Intro text rendered in the app header.
	pub async fn intro_text(&self) -> Result<String> {
		self.text_of(INTRO_SELECTOR).await
	}

	/// Label of the primary documentation link.
	pub async fn link_text(&self) -> Result<String> {
		self.text_of(LINK_SELECTOR).await
	}

	async fn wait_for(&self, selector: &str) -> Result<ElementHandle> {
		let page = self.session.page()?;
		page.wait_for_selector_builder(selector)
			.wait_for_selector()
			.await
			.map_err(|_| HarnessError::SelectorNotFound {
				selector: selector.to_string(),
			})?
			.ok_or_else(|| HarnessError::SelectorNotFound {
				selector: selector.to_string(),
			})
	}

	async fn text_of(&self, selector: &str) -> Result<String> {
		let element = self.wait_for(selector).await?;
		element.inner_text().await.map_err(|e| HarnessError::Engine(e.to_string()))
	}
}
