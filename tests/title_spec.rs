//! Spec: the reference page reports the expected document title.
//!
//! Runs against a `data:` URL carrying the reference app's shell markup so
//! no dev server is required; set `HARNESS_BASE_URL` to point the spec at a
//! live server instead.

use pagespec::{AppPage, Harness, HarnessConfig};

const REFERENCE_PAGE: &str = "data:text/html,<!DOCTYPE html><html><head><title>React App</title></head><body><div id='root'><header class='App-header'><p>Edit <code>src/App.js</code> and save to reload.</p><a class='App-link' href='https://reactjs.org' target='_blank' rel='noopener noreferrer'>Learn React</a></header></div></body></html>";

fn reference_harness() -> Harness {
	pagespec::logging::init();
	let mut config = HarnessConfig::from_env().expect("harness config should parse");
	if std::env::var("HARNESS_BASE_URL").is_err() {
		config.base_url = REFERENCE_PAGE.to_string();
	}
	Harness::new(config)
}

#[tokio::test]
#[ignore = "requires installed Playwright browsers"]
async fn page_is_titled_react_app() {
	let harness = reference_harness();
	harness
		.run(|session| async move {
			let app = AppPage::new(&session);
			assert_eq!(app.title().await?, "React App");
			Ok(())
		})
		.await
		.expect("title spec should pass");
}
