use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::session::Session;

/// Page-object test harness bound to one configuration.
///
/// Each call to [`Harness::run`] brackets one test case: load a fresh
/// session, run the body, close the session. Multiple differently
/// configured harness instances may coexist, each producing independent
/// sessions.
#[derive(Clone, Debug)]
pub struct Harness {
	config: HarnessConfig,
}

impl Harness {
	pub fn new(config: HarnessConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &HarnessConfig {
		&self.config
	}

	/// Launches a fresh session for the configured base URL.
	pub async fn load(&self) -> Result<Session> {
		Session::load(&self.config).await
	}

	/// Runs one test case in strict setup, body, teardown order.
	///
	/// The session closes exactly once even when the body panics on a
	/// failed assertion; the panic resumes after teardown. If `load` itself
	/// fails the body never runs and there is nothing to tear down.
	pub async fn run<F, Fut, T>(&self, body: F) -> Result<T>
	where
		F: FnOnce(Session) -> Fut,
		Fut: Future<Output = Result<T>>,
	{
		let session = self.load().await?;
		with_teardown(async { body(session.clone()).await }, session.close()).await
	}
}

/// Awaits `body` with panics caught, awaits `teardown`, then re-raises the
/// body's panic or returns its result.
async fn with_teardown<B, C, T>(body: B, teardown: C) -> T
where
	B: Future<Output = T>,
	C: Future<Output = ()>,
{
	let outcome = AssertUnwindSafe(body).catch_unwind().await;
	teardown.await;
	match outcome {
		Ok(value) => value,
		Err(panic) => std::panic::resume_unwind(panic),
	}
}
