use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Error taxonomy for the harness.
///
/// Every error surfaces to the owning test case via `?` and fails only that
/// case; the harness performs no recovery or retry. Assertion mismatches
/// are raised by `assert_eq!` and never pass through this type.
#[derive(Debug, Error)]
pub enum HarnessError {
	/// Configuration rejected before any browser work started.
	#[error("invalid harness configuration: {0}")]
	Config(String),

	#[error("browser launch failed: {0}")]
	Launch(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	/// Accessor used before `load()` completed or after `close()`.
	#[error("session is not loaded")]
	NotLoaded,

	#[error("element not found: {selector}")]
	SelectorNotFound { selector: String },

	#[error("javascript evaluation failed: {0}")]
	JsEval(String),

	/// Engine-reported failure during a content query.
	#[error("browser engine error: {0}")]
	Engine(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navigation_error_names_the_url() {
		let err = HarnessError::Navigation {
			url: "http://localhost:3000".to_string(),
			source: anyhow::anyhow!("net::ERR_CONNECTION_REFUSED"),
		};
		assert_eq!(err.to_string(), "navigation failed: http://localhost:3000");
	}

	#[test]
	fn selector_error_names_the_selector() {
		let err = HarnessError::SelectorNotFound {
			selector: ".App-link".to_string(),
		};
		assert_eq!(err.to_string(), "element not found: .App-link");
	}

	#[test]
	fn not_loaded_has_a_stable_message() {
		assert_eq!(HarnessError::NotLoaded.to_string(), "session is not loaded");
	}
}
