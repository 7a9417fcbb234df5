use std::time::Duration;

use playwright::api::playwright::DeviceDescriptor;
use playwright::api::Viewport;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{HarnessError, Result};

/// Default page under test, matching the reference app's dev server.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Browser engine used for launch operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	/// Chromium-based browser (Chrome, Edge)
	#[default]
	Chromium,
	/// Mozilla Firefox
	Firefox,
	/// WebKit (Safari)
	Webkit,
}

impl std::fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BrowserKind::Chromium => write!(f, "chromium"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Webkit => write!(f, "webkit"),
		}
	}
}

impl std::str::FromStr for BrowserKind {
	type Err = HarnessError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"chromium" | "chrome" => Ok(BrowserKind::Chromium),
			"firefox" => Ok(BrowserKind::Firefox),
			"webkit" => Ok(BrowserKind::Webkit),
			other => Err(HarnessError::Config(format!("unknown browser engine: {other}"))),
		}
	}
}

/// Browser launch options.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
	/// Whether the browser launches without a visible window.
	pub headless: bool,
	/// Delay applied to each automation step, for visual debugging only.
	///
	/// This is the single overridable home for the operation delay; there is
	/// no second configuration path for it.
	pub slow_mo: Option<Duration>,
}

impl Default for LaunchConfig {
	fn default() -> Self {
		Self {
			headless: true,
			slow_mo: None,
		}
	}
}

/// Browsing-context options.
///
/// A named device preset is resolved against the engine's device table at
/// load time; explicit viewport/user-agent fields win over preset values.
#[derive(Clone, Debug, Default)]
pub struct ContextConfig {
	/// Named device preset from the engine's device-profile table.
	pub device: Option<String>,
	pub viewport: Option<Viewport>,
	pub user_agent: Option<String>,
}

/// Context options after device-preset resolution.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedContext {
	pub(crate) viewport: Option<Viewport>,
	pub(crate) user_agent: Option<String>,
}

impl ContextConfig {
	pub(crate) fn resolve(&self, devices: &[DeviceDescriptor]) -> Result<ResolvedContext> {
		let preset = match &self.device {
			Some(name) => Some(
				devices
					.iter()
					.find(|d| d.name == *name)
					.ok_or_else(|| HarnessError::Config(format!("unknown device preset: {name}")))?,
			),
			None => None,
		};

		Ok(ResolvedContext {
			viewport: self.viewport.clone().or_else(|| preset.map(|d| d.viewport.clone())),
			user_agent: self.user_agent.clone().or_else(|| preset.map(|d| d.user_agent.clone())),
		})
	}
}

/// Fully owned harness configuration.
///
/// Immutable after harness construction; multiple differently configured
/// harness instances may coexist in one process.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
	/// Page the session navigates to on load.
	pub base_url: String,
	/// Browser engine used for launch operations.
	pub browser: BrowserKind,
	pub launch: LaunchConfig,
	pub context: ContextConfig,
}

impl HarnessConfig {
	/// Creates a config for an explicit base URL with default options.
	pub fn new(base_url: impl Into<String>) -> Result<Self> {
		let base_url = base_url.into();
		validate_base_url(&base_url)?;
		Ok(Self {
			base_url,
			browser: BrowserKind::default(),
			launch: LaunchConfig::default(),
			context: ContextConfig::default(),
		})
	}

	/// Builds a config from process environment variables.
	///
	/// `HARNESS_BASE_URL` overrides the default dev-server URL,
	/// `HARNESS_BROWSER` selects the engine, `HARNESS_HEADED=1` launches a
	/// visible window, and `HARNESS_SLOW_MO_MS` sets the operation delay.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut config = Self::new(lookup("HARNESS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))?;

		if let Some(browser) = lookup("HARNESS_BROWSER") {
			config.browser = browser.parse()?;
		}
		if let Some(headed) = lookup("HARNESS_HEADED") {
			config.launch.headless = !matches!(headed.trim(), "1" | "true" | "yes");
		}
		if let Some(ms) = lookup("HARNESS_SLOW_MO_MS") {
			let ms: u64 = ms
				.trim()
				.parse()
				.map_err(|_| HarnessError::Config(format!("invalid HARNESS_SLOW_MO_MS value: {ms}")))?;
			config.launch.slow_mo = (ms > 0).then(|| Duration::from_millis(ms));
		}
		if let Some(device) = lookup("HARNESS_DEVICE") {
			config.context.device = Some(device);
		}

		Ok(config)
	}
}

fn validate_base_url(base_url: &str) -> Result<()> {
	Url::parse(base_url)
		.map(|_| ())
		.map_err(|err| HarnessError::Config(format!("invalid base URL {base_url:?}: {err}")))
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key: &str| map.get(key).cloned()
	}

	#[test]
	fn defaults_target_the_dev_server_headless_chromium() {
		let config = HarnessConfig::from_lookup(|_| None).unwrap();
		assert_eq!(config.base_url, "http://localhost:3000");
		assert_eq!(config.browser, BrowserKind::Chromium);
		assert!(config.launch.headless);
		assert_eq!(config.launch.slow_mo, None);
		assert!(config.context.device.is_none());
	}

	#[test]
	fn environment_overrides_are_applied() {
		let config = HarnessConfig::from_lookup(lookup_from(&[
			("HARNESS_BASE_URL", "http://127.0.0.1:8080"),
			("HARNESS_BROWSER", "webkit"),
			("HARNESS_HEADED", "1"),
			("HARNESS_SLOW_MO_MS", "10"),
			("HARNESS_DEVICE", "iPhone 6"),
		]))
		.unwrap();

		assert_eq!(config.base_url, "http://127.0.0.1:8080");
		assert_eq!(config.browser, BrowserKind::Webkit);
		assert!(!config.launch.headless);
		assert_eq!(config.launch.slow_mo, Some(Duration::from_millis(10)));
		assert_eq!(config.context.device.as_deref(), Some("iPhone 6"));
	}

	#[test]
	fn zero_slow_mo_means_disabled() {
		let config = HarnessConfig::from_lookup(lookup_from(&[("HARNESS_SLOW_MO_MS", "0")])).unwrap();
		assert_eq!(config.launch.slow_mo, None);
	}

	#[test]
	fn invalid_base_url_is_rejected() {
		let err = HarnessConfig::new("not a url").unwrap_err();
		assert!(matches!(err, HarnessError::Config(_)));
	}

	#[test]
	fn invalid_browser_name_is_rejected() {
		let err = HarnessConfig::from_lookup(lookup_from(&[("HARNESS_BROWSER", "netscape")])).unwrap_err();
		assert!(err.to_string().contains("unknown browser engine"));
	}

	#[test]
	fn browser_kind_parses_case_insensitively() {
		assert_eq!("Chromium".parse::<BrowserKind>().unwrap(), BrowserKind::Chromium);
		assert_eq!("FIREFOX".parse::<BrowserKind>().unwrap(), BrowserKind::Firefox);
		assert_eq!("chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chromium);
	}

	#[test]
	fn explicit_context_fields_pass_through_without_a_device() {
		let config = ContextConfig {
			device: None,
			viewport: Some(Viewport { width: 800, height: 600 }),
			user_agent: Some("pagespec-tests".to_string()),
		};

		let resolved = config.resolve(&[]).unwrap();
		let viewport = resolved.viewport.unwrap();
		assert_eq!(viewport.width, 800);
		assert_eq!(viewport.height, 600);
		assert_eq!(resolved.user_agent.as_deref(), Some("pagespec-tests"));
	}

	#[test]
	fn unknown_device_preset_is_rejected() {
		let config = ContextConfig {
			device: Some("Rotary Phone".to_string()),
			..ContextConfig::default()
		};

		let err = config.resolve(&[]).unwrap_err();
		assert!(err.to_string().contains("unknown device preset"));
	}
}
