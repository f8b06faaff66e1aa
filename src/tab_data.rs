/// Data structures for tabs and the locations they show

use serde::{Deserialize, Serialize};
use url::Url;

/// `tabs.TAB_ID_NONE`: the event is not about a real tab
pub const TAB_ID_NONE: i32 = -1;

/// Information about a browser tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i32,
    /// Missing for tabs the extension has no host permission for
    #[serde(default)]
    pub url: Option<String>,
}

impl TabInfo {
    pub fn new(id: i32, url: &str) -> TabInfo {
        TabInfo {
            id,
            url: Some(url.to_string()),
        }
    }
}

/// The `changeInfo` record of a `tabs.onUpdated` event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabChange {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabChange {
    /// A finished load, or a URL change without a load (history API
    /// navigation, reported by Firefox only as `url`)
    pub fn needs_refresh(&self) -> bool {
        self.status.as_deref() == Some("complete") || self.url.is_some()
    }
}

/// Host and path of the page a tab shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub hostname: String,
    /// Path with query string and fragment
    pub path: String,
}

impl Location {
    /// Parse a tab URL. Returns `None` for unparsable or host-less URLs.
    pub fn parse(url: &str) -> Option<Location> {
        let parsed = Url::parse(url).ok()?;
        let hostname = parsed.host_str()?.to_string();

        let mut path = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            path.push('?');
            path.push_str(query);
        }
        if let Some(fragment) = parsed.fragment() {
            path.push('#');
            path.push_str(fragment);
        }

        Some(Location { hostname, path })
    }
}
