/// Toolbar icon selection

use crate::site::classify_url;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    Normal,
    Disabled,
    AlternateBranding,
}

/// Pixel sizes shipped for every icon set
const SIZES: [u32; 3] = [16, 48, 128];

impl IconSet {
    fn suffix(self) -> &'static str {
        match self {
            IconSet::Normal => "",
            IconSet::Disabled => "_disabled",
            IconSet::AlternateBranding => "_alt",
        }
    }

    /// Image path per pixel size, shaped for `action.setIcon({ path })`
    pub fn paths(self) -> IconPaths {
        IconPaths(
            SIZES
                .iter()
                .map(|size| (size.to_string(), format!("icons/icon{}{}.png", size, self.suffix())))
                .collect(),
        )
    }
}

/// `{ "16": "...", "48": "...", "128": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPaths(pub BTreeMap<String, String>);

pub fn select_icon_set(supported: bool, is_alternate: bool) -> IconSet {
    match (supported, is_alternate) {
        (false, _) => IconSet::Disabled,
        (true, true) => IconSet::AlternateBranding,
        (true, false) => IconSet::Normal,
    }
}

/// Icon for a tab's URL. Non-http pages (new tab, settings, extension
/// pages) get `None` and keep whatever icon the browser shows.
pub fn icon_for_url(url: &str) -> Option<IconSet> {
    if !url.starts_with("http") {
        return None;
    }

    let site = classify_url(url);
    Some(select_icon_set(
        site.is_some(),
        site.is_some_and(|site| site.is_alternate()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_icon_set() {
        assert_eq!(select_icon_set(false, false), IconSet::Disabled);
        assert_eq!(select_icon_set(false, true), IconSet::Disabled);
        assert_eq!(select_icon_set(true, true), IconSet::AlternateBranding);
        assert_eq!(select_icon_set(true, false), IconSet::Normal);
    }

    #[test]
    fn test_paths() {
        let paths = IconSet::Disabled.paths().0;

        assert_eq!(paths.len(), 3);
        assert_eq!(paths["16"], "icons/icon16_disabled.png");
        assert_eq!(paths["48"], "icons/icon48_disabled.png");
        assert_eq!(paths["128"], "icons/icon128_disabled.png");
        assert_eq!(IconSet::Normal.paths().0["128"], "icons/icon128.png");
        assert_eq!(IconSet::AlternateBranding.paths().0["16"], "icons/icon16_alt.png");
    }

    #[test]
    fn test_paths_serialize_as_object() {
        let json = serde_json::to_value(IconSet::Normal.paths()).unwrap();

        assert_eq!(json["16"], "icons/icon16.png");
        assert_eq!(json["48"], "icons/icon48.png");
    }

    #[test]
    fn test_icon_for_url() {
        assert_eq!(icon_for_url("https://rating.chgk.info/player/1"), Some(IconSet::Normal));
        assert_eq!(icon_for_url("https://rating.pecheny.me/"), Some(IconSet::Normal));
        assert_eq!(icon_for_url("https://rating.maii.li/b/"), Some(IconSet::AlternateBranding));
        assert_eq!(icon_for_url("https://example.com/player/1"), Some(IconSet::Disabled));
        assert_eq!(icon_for_url("chrome://newtab/"), None);
        assert_eq!(icon_for_url(""), None);
    }
}
