/// Browser capabilities used by the background page and the popup
///
/// The controllers only see the [`Platform`] trait. [`BrowserApi`] is the
/// real implementation, one variant per browser target, picked once at
/// startup by [`BrowserApi::detect`].

use crate::error::PlatformError;
use crate::icon::IconSet;
use crate::tab_data::TabInfo;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    fn isFirefox() -> bool;

    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTab(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabUrl(tab_id: i32, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn setActionIcon(tab_id: i32, path: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setBrowserActionIcon(tab_id: i32, path: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;
}

#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Active tab of the current window
    async fn active_tab(&self) -> Result<TabInfo, PlatformError>;

    async fn tab(&self, tab_id: i32) -> Result<TabInfo, PlatformError>;

    async fn all_tabs(&self) -> Result<Vec<TabInfo>, PlatformError>;

    async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), PlatformError>;

    /// Set the toolbar icon for one tab. `Ok(false)` when this browser has
    /// no per-tab icon API and nothing was done.
    async fn set_icon(&self, tab_id: i32, icon: IconSet) -> Result<bool, PlatformError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserApi {
    /// Chrome, Edge, Opera: Manifest V3, `chrome.action`
    Chromium,
    /// Firefox: Manifest V2, `browser.browserAction`
    Firefox,
}

impl BrowserApi {
    pub fn detect() -> BrowserApi {
        if isFirefox() {
            BrowserApi::Firefox
        } else {
            BrowserApi::Chromium
        }
    }
}

fn decode_tab(tab_js: JsValue) -> Result<TabInfo, PlatformError> {
    Ok(serde_wasm_bindgen::from_value(tab_js)?)
}

impl Platform for BrowserApi {
    async fn active_tab(&self) -> Result<TabInfo, PlatformError> {
        let tab_js = queryActiveTab().await?;
        serde_wasm_bindgen::from_value::<Option<TabInfo>>(tab_js)?.ok_or(PlatformError::NoActiveTab)
    }

    async fn tab(&self, tab_id: i32) -> Result<TabInfo, PlatformError> {
        decode_tab(getTab(tab_id).await?)
    }

    async fn all_tabs(&self) -> Result<Vec<TabInfo>, PlatformError> {
        let tabs_js = queryAllTabs().await?;
        Ok(serde_wasm_bindgen::from_value(tabs_js)?)
    }

    async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), PlatformError> {
        updateTabUrl(tab_id, url).await?;
        Ok(())
    }

    async fn set_icon(&self, tab_id: i32, icon: IconSet) -> Result<bool, PlatformError> {
        // setIcon wants a plain object, not a Map
        let paths = icon
            .paths()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        let applied = match self {
            BrowserApi::Chromium => setActionIcon(tab_id, paths).await?,
            BrowserApi::Firefox => setBrowserActionIcon(tab_id, paths).await?,
        };
        Ok(applied.as_bool().unwrap_or(false))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        writeClipboard(text).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// In-memory browser: a fixed set of tabs, records what was asked of it
    pub(crate) struct FakeBrowser {
        pub tabs: RefCell<Vec<TabInfo>>,
        pub active: Option<i32>,
        pub icon_api: bool,
        pub clipboard_fails: bool,
        pub icons: RefCell<Vec<(i32, IconSet)>>,
        pub clipboard: RefCell<Option<String>>,
    }

    impl FakeBrowser {
        pub fn new(tabs: Vec<TabInfo>) -> Self {
            FakeBrowser {
                active: tabs.first().map(|t| t.id),
                tabs: RefCell::new(tabs),
                icon_api: true,
                clipboard_fails: false,
                icons: RefCell::new(Vec::new()),
                clipboard: RefCell::new(None),
            }
        }

        pub fn url_of(&self, tab_id: i32) -> Option<String> {
            self.tabs
                .borrow()
                .iter()
                .find(|t| t.id == tab_id)
                .and_then(|t| t.url.clone())
        }
    }

    impl Platform for FakeBrowser {
        async fn active_tab(&self) -> Result<TabInfo, PlatformError> {
            let id = self.active.ok_or(PlatformError::NoActiveTab)?;
            self.tab(id).await
        }

        async fn tab(&self, tab_id: i32) -> Result<TabInfo, PlatformError> {
            self.tabs
                .borrow()
                .iter()
                .find(|t| t.id == tab_id)
                .cloned()
                .ok_or_else(|| PlatformError::Js(format!("No tab with id: {}.", tab_id)))
        }

        async fn all_tabs(&self) -> Result<Vec<TabInfo>, PlatformError> {
            Ok(self.tabs.borrow().clone())
        }

        async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), PlatformError> {
            let mut tabs = self.tabs.borrow_mut();
            let tab = tabs
                .iter_mut()
                .find(|t| t.id == tab_id)
                .ok_or_else(|| PlatformError::Js(format!("No tab with id: {}.", tab_id)))?;
            tab.url = Some(url.to_string());
            Ok(())
        }

        async fn set_icon(&self, tab_id: i32, icon: IconSet) -> Result<bool, PlatformError> {
            if !self.icon_api {
                return Ok(false);
            }
            self.icons.borrow_mut().push((tab_id, icon));
            Ok(true)
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
            if self.clipboard_fails {
                return Err(PlatformError::Js("Document is not focused.".to_string()));
            }
            *self.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }
}
