/// Background event handlers: keep each tab's toolbar icon in sync with
/// the site it shows.
///
/// Every handler logs and swallows its own failures, so one closed tab
/// never stops the others from being updated.

use crate::error::PlatformError;
use crate::icon::icon_for_url;
use crate::platform::Platform;
use crate::tab_data::{TabChange, TAB_ID_NONE};

/// Extension installed or updated: sweep every open tab
pub async fn on_installed<P: Platform>(api: &P, reason: &str) {
    log::info!("TS_switcher {}", reason);

    match api.all_tabs().await {
        Ok(tabs) => {
            for tab in tabs {
                refresh_icon(api, tab.id).await;
            }
        }
        Err(e) => log::error!("Error updating icons on install: {}", e),
    }
}

pub async fn on_tab_activated<P: Platform>(api: &P, tab_id: i32) {
    refresh_icon(api, tab_id).await;
}

pub async fn on_tab_updated<P: Platform>(api: &P, tab_id: i32, change: &TabChange) {
    if change.needs_refresh() {
        refresh_icon(api, tab_id).await;
    }
}

/// Re-read a tab and set its icon
pub async fn refresh_icon<P: Platform>(api: &P, tab_id: i32) {
    if tab_id == TAB_ID_NONE {
        return;
    }

    if let Err(e) = try_refresh_icon(api, tab_id).await {
        log::error!("Error updating icon for tab {}: {}", tab_id, e);
    }
}

async fn try_refresh_icon<P: Platform>(api: &P, tab_id: i32) -> Result<(), PlatformError> {
    let tab = api.tab(tab_id).await?;

    let Some(icon) = tab.url.as_deref().and_then(icon_for_url) else {
        log::debug!("Tab {} is not a web page, icon left as is", tab_id);
        return Ok(());
    };

    if !api.set_icon(tab_id, icon).await? {
        log::debug!("No per-tab icon API, skipped tab {}", tab_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconSet;
    use crate::platform::testing::FakeBrowser;
    use crate::tab_data::TabInfo;
    use futures::executor::block_on;

    fn browser() -> FakeBrowser {
        FakeBrowser::new(vec![
            TabInfo::new(1, "https://rating.chgk.info/player/1"),
            TabInfo::new(2, "https://rating.maii.li/b/"),
            TabInfo::new(3, "https://example.com/"),
            TabInfo::new(4, "chrome://extensions/"),
            TabInfo { id: 5, url: None },
        ])
    }

    #[test]
    fn test_on_installed_sweeps_all_tabs() {
        let api = browser();

        block_on(on_installed(&api, "install"));

        assert_eq!(
            *api.icons.borrow(),
            vec![
                (1, IconSet::Normal),
                (2, IconSet::AlternateBranding),
                (3, IconSet::Disabled),
            ]
        );
    }

    #[test]
    fn test_on_tab_activated() {
        let api = browser();

        block_on(on_tab_activated(&api, 2));

        assert_eq!(*api.icons.borrow(), vec![(2, IconSet::AlternateBranding)]);
    }

    #[test]
    fn test_on_tab_updated_waits_for_complete() {
        let api = browser();
        let loading = TabChange { status: Some("loading".to_string()), url: None };
        let complete = TabChange { status: Some("complete".to_string()), url: None };

        block_on(on_tab_updated(&api, 3, &loading));
        assert!(api.icons.borrow().is_empty());

        block_on(on_tab_updated(&api, 3, &complete));
        assert_eq!(*api.icons.borrow(), vec![(3, IconSet::Disabled)]);
    }

    #[test]
    fn test_refresh_skips_tab_id_none_and_missing_tabs() {
        let api = browser();

        block_on(refresh_icon(&api, TAB_ID_NONE));
        block_on(refresh_icon(&api, 99));

        assert!(api.icons.borrow().is_empty());
    }

    #[test]
    fn test_missing_icon_api_is_a_no_op() {
        let mut api = browser();
        api.icon_api = false;

        block_on(on_installed(&api, "update"));

        assert!(api.icons.borrow().is_empty());
    }
}
