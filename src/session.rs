/// Popup session: what the popup knows about the active tab

use crate::error::PlatformError;
use crate::operations::{copy_link_url, switch_url};
use crate::platform::Platform;
use crate::site::{classify, Site};
use crate::tab_data::Location;
use crate::translate::{page_kind, PageKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    /// Active tab not read yet
    Uninitialized,
    Unsupported,
    OnPrimary,
    OnMirror(Site),
    OnAlternate,
}

impl PopupState {
    fn for_site(site: Option<Site>) -> PopupState {
        match site {
            None => PopupState::Unsupported,
            Some(Site::Primary) => PopupState::OnPrimary,
            Some(Site::Alternate) => PopupState::OnAlternate,
            Some(mirror) => PopupState::OnMirror(mirror),
        }
    }

    pub fn site(self) -> Option<Site> {
        match self {
            PopupState::OnPrimary => Some(Site::Primary),
            PopupState::OnMirror(mirror) => Some(mirror),
            PopupState::OnAlternate => Some(Site::Alternate),
            PopupState::Uninitialized | PopupState::Unsupported => None,
        }
    }
}

/// A navigation button in the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchButton {
    To(Site),
    /// The single button a mirror shows for the other mirror
    OtherMirror(Site),
}

impl SwitchButton {
    pub fn target(self) -> Site {
        match self {
            SwitchButton::To(site) | SwitchButton::OtherMirror(site) => site,
        }
    }

    /// DOM id, kept stable for the popup stylesheet
    pub fn element_id(self) -> &'static str {
        match self {
            SwitchButton::OtherMirror(_) => "switch-to-other-mirror",
            SwitchButton::To(Site::Primary) => "switch-to-original",
            SwitchButton::To(Site::MirrorMe) => "switch-to-pecheny-me",
            SwitchButton::To(Site::MirrorKz) => "switch-to-pecheny-kz",
            SwitchButton::To(Site::Alternate) => "switch-to-maii",
        }
    }

    pub fn label(self) -> String {
        match self {
            SwitchButton::To(Site::Primary) => "Основной сайт".to_string(),
            SwitchButton::To(site) => format!("Перейти на {}", site.host()),
            SwitchButton::OtherMirror(site) => format!("Другое зеркало ({})", site.host()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupSession {
    state: PopupState,
    location: Option<Location>,
    page: PageKind,
    /// The very first read of the active tab failed
    read_failed: bool,
}

impl PopupSession {
    pub fn new() -> Self {
        PopupSession {
            state: PopupState::Uninitialized,
            location: None,
            page: PageKind::Unrecognized,
            read_failed: false,
        }
    }

    /// Re-read the active tab's URL. Returns true when anything changed.
    pub fn update(&mut self, url: Option<&str>) -> bool {
        let location = url.and_then(Location::parse);
        if self.state != PopupState::Uninitialized && location == self.location {
            return false;
        }

        let site = location.as_ref().and_then(|loc| classify(&loc.hostname));
        self.state = PopupState::for_site(site);
        self.page = match (&location, site) {
            (Some(loc), Some(site)) => page_kind(&loc.path, site.is_alternate()),
            _ => PageKind::Unrecognized,
        };
        self.location = location;
        self.read_failed = false;
        true
    }

    /// The active tab could not be read. Only the first failure changes
    /// anything; later ones keep the last known page.
    pub fn fail_read(&mut self) -> bool {
        if self.state != PopupState::Uninitialized {
            return false;
        }
        self.state = PopupState::Unsupported;
        self.read_failed = true;
        true
    }

    pub fn read_failed(&self) -> bool {
        self.read_failed
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn site(&self) -> Option<Site> {
        self.state.site()
    }

    pub fn page(&self) -> &PageKind {
        &self.page
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn copy_enabled(&self) -> bool {
        self.site().is_some()
    }

    /// Navigation buttons for the current page, in display order
    pub fn buttons(&self) -> Vec<SwitchButton> {
        let translatable = self.page.is_translatable();

        let mut buttons = match self.state {
            PopupState::Uninitialized | PopupState::Unsupported => Vec::new(),
            PopupState::OnPrimary => vec![
                SwitchButton::To(Site::MirrorMe),
                SwitchButton::To(Site::MirrorKz),
            ],
            PopupState::OnMirror(mirror) => {
                let mut buttons = vec![SwitchButton::To(Site::Primary)];
                buttons.extend(mirror.other_mirror().map(SwitchButton::OtherMirror));
                buttons
            }
            PopupState::OnAlternate if translatable => vec![
                SwitchButton::To(Site::Primary),
                SwitchButton::To(Site::MirrorMe),
                SwitchButton::To(Site::MirrorKz),
            ],
            PopupState::OnAlternate => Vec::new(),
        };

        if matches!(self.state, PopupState::OnPrimary | PopupState::OnMirror(_)) && translatable {
            buttons.push(SwitchButton::To(Site::Alternate));
        }

        buttons
    }

    /// Destination URL for a switch to `to`, or `None` off the supported sites
    pub fn switch_url(&self, to: Site) -> Option<String> {
        let from = self.site()?;
        let location = self.location.as_ref()?;
        Some(switch_url(from, to, &location.path))
    }

    pub fn copy_url(&self) -> Option<String> {
        self.site()?;
        self.location.as_ref().map(|loc| copy_link_url(&loc.path))
    }
}

/// Navigate the active tab to the counterpart of the current page on `to`
pub async fn switch_site<P: Platform>(
    api: &P,
    session: &PopupSession,
    to: Site,
) -> Result<(), PlatformError> {
    let Some(url) = session.switch_url(to) else {
        log::debug!("Switch to {} ignored on an unsupported page", to.host());
        return Ok(());
    };

    let tab = api.active_tab().await?;
    log::info!("Switching tab {} to {}", tab.id, url);
    api.navigate(tab.id, &url).await
}

/// Copy the primary-site link for the current page. Returns the copied URL,
/// `None` when the page is unsupported.
pub async fn copy_link<P: Platform>(
    api: &P,
    session: &PopupSession,
) -> Result<Option<String>, PlatformError> {
    let Some(url) = session.copy_url() else {
        return Ok(None);
    };

    api.write_clipboard(&url).await?;
    Ok(Some(url))
}

impl Default for PopupSession {
    fn default() -> Self {
        Self::new()
    }
}
