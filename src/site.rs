/// Site classification for the rating domain family

use url::Url;

/// One of the supported rating hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    /// rating.chgk.info, the canonical site
    Primary,
    /// rating.pecheny.me
    MirrorMe,
    /// rating.pecheny.kz
    MirrorKz,
    /// rating.maii.li, serves the same entities under the `/b/` scheme
    Alternate,
}

impl Site {
    /// Every supported site, in display order
    pub const ALL: [Site; 4] = [Site::Primary, Site::MirrorMe, Site::MirrorKz, Site::Alternate];

    pub fn host(self) -> &'static str {
        match self {
            Site::Primary => "rating.chgk.info",
            Site::MirrorMe => "rating.pecheny.me",
            Site::MirrorKz => "rating.pecheny.kz",
            Site::Alternate => "rating.maii.li",
        }
    }

    /// True for the host that uses the `/b/` path scheme
    pub fn is_alternate(self) -> bool {
        self == Site::Alternate
    }

    /// The mirror a mirror's "other mirror" button points at
    pub fn other_mirror(self) -> Option<Site> {
        match self {
            Site::MirrorMe => Some(Site::MirrorKz),
            Site::MirrorKz => Some(Site::MirrorMe),
            _ => None,
        }
    }

    /// Build an absolute https URL on this host
    pub fn url_for(self, path: &str) -> String {
        format!("https://{}{}", self.host(), path)
    }
}

/// Classify a hostname. `None` means the host is unsupported.
///
/// Hostnames are compared exactly as the URL parser delivered them: no case
/// folding, no trailing-dot stripping, no punycode handling.
pub fn classify(hostname: &str) -> Option<Site> {
    Site::ALL.into_iter().find(|site| site.host() == hostname)
}

/// Parse a full URL and classify its host. Unparsable URLs are unsupported.
pub fn classify_url(url: &str) -> Option<Site> {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().and_then(classify))
}

/// Status line shown at the top of the popup
#[derive(Debug, Clone, PartialEq)]
pub struct SiteStatus {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn site_status(site: Option<Site>) -> SiteStatus {
    let (label, color) = match site {
        Some(Site::Primary) => ("Основной сайт (rating.chgk.info)", "#4caf50"),
        Some(Site::MirrorMe) => ("Зеркало (rating.pecheny.me)", "#ff9800"),
        Some(Site::MirrorKz) => ("Зеркало (rating.pecheny.kz)", "#ff9800"),
        Some(Site::Alternate) => ("Рейтинг МАИИ (rating.maii.li)", "#2196f3"),
        None => ("Неизвестный сайт", "#f44336"),
    };
    SiteStatus { label, color }
}
