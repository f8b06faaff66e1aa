/// Path translation between the primary and the `/b/` URL schemes
///
/// The primary and mirror sites share one scheme:
/// - `/player/123`, `/tournament/7`, `/teams/42`
///
/// The alternate site prefixes everything with `/b/` and uses a singular
/// noun for teams, always with a trailing slash:
/// - `/b/player/123/`, `/b/tournament/7/`, `/b/team/42/`

use regex::Regex;
use std::sync::LazyLock;

static PRIMARY_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(player|tournament|teams)/([0-9]+)").expect("valid regex"));

static ALTERNATE_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/b/(player|tournament|team)/([0-9]+)").expect("valid regex"));

/// Home path of the alternate scheme, used when translation fails
pub const ALTERNATE_HOME: &str = "/b/";
/// Home path of the primary scheme
pub const PRIMARY_HOME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Tournament,
    Team,
}

impl EntityKind {
    fn primary_noun(self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Tournament => "tournament",
            EntityKind::Team => "teams",
        }
    }

    fn alternate_noun(self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Tournament => "tournament",
            EntityKind::Team => "team",
        }
    }

    fn from_noun(noun: &str) -> Option<EntityKind> {
        match noun {
            "player" => Some(EntityKind::Player),
            "tournament" => Some(EntityKind::Tournament),
            "team" | "teams" => Some(EntityKind::Team),
            _ => None,
        }
    }
}

/// An entity a page is about. The id is kept as the digit string found in
/// the path, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn primary_path(&self) -> String {
        format!("/{}/{}", self.kind.primary_noun(), self.id)
    }

    pub fn alternate_path(&self) -> String {
        format!("/b/{}/{}/", self.kind.alternate_noun(), self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Entity(EntityRef),
    Home,
    Unrecognized,
}

impl PageKind {
    /// Home and entity pages are the ones with a counterpart on the other scheme
    pub fn is_translatable(&self) -> bool {
        !matches!(self, PageKind::Unrecognized)
    }
}

/// Drop the query string and fragment
pub fn base_path(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

fn match_entity(pattern: &Regex, path: &str) -> Option<EntityRef> {
    let caps = pattern.captures(base_path(path))?;
    let kind = EntityKind::from_noun(caps.get(1)?.as_str())?;
    let id = caps.get(2)?.as_str().to_string();
    Some(EntityRef { kind, id })
}

/// Extract the entity from a primary-scheme path
pub fn parse_primary(path: &str) -> Option<EntityRef> {
    match_entity(&PRIMARY_ENTITY, path)
}

/// Extract the entity from an alternate-scheme path
pub fn parse_alternate(path: &str) -> Option<EntityRef> {
    match_entity(&ALTERNATE_ENTITY, path)
}

/// Translate a primary-scheme path to the alternate scheme.
///
/// Returns `None` when the path is not an entity page. Query, fragment and
/// any segments after the id are dropped.
pub fn to_alternate_scheme(path: &str) -> Option<String> {
    parse_primary(path).map(|entity| entity.alternate_path())
}

/// Translate an alternate-scheme path to the primary scheme.
///
/// `/b/` is a home path, not an entity, so it yields `None`; check
/// [`is_home_path`] first.
pub fn to_primary_scheme(path: &str) -> Option<String> {
    parse_alternate(path).map(|entity| entity.primary_path())
}

/// True for the home page of either scheme: `/`, `/b/` or `/b`
pub fn is_home_path(path: &str) -> bool {
    matches!(base_path(path), "/" | "/b/" | "/b")
}

/// Classify a path against the scheme of the site it was read from
pub fn page_kind(path: &str, alternate_scheme: bool) -> PageKind {
    let entity = if alternate_scheme {
        parse_alternate(path)
    } else {
        parse_primary(path)
    };

    match entity {
        Some(entity) => PageKind::Entity(entity),
        None if is_home_path(path) => PageKind::Home,
        None => PageKind::Unrecognized,
    }
}
