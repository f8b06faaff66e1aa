/// Site switching: where a "switch to" or "copy link" action leads

use crate::site::Site;
use crate::translate::{
    is_home_path, to_alternate_scheme, to_primary_scheme, ALTERNATE_HOME, PRIMARY_HOME,
};

/// Path to open on `to` for a page showing `path` on `from`
pub fn destination_path(from: Site, to: Site, path: &str) -> String {
    match (from.is_alternate(), to.is_alternate()) {
        // Primary and mirrors share one scheme
        (false, false) | (true, true) => path.to_string(),
        (false, true) => to_alternate_scheme(path).unwrap_or_else(|| ALTERNATE_HOME.to_string()),
        (true, false) => {
            if is_home_path(path) {
                PRIMARY_HOME.to_string()
            } else {
                to_primary_scheme(path).unwrap_or_else(|| PRIMARY_HOME.to_string())
            }
        }
    }
}

/// Absolute URL for switching from `from` to `to`
pub fn switch_url(from: Site, to: Site, path: &str) -> String {
    to.url_for(&destination_path(from, to, path))
}

/// Link to the same path on the primary site. The path is not translated,
/// even when copied from the alternate site.
pub fn copy_link_url(path: &str) -> String {
    Site::Primary.url_for(path)
}
