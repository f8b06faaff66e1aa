/// Popup UI, rendered with Yew

pub mod components;
pub mod popup;

#[cfg(test)]
mod tests {
    const POPUP_HTML: &str = include_str!("../../extension/popup.html");

    #[test]
    fn test_popup_page_links_patternfly_before_own_styles() {
        let patternfly = POPUP_HTML.find("assets/patternfly/patternfly.css");
        let own = POPUP_HTML.find("popup.css");

        assert!(patternfly.is_some());
        assert!(patternfly < own);
    }
}
