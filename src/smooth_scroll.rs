use crate::scroll_spy::href_fragment;

/// Element id an anchor click should scroll to, if the anchor points inside
/// the current page.
pub fn anchor_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') {
        return None;
    }
    href_fragment(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_same_page_fragments_are_intercepted() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog#intro"), None);
        assert_eq!(anchor_target("https://example.com/#top"), None);
    }
}
