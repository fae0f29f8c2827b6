//! Selectors shared between the rendered markup and the behaviors that query it.
//!
//! Components render ids and classes from these constants, and the DOM glue
//! queries with the same constants, so the two cannot drift apart.

pub const APP_ROOT_ID: &str = "app";
pub const NAVBAR_CLASS: &str = "navbar";
pub const NAV_OPEN_CLASS: &str = "nav-toggle";
pub const MENU_BUTTON_ID: &str = "menu";
pub const MENU_OPEN_ICON_CLASS: &str = "fa-times";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLL_TOP_ID: &str = "scroll-top";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^='#']";
pub const FAVICON_SELECTOR: &str = "link[rel~='icon']";
pub const TOAST_CONTAINER_ID: &str = "toast-container";
pub const TOAST_CLASS: &str = "toast";
pub const COPY_TARGET_ATTR: &str = "data-copy";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CHAT_WIDGET_SCRIPT_ID: &str = "chat-widget-script";
pub const NOISE_OVERLAY_CLASS: &str = "noise-overlay";

// Reference listing; the tests hold every constant above to it.
#[cfg_attr(not(test), allow(dead_code))]
pub struct SelectorContract {
    pub selector: &'static str,
    pub purpose: &'static str,
}

#[cfg_attr(not(test), allow(dead_code))]
pub const CONTRACT: &[SelectorContract] = &[
    SelectorContract { selector: "#app", purpose: "application mount point" },
    SelectorContract { selector: ".navbar", purpose: "primary navigation, toggled open on small screens" },
    SelectorContract { selector: ".nav-toggle", purpose: "navbar open state" },
    SelectorContract { selector: "#menu", purpose: "menu toggle button" },
    SelectorContract { selector: ".fa-times", purpose: "menu button icon while open" },
    SelectorContract { selector: ".active", purpose: "nav link of the section in view" },
    SelectorContract { selector: "#scroll-top", purpose: "scroll-to-top button" },
    SelectorContract { selector: "section[id]", purpose: "scroll spy targets" },
    SelectorContract { selector: "a[href^='#']", purpose: "smooth scroll anchors" },
    SelectorContract { selector: "link[rel~='icon']", purpose: "favicon swapped on tab visibility" },
    SelectorContract { selector: "#toast-container", purpose: "toast host" },
    SelectorContract { selector: ".toast", purpose: "single toast notification" },
    SelectorContract { selector: "[data-copy]", purpose: "copy-to-clipboard buttons" },
    SelectorContract { selector: "#contact-form", purpose: "contact form forwarded to the email relay" },
    SelectorContract { selector: "#chat-widget-script", purpose: "chat widget loader script" },
    SelectorContract { selector: ".noise-overlay", purpose: "decorative grain layer" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn id_selector(id: &str) -> String {
        format!("#{id}")
    }

    fn class_selector(class: &str) -> String {
        format!(".{class}")
    }

    #[test]
    fn contract_entries_are_unique_and_described() {
        let mut seen = HashSet::new();
        for entry in CONTRACT {
            assert!(seen.insert(entry.selector), "duplicate selector {}", entry.selector);
            assert!(!entry.purpose.trim().is_empty());
        }
    }

    #[test]
    fn constants_are_listed_in_contract() {
        let listed: HashSet<&str> = CONTRACT.iter().map(|entry| entry.selector).collect();
        let expected = [
            id_selector(APP_ROOT_ID),
            class_selector(NAVBAR_CLASS),
            class_selector(NAV_OPEN_CLASS),
            id_selector(MENU_BUTTON_ID),
            class_selector(MENU_OPEN_ICON_CLASS),
            class_selector(ACTIVE_CLASS),
            id_selector(SCROLL_TOP_ID),
            SECTION_SELECTOR.to_string(),
            IN_PAGE_ANCHOR_SELECTOR.to_string(),
            FAVICON_SELECTOR.to_string(),
            id_selector(TOAST_CONTAINER_ID),
            class_selector(TOAST_CLASS),
            format!("[{COPY_TARGET_ATTR}]"),
            id_selector(CONTACT_FORM_ID),
            id_selector(CHAT_WIDGET_SCRIPT_ID),
            class_selector(NOISE_OVERLAY_CLASS),
        ];

        for selector in expected {
            assert!(listed.contains(selector.as_str()), "{selector} missing from contract");
        }
        assert_eq!(listed.len(), CONTRACT.len());
    }
}
