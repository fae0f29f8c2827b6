use crate::config::{AWAY_TITLE, FAVICON_AWAY, FAVICON_VISIBLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabPresence {
    Visible,
    Hidden,
}

impl TabPresence {
    pub fn from_visible(is_visible: bool) -> Self {
        if is_visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Title and favicon to show for each visibility state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabIdentity {
    original_title: String,
}

impl TabIdentity {
    pub fn capture(original_title: impl Into<String>) -> Self {
        Self {
            original_title: original_title.into(),
        }
    }

    pub fn title(&self, presence: TabPresence) -> &str {
        match presence {
            TabPresence::Visible => &self.original_title,
            TabPresence::Hidden => AWAY_TITLE,
        }
    }

    pub fn favicon(&self, presence: TabPresence) -> &'static str {
        match presence {
            TabPresence::Visible => FAVICON_VISIBLE,
            TabPresence::Hidden => FAVICON_AWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transition_lands_on_matching_pair() {
        let identity = TabIdentity::capture("Portfolio | Jordan Reyes");
        let transitions = [true, false, false, true, false, true, true];

        for is_visible in transitions {
            let presence = TabPresence::from_visible(is_visible);
            let (title, favicon) = (identity.title(presence), identity.favicon(presence));
            if is_visible {
                assert_eq!(title, "Portfolio | Jordan Reyes");
                assert_eq!(favicon, FAVICON_VISIBLE);
            } else {
                assert_eq!(title, AWAY_TITLE);
                assert_eq!(favicon, FAVICON_AWAY);
            }
        }
    }

    #[test]
    fn empty_original_title_is_restored_as_is() {
        let identity = TabIdentity::capture("");
        assert_eq!(identity.title(TabPresence::Visible), "");
        assert_eq!(identity.title(TabPresence::Hidden), AWAY_TITLE);
    }
}
