//! Consent gate: three acknowledgements, all required to continue.

use strum_macros::{AsRefStr, EnumIter};

use crate::routes::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum ConsentItem {
    #[strum(to_string = "I understand this is a screening tool")]
    ScreeningTool,
    #[strum(to_string = "I agree to the Privacy Policy")]
    PrivacyPolicy,
    #[strum(to_string = "I agree to the Terms of Service")]
    TermsOfService,
}

impl ConsentItem {
    pub fn id(&self) -> &'static str {
        match self {
            ConsentItem::ScreeningTool => "consent",
            ConsentItem::PrivacyPolicy => "privacy",
            ConsentItem::TermsOfService => "terms",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConsentItem::ScreeningTool => {
                "I understand that this application provides screening and not a medical diagnosis. \
                 I will consult healthcare professionals for any concerns."
            }
            ConsentItem::PrivacyPolicy => {
                "I consent to the collection and processing of my health data as described in the \
                 Privacy Policy. My data will be securely stored and used only for the purposes stated."
            }
            ConsentItem::TermsOfService => {
                "I have read and agree to the Terms of Service governing the use of this application."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentEvent {
    Set(ConsentItem, bool),
    Toggle(ConsentItem),
}

/// Recreated empty on every visit; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsentState {
    pub screening_tool: bool,
    pub privacy_policy: bool,
    pub terms_of_service: bool,
}

impl ConsentState {
    pub fn new(screening_tool: bool, privacy_policy: bool, terms_of_service: bool) -> Self {
        Self {
            screening_tool,
            privacy_policy,
            terms_of_service,
        }
    }

    pub fn is_checked(&self, item: ConsentItem) -> bool {
        match item {
            ConsentItem::ScreeningTool => self.screening_tool,
            ConsentItem::PrivacyPolicy => self.privacy_policy,
            ConsentItem::TermsOfService => self.terms_of_service,
        }
    }

    pub fn all_checked(&self) -> bool {
        self.screening_tool && self.privacy_policy && self.terms_of_service
    }

    /// Where the continue action leads, or `None` while it is inert.
    pub fn continue_target(&self) -> Option<Screen> {
        self.all_checked().then_some(Screen::Capture)
    }

    pub fn apply(&self, event: ConsentEvent) -> Self {
        let (item, value) = match event {
            ConsentEvent::Set(item, value) => (item, value),
            ConsentEvent::Toggle(item) => (item, !self.is_checked(item)),
        };
        let mut next = *self;
        match item {
            ConsentItem::ScreeningTool => next.screening_tool = value,
            ConsentItem::PrivacyPolicy => next.privacy_policy = value,
            ConsentItem::TermsOfService => next.terms_of_service = value,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_all_true_enables_continue() {
        let mut enabled = 0;
        for bits in 0u8..8 {
            let state = ConsentState::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            if state.all_checked() {
                enabled += 1;
                assert_eq!(bits, 7);
                assert_eq!(state.continue_target(), Some(Screen::Capture));
            } else {
                assert_eq!(state.continue_target(), None);
            }
        }
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_fresh_state_is_unchecked() {
        let state = ConsentState::default();
        assert!(ConsentItem::iter().all(|item| !state.is_checked(item)));
        assert!(!state.all_checked());
    }

    #[test]
    fn test_toggle_flips_one_item() {
        let state = ConsentState::default()
            .apply(ConsentEvent::Toggle(ConsentItem::PrivacyPolicy))
            .apply(ConsentEvent::Set(ConsentItem::TermsOfService, true));
        assert!(state.privacy_policy);
        assert!(state.terms_of_service);
        assert!(!state.screening_tool);

        let state = state.apply(ConsentEvent::Toggle(ConsentItem::PrivacyPolicy));
        assert!(!state.privacy_policy);
    }

    #[test]
    fn test_unchecking_disables_continue() {
        let state = ConsentState::new(true, true, true)
            .apply(ConsentEvent::Set(ConsentItem::ScreeningTool, false));
        assert_eq!(state.continue_target(), None);
    }
}
