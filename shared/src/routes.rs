//! Client-side route table.
//!
//! Two linear flows share the home screen:
//! `/ -> /scan-intro -> /scan -> /analysis` and
//! `/ -> /consent -> /capture -> /analyzing -> /results -> /recommendations -> /shoe-detail/{id}`.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    ScanIntro,
    Scan,
    Analysis,
    Consent,
    Capture,
    Analyzing,
    Results,
    Recommendations,
    ShoeDetail(String),
}

impl Screen {
    pub fn path(&self) -> String {
        match self {
            Screen::Home => "/".to_string(),
            Screen::ScanIntro => "/scan-intro".to_string(),
            Screen::Scan => "/scan".to_string(),
            Screen::Analysis => "/analysis".to_string(),
            Screen::Consent => "/consent".to_string(),
            Screen::Capture => "/capture".to_string(),
            Screen::Analyzing => "/analyzing".to_string(),
            Screen::Results => "/results".to_string(),
            Screen::Recommendations => "/recommendations".to_string(),
            Screen::ShoeDetail(id) => format!("/shoe-detail/{}", id),
        }
    }

    /// Unknown paths resolve to the home screen.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Screen::Home,
            "/scan-intro" => Screen::ScanIntro,
            "/scan" => Screen::Scan,
            "/analysis" => Screen::Analysis,
            "/consent" => Screen::Consent,
            "/capture" => Screen::Capture,
            "/analyzing" => Screen::Analyzing,
            "/results" => Screen::Results,
            "/recommendations" => Screen::Recommendations,
            other => match other.strip_prefix("/shoe-detail/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Screen::ShoeDetail(id.to_string())
                }
                _ => Screen::Home,
            },
        }
    }

    /// Where the header's back arrow leads.
    pub fn back(&self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::ScanIntro | Screen::Consent => Some(Screen::Home),
            Screen::Scan => Some(Screen::ScanIntro),
            Screen::Analysis => Some(Screen::Scan),
            Screen::Capture => Some(Screen::Consent),
            Screen::Analyzing => None,
            Screen::Results => Some(Screen::Home),
            Screen::Recommendations => Some(Screen::Analysis),
            Screen::ShoeDetail(_) => Some(Screen::Recommendations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        let screens = [
            Screen::Home,
            Screen::ScanIntro,
            Screen::Scan,
            Screen::Analysis,
            Screen::Consent,
            Screen::Capture,
            Screen::Analyzing,
            Screen::Results,
            Screen::Recommendations,
            Screen::ShoeDetail("2".to_string()),
        ];
        for screen in screens {
            assert_eq!(Screen::from_path(&screen.path()), screen);
        }
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        assert_eq!(Screen::from_path("/results/"), Screen::Results);
        assert_eq!(Screen::from_path("/capture?tab=thermal"), Screen::Capture);
        assert_eq!(Screen::from_path("/shoe-detail/9#top"), Screen::ShoeDetail("9".into()));
    }

    #[test]
    fn test_unknown_paths_go_home() {
        assert_eq!(Screen::from_path("/nope"), Screen::Home);
        assert_eq!(Screen::from_path("/shoe-detail/"), Screen::Home);
        assert_eq!(Screen::from_path("/shoe-detail/1/extra"), Screen::Home);
    }

    #[test]
    fn test_back_links() {
        assert_eq!(Screen::Scan.back(), Some(Screen::ScanIntro));
        assert_eq!(Screen::Analysis.back(), Some(Screen::Scan));
        assert_eq!(Screen::ShoeDetail("1".into()).back(), Some(Screen::Recommendations));
        assert_eq!(Screen::Home.back(), None);
    }
}
