// Top-level views.
// The four screens the app can show and how tab cycling moves between them.

/// Active top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Upload,
    Analysis,
    Profile,
    Pricing,
}

impl View {
    /// Views in tab-bar order.
    pub const ALL: [View; 4] = [View::Upload, View::Analysis, View::Profile, View::Pricing];

    pub fn title(&self) -> &'static str {
        match self {
            View::Upload => "Upload",
            View::Analysis => "Analysis",
            View::Profile => "Profile",
            View::Pricing => "Pricing",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            View::Upload => "upload",
            View::Analysis => "analysis",
            View::Profile => "profile",
            View::Pricing => "pricing",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Upload => 0,
            View::Analysis => 1,
            View::Profile => 2,
            View::Pricing => 3,
        }
    }

    /// View for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        match self {
            View::Upload => View::Analysis,
            View::Analysis => View::Profile,
            View::Profile => View::Pricing,
            View::Pricing => View::Upload,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            View::Upload => View::Pricing,
            View::Analysis => View::Upload,
            View::Profile => View::Analysis,
            View::Pricing => View::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_upload() {
        assert_eq!(View::default(), View::Upload);
    }

    #[test]
    fn test_cycle_visits_all_views() {
        let mut view = View::Upload;
        let mut seen = Vec::new();
        for _ in 0..View::ALL.len() {
            seen.push(view);
            view = view.next();
        }
        assert_eq!(seen, View::ALL);
        assert_eq!(view, View::Upload);

        for v in View::ALL {
            assert_eq!(v.next().prev(), v);
        }
    }

    #[test]
    fn test_from_number() {
        assert_eq!(View::from_number(1), Some(View::Upload));
        assert_eq!(View::from_number(4), Some(View::Pricing));
        assert_eq!(View::from_number(0), None);
        assert_eq!(View::from_number(5), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, v) in View::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }
}
