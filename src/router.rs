#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    History,
    Create,
    Success,
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewLoad {
    History,
    Settings,
}

impl View {
    pub fn on_enter(self) -> Option<ViewLoad> {
        match self {
            View::History => Some(ViewLoad::History),
            View::Settings => Some(ViewLoad::Settings),
            View::Create | View::Success => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::History => "Receipt History",
            View::Create => "Create Receipt",
            View::Success => "Receipt Generated",
            View::Settings => "Settings",
        }
    }
}

pub struct NavItem {
    pub label: &'static str,
    pub view: View,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "History",
        view: View::History,
    },
    NavItem {
        label: "Create Receipt",
        view: View::Create,
    },
    NavItem {
        label: "Settings",
        view: View::Settings,
    },
];

pub fn nav_class(item: View, active: View) -> &'static str {
    if item == active {
        "nav-link text-sm text-primary font-bold"
    } else {
        "nav-link text-sm text-slate-600 font-medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_history() {
        assert_eq!(View::default(), View::History);
    }

    #[test]
    fn only_history_and_settings_load() {
        assert_eq!(View::History.on_enter(), Some(ViewLoad::History));
        assert_eq!(View::Settings.on_enter(), Some(ViewLoad::Settings));
        assert_eq!(View::Create.on_enter(), None);
        assert_eq!(View::Success.on_enter(), None);
    }

    #[test]
    fn highlight_follows_active_view() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| nav_class(item.view, View::Settings).contains("font-bold"))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Settings"]);
    }
}
