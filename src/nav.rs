use crate::dashboard::QuickStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Training,
    Placement,
    InteractionHub,
    ResumeScanner,
    InterviewPractice,
    Profile,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GraduationCap,
    BookOpen,
    Briefcase,
    MessageSquare,
    FileText,
    Video,
    User,
    Settings,
}

impl Icon {
    pub fn glyph(self) -> char {
        match self {
            Icon::GraduationCap => '🎓',
            Icon::BookOpen => '📖',
            Icon::Briefcase => '💼',
            Icon::MessageSquare => '💬',
            Icon::FileText => '📄',
            Icon::Video => '🎥',
            Icon::User => '👤',
            Icon::Settings => '⚙',
        }
    }
}

/// Where a sidebar badge gets its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    None,
    NewCourses,
    UnreadMessages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
    pub icon: Icon,
    pub badge: Badge,
}

pub const NAVIGATION: [NavItem; 8] = [
    NavItem {
        screen: Screen::Dashboard,
        label: "Dashboard",
        icon: Icon::GraduationCap,
        badge: Badge::None,
    },
    NavItem {
        screen: Screen::Training,
        label: "Training Programs",
        icon: Icon::BookOpen,
        badge: Badge::NewCourses,
    },
    NavItem {
        screen: Screen::Placement,
        label: "Placement Resources",
        icon: Icon::Briefcase,
        badge: Badge::None,
    },
    NavItem {
        screen: Screen::InteractionHub,
        label: "Interaction Hub",
        icon: Icon::MessageSquare,
        badge: Badge::UnreadMessages,
    },
    NavItem {
        screen: Screen::ResumeScanner,
        label: "AI Resume Scanner",
        icon: Icon::FileText,
        badge: Badge::None,
    },
    NavItem {
        screen: Screen::InterviewPractice,
        label: "Interview Practice",
        icon: Icon::Video,
        badge: Badge::None,
    },
    NavItem {
        screen: Screen::Profile,
        label: "Profile",
        icon: Icon::User,
        badge: Badge::None,
    },
    NavItem {
        screen: Screen::Settings,
        label: "Settings",
        icon: Icon::Settings,
        badge: Badge::None,
    },
];

impl NavItem {
    pub fn lookup(screen: Screen) -> &'static NavItem {
        match screen {
            Screen::Dashboard => &NAVIGATION[0],
            Screen::Training => &NAVIGATION[1],
            Screen::Placement => &NAVIGATION[2],
            Screen::InteractionHub => &NAVIGATION[3],
            Screen::ResumeScanner => &NAVIGATION[4],
            Screen::InterviewPractice => &NAVIGATION[5],
            Screen::Profile => &NAVIGATION[6],
            Screen::Settings => &NAVIGATION[7],
        }
    }

    /// Badge text, hidden when the underlying count is zero.
    pub fn badge_text(&self, stats: &QuickStats) -> Option<String> {
        match self.badge {
            Badge::None => None,
            Badge::NewCourses => (stats.available_courses > 0)
                .then(|| format!("{} new", stats.available_courses)),
            Badge::UnreadMessages => {
                (stats.unread_messages > 0).then(|| stats.unread_messages.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, CatalogSource};

    #[test]
    fn lookup_matches_table_order() {
        for item in &NAVIGATION {
            assert_eq!(NavItem::lookup(item.screen), item);
        }
    }

    #[test]
    fn badges_derive_from_stats() {
        let catalog = BundledCatalog.load().unwrap();
        let stats = QuickStats::compute(&catalog, chrono::Utc::now());
        let hub = NavItem::lookup(Screen::InteractionHub);
        assert_eq!(hub.badge_text(&stats), Some("7".to_string()));
        let training = NavItem::lookup(Screen::Training);
        assert_eq!(training.badge_text(&stats), Some("4 new".to_string()));
        assert_eq!(NavItem::lookup(Screen::Profile).badge_text(&stats), None);
    }
}
