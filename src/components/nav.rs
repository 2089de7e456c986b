//! Navigation Component
//!
//! Sidebar navigation and the closed set of top-level sections.

use leptos::*;
use leptos_router::*;

/// Top-level screens, one per navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    Board,
    Timeline,
    Alerts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Projects,
        Section::Board,
        Section::Timeline,
        Section::Alerts,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Section::Projects => "/",
            Section::Board => "/board",
            Section::Timeline => "/timeline",
            Section::Alerts => "/alerts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Board => "Board",
            Section::Timeline => "Timeline",
            Section::Alerts => "Alerts",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Projects => "📁",
            Section::Board => "🧩",
            Section::Timeline => "📅",
            Section::Alerts => "⚡",
        }
    }

    /// Flat path dispatch; anything outside the four literals is `None` and
    /// falls through to the NotFound page.
    pub fn from_path(path: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.path() == path)
    }
}

/// Sidebar with one link per section.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-52 shrink-0 bg-gray-800 border-r border-gray-700 px-3 py-6">
            <div class="text-xs uppercase tracking-wider text-gray-500 px-3 mb-3">
                "Navigation"
            </div>
            <div class="space-y-1">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <SidebarLink section=section /> })
                    .collect_view()}
            </div>
        </aside>
    }
}

/// Individual sidebar link.
#[component]
fn SidebarLink(section: Section) -> impl IntoView {
    view! {
        <A
            href=section.path()
            exact=true
            class="flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-300
                   hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{section.icon()}</span>
            <span class="text-sm font-medium">{section.label()}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_dispatches_each_literal() {
        assert_eq!(Section::from_path("/"), Some(Section::Projects));
        assert_eq!(Section::from_path("/board"), Some(Section::Board));
        assert_eq!(Section::from_path("/timeline"), Some(Section::Timeline));
        assert_eq!(Section::from_path("/alerts"), Some(Section::Alerts));
    }

    #[test]
    fn test_from_path_rejects_unknown() {
        assert_eq!(Section::from_path("/settings"), None);
        assert_eq!(Section::from_path(""), None);
        assert_eq!(Section::from_path("/board/1"), None);
    }

    #[test]
    fn test_paths_are_distinct() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.path(), b.path());
                }
            }
        }
    }
}
