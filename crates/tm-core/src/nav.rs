/// Icon drawn next to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Clipboard,
    Chip,
    UserGroup,
    ArrowPath,
    Cog,
}

impl NavIcon {
    /// Heroicons 24px outline path data.
    pub fn svg_path(self) -> &'static str {
        match self {
            NavIcon::Home => "M2.25 12l8.954-8.955c.44-.439 1.152-.439 1.591 0L21.75 12M4.5 9.75v10.125c0 .621.504 1.125 1.125 1.125H9.75v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21h4.125c.621 0 1.125-.504 1.125-1.125V9.75M8.25 21h8.25",
            NavIcon::Clipboard => "M9 12h3.75M9 15h3.75M9 18h3.75m3 .75H18a2.25 2.25 0 002.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 00-1.123-.08m-5.801 0c-.065.21-.1.433-.1.664 0 .414.336.75.75.75h4.5a.75.75 0 00.75-.75 2.25 2.25 0 00-.1-.664m-5.8 0A2.251 2.251 0 0113.5 2.25H15c1.012 0 1.867.668 2.15 1.586m-5.8 0c-.376.023-.75.05-1.124.08C9.095 4.01 8.25 4.973 8.25 6.108V8.25m0 0H4.875c-.621 0-1.125.504-1.125 1.125v11.25c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V9.375c0-.621-.504-1.125-1.125-1.125H8.25z",
            NavIcon::Chip => "M8.25 3v1.5M4.5 8.25H3m18 0h-1.5M4.5 12H3m18 0h-1.5m-15 3.75H3m18 0h-1.5M8.25 19.5V21M12 3v1.5m0 15V21m3.75-18v1.5m0 15V21m-9-1.5h10.5a2.25 2.25 0 002.25-2.25V6.75a2.25 2.25 0 00-2.25-2.25H6.75A2.25 2.25 0 004.5 6.75v10.5a2.25 2.25 0 002.25 2.25zm.75-12h9v9h-9v-9z",
            NavIcon::UserGroup => "M18 18.72a9.094 9.094 0 003.741-.479 3 3 0 00-4.682-2.72m.94 3.198l.001.031c0 .225-.012.447-.037.666A11.944 11.944 0 0112 21c-2.17 0-4.207-.576-5.963-1.584A6.062 6.062 0 016 18.719m12 0a5.971 5.971 0 00-.941-3.197m0 0A5.995 5.995 0 0012 12.75a5.995 5.995 0 00-5.058 2.772m0 0a3 3 0 00-4.681 2.72 8.986 8.986 0 003.74.477m.94-3.197a5.971 5.971 0 00-.94 3.197M15 6.75a3 3 0 11-6 0 3 3 0 016 0zm6 3a2.25 2.25 0 11-4.5 0 2.25 2.25 0 014.5 0zm-13.5 0a2.25 2.25 0 11-4.5 0 2.25 2.25 0 014.5 0z",
            NavIcon::ArrowPath => "M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0l3.181 3.183a8.25 8.25 0 0013.803-3.7M4.031 9.865a8.25 8.25 0 0113.803-3.7l3.181 3.182m0-4.991v4.99",
            NavIcon::Cog => "M9.594 3.94c.09-.542.56-.94 1.11-.94h2.593c.55 0 1.02.398 1.11.94l.213 1.281c.063.374.313.686.645.87.074.04.147.083.22.127.324.196.72.257 1.075.124l1.217-.456a1.125 1.125 0 011.37.49l1.296 2.247a1.125 1.125 0 01-.26 1.431l-1.003.827c-.293.24-.438.613-.431.992a6.759 6.759 0 010 .255c-.007.378.138.75.43.99l1.005.828c.424.35.534.954.26 1.43l-1.298 2.247a1.125 1.125 0 01-1.369.491l-1.217-.456c-.355-.133-.75-.072-1.076.124a6.57 6.57 0 01-.22.128c-.331.183-.581.495-.644.869l-.213 1.28c-.09.543-.56.941-1.11.941h-2.594c-.55 0-1.02-.398-1.11-.94l-.213-1.281c-.062-.374-.312-.686-.644-.87a6.52 6.52 0 01-.22-.127c-.325-.196-.72-.257-1.076-.124l-1.217.456a1.125 1.125 0 01-1.369-.49l-1.297-2.247a1.125 1.125 0 01.26-1.431l1.004-.827c.292-.24.437-.613.43-.992a6.932 6.932 0 010-.255c.007-.378-.138-.75-.43-.99l-1.004-.828a1.125 1.125 0 01-.26-1.43l1.297-2.247a1.125 1.125 0 011.37-.491l1.216.456c.356.133.751.072 1.076-.124.072-.044.146-.087.22-.128.332-.183.582-.495.644-.869l.214-1.281z M15 12a3 3 0 11-6 0 3 3 0 016 0z",
        }
    }
}

/// One entry of the sidebar navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// Sidebar entries, in display order.
pub const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/", icon: NavIcon::Home },
    NavItem { label: "Tasks", path: "/tasks", icon: NavIcon::Clipboard },
    NavItem { label: "Models", path: "/models", icon: NavIcon::Chip },
    NavItem { label: "Agents", path: "/agents", icon: NavIcon::UserGroup },
    NavItem { label: "Workflows", path: "/workflows", icon: NavIcon::ArrowPath },
    NavItem { label: "Settings", path: "/settings", icon: NavIcon::Cog },
];

/// Header title when the current path has no navigation entry.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// Exact-match highlight test for a single entry.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

/// The navigation entry whose path equals `current_path`, if any.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| is_active(item, current_path))
}

/// Title shown in the top bar for `current_path`.
pub fn page_title(current_path: &str) -> &'static str {
    active_item(current_path)
        .map(|item| item.label)
        .unwrap_or(FALLBACK_TITLE)
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

/// Client-side routes. Anything unrecognised is [`Route::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Tasks,
    Models,
    Agents,
    Workflows,
    Settings,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Tasks,
        Route::Models,
        Route::Agents,
        Route::Workflows,
        Route::Settings,
    ];

    /// Resolve a pathname. A single trailing slash is tolerated
    /// (`/tasks/` renders Tasks), query and fragment must already be stripped.
    pub fn from_path(path: &str) -> Route {
        let trimmed = match path {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        match trimmed {
            "/" => Route::Dashboard,
            "/tasks" => Route::Tasks,
            "/models" => Route::Models,
            "/agents" => Route::Agents,
            "/workflows" => Route::Workflows,
            "/settings" => Route::Settings,
            _ => Route::NotFound,
        }
    }

    /// Canonical path, `None` for the wildcard route.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some("/"),
            Route::Tasks => Some("/tasks"),
            Route::Models => Some("/models"),
            Route::Agents => Some("/agents"),
            Route::Workflows => Some("/workflows"),
            Route::Settings => Some("/settings"),
            Route::NotFound => None,
        }
    }
}
