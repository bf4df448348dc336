//! Route table, guard and menu derivation.
//!
//! Paths are matched by exact string equality (no prefix matching, no
//! trailing-slash normalisation). [`resolve`] is a pure, total function from
//! session + path to a layout decision, so the guard is unit-testable
//! without a browser.

use crate::session::Session;
use portal_types::Role;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const MY_APPLICATIONS_PATH: &str = "/my-applications";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicPage {
    Login,
    Register,
    ForgotPassword,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Services,
    ApplyCertificate(String),
    MyApplications,
    Complaints,
    PropertyTax,
    Notices,
    Payments,
    Schemes,
    Profile,
    AdminUsers,
    AdminApplications,
    AdminComplaints,
    NotFound,
}

impl Page {
    /// Pages the backend role-gates to admins; the guard mirrors that here
    /// instead of rendering a list that would only 403.
    fn admin_only(&self) -> bool {
        matches!(
            self,
            Page::AdminUsers | Page::AdminApplications | Page::AdminComplaints
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Public(PublicPage),
    Portal(Page),
}

pub fn parse(path: &str) -> Route {
    if let Some(kind) = path.strip_prefix("/services/apply/") {
        if !kind.is_empty() && !kind.contains('/') {
            return Route::Portal(Page::ApplyCertificate(kind.to_string()));
        }
    }
    match path {
        "/" | "/login" => Route::Public(PublicPage::Login),
        "/register" => Route::Public(PublicPage::Register),
        "/forgot-password" => Route::Public(PublicPage::ForgotPassword),
        "/dashboard" => Route::Portal(Page::Dashboard),
        "/services" => Route::Portal(Page::Services),
        "/my-applications" | "/applications" => Route::Portal(Page::MyApplications),
        "/complaints" => Route::Portal(Page::Complaints),
        "/property-tax" | "/properties" => Route::Portal(Page::PropertyTax),
        "/notices" => Route::Portal(Page::Notices),
        "/payments" => Route::Portal(Page::Payments),
        "/schemes" => Route::Portal(Page::Schemes),
        "/profile" => Route::Portal(Page::Profile),
        "/admin/users" | "/citizens" => Route::Portal(Page::AdminUsers),
        "/admin/applications" => Route::Portal(Page::AdminApplications),
        "/admin/complaints" => Route::Portal(Page::AdminComplaints),
        _ => Route::Portal(Page::NotFound),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Public(PublicPage),
    Dashboard(Page),
    Redirect(&'static str),
}

/// Decide which layout a session may see at a path. Anonymous sessions only
/// reach the public pages; authenticated ones are kept out of them, and
/// citizens are bounced off the admin tree.
pub fn resolve(session: &Session, path: &str) -> RouteDecision {
    match (parse(path), session) {
        (Route::Public(page), Session::Anonymous) => RouteDecision::Public(page),
        (Route::Public(_), Session::Authenticated(_)) => RouteDecision::Redirect(DASHBOARD_PATH),
        (Route::Portal(_), Session::Anonymous) => RouteDecision::Redirect(LOGIN_PATH),
        (Route::Portal(page), Session::Authenticated(identity)) => {
            if page.admin_only() && identity.role != Role::Admin {
                RouteDecision::Redirect(DASHBOARD_PATH)
            } else {
                RouteDecision::Dashboard(page)
            }
        }
    }
}

// ── Sidebar menus ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const CITIZEN_MENU: &[MenuItem] = &[
    MenuItem { path: "/dashboard", label: "Dashboard", icon: "home" },
    MenuItem { path: "/services", label: "Services", icon: "file-text" },
    MenuItem { path: "/my-applications", label: "My Applications", icon: "clipboard" },
    MenuItem { path: "/complaints", label: "Complaints", icon: "message" },
    MenuItem { path: "/property-tax", label: "Property Tax", icon: "rupee" },
    MenuItem { path: "/notices", label: "Notices", icon: "bell" },
];

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem { path: "/dashboard", label: "Dashboard", icon: "home" },
    MenuItem { path: "/admin/users", label: "Users", icon: "users" },
    MenuItem { path: "/admin/applications", label: "Applications", icon: "file-text" },
    MenuItem { path: "/admin/complaints", label: "Complaints", icon: "message" },
    MenuItem { path: "/property-tax", label: "Tax Management", icon: "rupee" },
    MenuItem { path: "/notices", label: "Notices", icon: "bell" },
];

/// Menu set as a total function of role. Adding a role forces a decision
/// here at compile time.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Citizen => CITIZEN_MENU,
        Role::Admin => ADMIN_MENU,
    }
}

/// Exact-match highlight; at most one item can be active per render.
pub fn is_active(item: &MenuItem, path: &str) -> bool {
    item.path == path
}

/// Header title for the current path, from the active menu item.
pub fn page_title(role: Role, path: &str) -> &'static str {
    menu_for(role)
        .iter()
        .find(|item| item.path == path)
        .map(|item| item.label)
        .unwrap_or("Gram Panchayat")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::Identity;

    fn authenticated(role: Role) -> Session {
        Session::Authenticated(Identity {
            id: 1,
            email: "asha@example.in".into(),
            role,
            ..Identity::default()
        })
    }

    #[test]
    fn anonymous_reaches_public_pages() {
        assert_eq!(
            resolve(&Session::Anonymous, "/login"),
            RouteDecision::Public(PublicPage::Login)
        );
        assert_eq!(
            resolve(&Session::Anonymous, "/register"),
            RouteDecision::Public(PublicPage::Register)
        );
    }

    #[test]
    fn anonymous_is_redirected_to_login_from_the_dashboard_tree() {
        for path in ["/dashboard", "/notices", "/admin/users", "/no-such-page"] {
            assert_eq!(
                resolve(&Session::Anonymous, path),
                RouteDecision::Redirect(LOGIN_PATH),
                "path {path}"
            );
        }
    }

    #[test]
    fn authenticated_users_are_kept_out_of_auth_pages() {
        assert_eq!(
            resolve(&authenticated(Role::Citizen), "/login"),
            RouteDecision::Redirect(DASHBOARD_PATH)
        );
    }

    #[test]
    fn citizens_are_bounced_off_admin_paths() {
        assert_eq!(
            resolve(&authenticated(Role::Citizen), "/admin/users"),
            RouteDecision::Redirect(DASHBOARD_PATH)
        );
        assert_eq!(
            resolve(&authenticated(Role::Admin), "/admin/users"),
            RouteDecision::Dashboard(Page::AdminUsers)
        );
    }

    #[test]
    fn apply_path_carries_the_certificate_type() {
        assert_eq!(
            parse("/services/apply/birth"),
            Route::Portal(Page::ApplyCertificate("birth".into()))
        );
        assert_eq!(parse("/services/apply/"), Route::Portal(Page::NotFound));
    }

    #[test]
    fn unknown_paths_parse_to_not_found() {
        assert_eq!(parse("/nonsense"), Route::Portal(Page::NotFound));
        assert_eq!(
            resolve(&authenticated(Role::Citizen), "/nonsense"),
            RouteDecision::Dashboard(Page::NotFound)
        );
    }

    #[test]
    fn menu_is_a_total_function_of_role() {
        assert_eq!(menu_for(Role::Citizen).len(), 6);
        assert_eq!(menu_for(Role::Admin).len(), 6);
        assert!(menu_for(Role::Citizen).iter().any(|i| i.path == "/services"));
        assert!(menu_for(Role::Admin).iter().any(|i| i.path == "/admin/users"));
    }

    #[test]
    fn active_item_requires_an_exact_match() {
        let menu = menu_for(Role::Citizen);
        let active: Vec<_> = menu.iter().filter(|i| is_active(i, "/notices")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Notices");

        // No trailing-slash normalisation, no prefix matching.
        assert!(menu.iter().all(|i| !is_active(i, "/notices/")));
        assert!(menu.iter().all(|i| !is_active(i, "/notices/archive")));
    }

    #[test]
    fn at_most_one_item_is_active_for_any_menu_path() {
        for role in [Role::Citizen, Role::Admin] {
            let menu = menu_for(role);
            for item in menu {
                let count = menu.iter().filter(|i| is_active(i, item.path)).count();
                assert_eq!(count, 1, "path {}", item.path);
            }
        }
    }

    #[test]
    fn page_title_comes_from_the_active_menu_item() {
        assert_eq!(page_title(Role::Citizen, "/my-applications"), "My Applications");
        assert_eq!(page_title(Role::Admin, "/property-tax"), "Tax Management");
        assert_eq!(page_title(Role::Citizen, "/profile"), "Gram Panchayat");
    }
}
