use std::cell::RefCell;

use super::*;

// =============================================================
// Role matching
// =============================================================

#[test]
fn admin_roles_land_on_admin_route() {
    for role in ["hr", "executive", "management"] {
        assert_eq!(landing_route(Some(role)), ADMIN_ROUTE, "role {role:?}");
    }
}

#[test]
fn other_roles_land_on_default_route() {
    for role in ["employee", "sub_hr", "group_exe", "admin", ""] {
        assert_eq!(landing_route(Some(role)), DEFAULT_ROUTE, "role {role:?}");
    }
}

#[test]
fn missing_role_lands_on_default_route() {
    assert_eq!(landing_route(None), DEFAULT_ROUTE);
}

#[test]
fn role_match_is_case_sensitive() {
    assert!(!is_admin_role(Some("HR")));
    assert!(!is_admin_role(Some(" hr")));
    assert!(is_admin_role(Some("hr")));
}

// =============================================================
// Navigator blanket impl
// =============================================================

#[test]
fn closure_navigator_receives_path() {
    let visited = RefCell::new(Vec::new());
    let navigate = |path: &str, _opts: NavigateOptions| visited.borrow_mut().push(path.to_owned());
    navigate.push(LOGIN_ROUTE);
    navigate.push(ADMIN_ROUTE);
    assert_eq!(*visited.borrow(), vec![LOGIN_ROUTE.to_owned(), ADMIN_ROUTE.to_owned()]);
}
