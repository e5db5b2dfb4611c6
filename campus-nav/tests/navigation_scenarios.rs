use campus_nav::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Applications,
}

fn admission_tree() -> RouteTree<Screen> {
    RouteTree::new(vec![
        RouteNode::leaf("Dashboard", Screen::Dashboard),
        RouteNode::group(
            "Admission",
            vec![RouteNode::leaf("Applications", Screen::Applications)],
        ),
    ])
}

fn row_names(rows: &[MenuRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn resolves_nested_leaf_and_reports_missing_key() {
    let tree = admission_tree();

    assert_eq!(resolve(&tree, "Applications"), Ok(&Screen::Applications));
    assert_eq!(
        resolve(&tree, "Missing"),
        Err(RouteError::NotFound("Missing".to_string()))
    );
}

#[test]
fn toggling_admission_twice_returns_to_empty_set() {
    let mut state = NavigationState::default();
    assert_eq!(state.selected_key(), "Dashboard");
    assert!(state.expanded_keys().is_empty());

    state.toggle_expand("Admission");
    assert_eq!(state.expanded_keys().len(), 1);
    assert!(state.is_expanded("Admission"));

    state.toggle_expand("Admission");
    assert!(state.expanded_keys().is_empty());
}

#[test]
fn expanded_children_are_flattened_after_parent() {
    let tree = admission_tree();
    let mut state = NavigationState::default();
    state.toggle_expand("Admission");

    let rows = render_menu(&tree, &state, ActiveRule::Exact, 16);
    assert_eq!(row_names(&rows), vec!["Dashboard", "Admission", "Applications"]);
    assert_eq!(rows[2].depth, 1);
    assert!(rows[2].indent > rows[1].indent);
    assert_eq!(rows[1].chevron(), "▼");
}

#[test]
fn sign_in_without_role_stays_unauthenticated() {
    let mut auth = AuthState::default();

    let err = auth.sign_in().unwrap_err();
    assert_eq!(err, SignInError::NoRoleSelected);
    assert_eq!(err.to_string(), "Please select a role before signing in");
    assert_eq!(auth, AuthState::Unauthenticated);
}

#[test]
fn admin_demo_goes_straight_to_authenticated() {
    let mut auth = AuthState::default();

    auth.demo_login(Role::Admin).unwrap();
    assert_eq!(auth, AuthState::Authenticated(Role::Admin));
}

#[test]
fn full_admin_session_from_demo_login_to_logout() {
    let mut auth = AuthState::default();
    let role = auth.demo_login(Role::Admin).unwrap();

    let tree = Arc::new(admission_tree());
    let mut session = Session::new(role, tree.clone(), ActiveRule::Exact, &NavConfig::default());
    assert_eq!(session.view(), &View::Screen(Screen::Dashboard));

    for row in session.menu() {
        if row.is_group() {
            session.press(&row.action()).unwrap();
        }
    }
    let leaf = session
        .menu()
        .into_iter()
        .find(|row| row.name == "Applications")
        .unwrap();
    session.press(&leaf.action()).unwrap();
    assert_eq!(session.view(), &View::Screen(Screen::Applications));

    auth.logout();
    assert_eq!(auth, AuthState::Unauthenticated);

    // a fresh sign-in starts from a fresh session
    let role = auth.demo_login(Role::Admin).unwrap();
    let session = Session::new(role, tree, ActiveRule::Exact, &NavConfig::default());
    assert_eq!(session.state().selected_key(), "Dashboard");
    assert!(session.state().expanded_keys().is_empty());
}

#[test]
fn validation_flags_bad_tree_but_resolution_still_works() {
    let tree = RouteTree::new(vec![
        RouteNode::leaf("Dashboard", Screen::Dashboard),
        RouteNode::leaf("Dashboard", Screen::Applications),
        RouteNode::group("Empty", vec![]),
    ]);

    let issues = validate(&tree, NavConfig::default().max_depth);
    assert_eq!(issues.len(), 2);
    assert!(matches!(issues[0], ConfigIssue::DuplicateSibling { .. }));
    assert!(matches!(issues[1], ConfigIssue::DeadNode { .. }));

    assert_eq!(resolve(&tree, "Dashboard"), Ok(&Screen::Dashboard));
}
