//! Property-based tests for resolution, expansion and menu rendering.

use campus_nav::prelude::*;
use proptest::prelude::*;

const NAMES: &[&str] = &["Dashboard", "Fees", "Exams", "Reports", "Library", "Notices"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn node(depth: u32) -> BoxedStrategy<RouteNode<u32>> {
    let leaf = (name(), any::<u32>())
        .prop_map(|(name, screen)| RouteNode::leaf(name, screen))
        .boxed();
    if depth == 0 {
        return leaf;
    }
    let group = (name(), prop::option::of(any::<u32>()), prop::collection::vec(node(depth - 1), 1..4))
        .prop_map(|(name, screen, children)| RouteNode {
            name,
            screen,
            icon: None,
            children,
        })
        .boxed();
    prop_oneof![leaf, group].boxed()
}

fn tree() -> impl Strategy<Value = RouteTree<u32>> {
    prop::collection::vec(node(2), 0..5).prop_map(RouteTree::new)
}

fn state() -> impl Strategy<Value = NavigationState> {
    (name(), prop::collection::vec(name(), 0..6)).prop_map(|(selected, expanded)| {
        let mut state = NavigationState::default();
        state.select(selected);
        state.expand_all(expanded.iter().map(String::as_str));
        state
    })
}

proptest! {
    #[test]
    fn resolve_matches_first_pre_order_node_with_screen(tree in tree(), key in name()) {
        let expected = tree
            .iter()
            .map(|(node, _)| node)
            .find(|node| node.name == key && node.screen.is_some())
            .and_then(|node| node.screen.as_ref());

        match (resolve(&tree, &key), expected) {
            (Ok(found), Some(expected)) => prop_assert_eq!(found, expected),
            (Err(RouteError::NoScreen(_)), None) => prop_assert!(tree.find(&key).is_some()),
            (Err(RouteError::NotFound(_)), None) => prop_assert!(tree.find(&key).is_none()),
            (got, expected) => prop_assert!(false, "got {:?}, expected {:?}", got, expected),
        }
    }

    #[test]
    fn absent_key_is_not_found(tree in tree()) {
        prop_assert_eq!(
            resolve(&tree, "Transport"),
            Err(RouteError::NotFound("Transport".to_string()))
        );
    }

    #[test]
    fn toggle_is_an_involution(mut state in state(), key in name()) {
        let before = state.clone();
        state.toggle_expand(&key);
        prop_assert_ne!(&state, &before);
        state.toggle_expand(&key);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn last_select_wins(mut state in state(), first in name(), second in name()) {
        state.select(first);
        state.select(second.clone());
        prop_assert_eq!(state.selected_key(), second.as_str());
    }

    #[test]
    fn expanding_one_group_never_collapses_another(a in name(), b in name()) {
        prop_assume!(a != b);
        let mut state = NavigationState::default();
        state.toggle_expand(&a);
        state.toggle_expand(&b);
        prop_assert!(state.is_expanded(&a));
        prop_assert!(state.is_expanded(&b));
    }

    #[test]
    fn menu_rendering_is_pure(tree in tree(), state in state()) {
        let first = render_menu(&tree, &state, ActiveRule::Prefix, 16);
        let second = render_menu(&tree, &state, ActiveRule::Prefix, 16);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fully_expanded_menu_lists_every_node(tree in tree()) {
        let mut state = NavigationState::default();
        state.expand_all(NAMES.iter().copied());
        let rows = render_menu(&tree, &state, ActiveRule::Exact, 16);
        let walk: Vec<(String, usize)> = tree.iter().map(|(n, d)| (n.name.clone(), d)).collect();
        let listed: Vec<(String, usize)> = rows.into_iter().map(|r| (r.name, r.depth)).collect();
        prop_assert_eq!(listed, walk);
    }

    #[test]
    fn child_rows_sit_deeper_than_their_parent(tree in tree(), state in state()) {
        let rows = render_menu(&tree, &state, ActiveRule::Exact, 16);
        for pair in rows.windows(2) {
            prop_assert!(pair[1].depth <= pair[0].depth + 1);
            if pair[1].depth == pair[0].depth + 1 {
                prop_assert_eq!(pair[0].kind, RowKind::Group { expanded: true });
            }
        }
    }
}
