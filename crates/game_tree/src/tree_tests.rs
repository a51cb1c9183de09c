use super::*;

fn tree(depth: u32) -> GameTree {
    GameTree::new(&SearchConfig::with_depth(depth)).unwrap()
}

#[test]
fn test_new_rejects_bad_config() {
    assert_eq!(
        GameTree::new(&SearchConfig::with_depth(0)),
        Err(ConfigError::ZeroDepth)
    );
    let wide = SearchConfig {
        branching_factor: 3,
        ..Default::default()
    };
    assert_eq!(GameTree::new(&wide), Err(ConfigError::UnsupportedBranching(3)));
}

#[test]
fn test_is_leaf() {
    let t = tree(2);
    assert!(!t.is_leaf(&NodePath::root()));
    assert!(!t.is_leaf(&NodePath::from(vec![1])));
    assert!(t.is_leaf(&NodePath::from(vec![1, 0])));
}

#[test]
fn test_children_in_order() {
    let t = tree(3);
    let root = NodePath::root();
    let kids = t.children(&root);
    assert_eq!(kids.len(), 2);
    assert_eq!(kids[0].moves(), &[0]);
    assert_eq!(kids[1].moves(), &[1]);

    let grandkids = t.children(&kids[1]);
    assert_eq!(grandkids[0].moves(), &[1, 0]);
    assert_eq!(grandkids[1].moves(), &[1, 1]);
}

#[test]
fn test_leaf_has_no_children() {
    let t = tree(1);
    assert!(t.children(&NodePath::from(vec![0])).is_empty());
}

#[test]
fn test_roles_alternate() {
    let t = tree(5);
    let mut path = NodePath::root();
    let mut expected = Role::Maximizing;
    for _ in 0..=5 {
        assert_eq!(t.role_at(&path), expected);
        path = path.child(0);
        expected = expected.opponent();
    }
}

#[test]
fn test_leaf_index_left_to_right() {
    let t = tree(3);
    let mut leaves = Vec::new();
    for a in 0..2u8 {
        for b in 0..2u8 {
            for c in 0..2u8 {
                leaves.push(t.leaf_index(&NodePath::from(vec![a, b, c])));
            }
        }
    }
    assert_eq!(leaves, (0..8).collect::<Vec<u64>>());
}

#[test]
fn test_sizes() {
    let t = tree(5);
    assert_eq!(t.leaf_count(), 32);
    assert_eq!(t.node_count(), 63);
    assert_eq!(t.subtree_leaves(4), 2);
    assert_eq!(t.subtree_nodes(4), 3);
    assert_eq!(t.subtree_leaves(5), 1);
    assert_eq!(t.subtree_nodes(5), 1);
}

#[test]
fn test_sizes_at_depth_limit() {
    let t = tree(63);
    assert_eq!(t.leaf_count(), 1u64 << 63);
    assert_eq!(t.node_count(), u64::MAX);
}
