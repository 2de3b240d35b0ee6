use std::collections::HashMap;
use taskthings_core::{
    build_tree, snapshot_outline, EditorItem, FlatOutlineItem, OrphanPolicy, OutlineItem,
    OutlineItemType, TreeBuildError, ROOT_ITEM_ID,
};

fn flat(id: &str, kind: OutlineItemType, parent_id: &str) -> FlatOutlineItem {
    FlatOutlineItem {
        id: id.to_string(),
        kind,
        body: id.to_uppercase(),
        parent_id: parent_id.to_string(),
    }
}

fn collect_links(node: &OutlineItem, links: &mut Vec<(String, String)>) {
    for child in &node.children {
        links.push((child.id.clone(), node.id.clone()));
        collect_links(child, links);
    }
}

fn sibling_order(node: &OutlineItem, order: &mut HashMap<String, Vec<String>>) {
    order.insert(
        node.id.clone(),
        node.children.iter().map(|child| child.id.clone()).collect(),
    );
    for child in &node.children {
        sibling_order(child, order);
    }
}

#[test]
fn parent_links_and_sibling_order_match_input() {
    let input = vec![
        flat("h1", OutlineItemType::Heading, ROOT_ITEM_ID),
        flat("t1", OutlineItemType::Task, "h1"),
        flat("n1", OutlineItemType::Note, "t1"),
        flat("t2", OutlineItemType::Task, "h1"),
        flat("c1", OutlineItemType::Task, "t1"),
        flat("h2", OutlineItemType::Heading, ROOT_ITEM_ID),
        flat("x1", OutlineItemType::Task, "c1"),
        flat("n2", OutlineItemType::Note, ROOT_ITEM_ID),
    ];

    let tree = build_tree(input.clone(), OrphanPolicy::Reject).unwrap();

    let mut links = Vec::new();
    collect_links(&tree, &mut links);
    let mut expected = input
        .iter()
        .map(|item| (item.id.clone(), item.parent_id.clone()))
        .collect::<Vec<_>>();
    links.sort();
    expected.sort();
    assert_eq!(links, expected);

    let mut order = HashMap::new();
    sibling_order(&tree, &mut order);
    assert_eq!(order[ROOT_ITEM_ID], vec!["h1", "h2", "n2"]);
    assert_eq!(order["h1"], vec!["t1", "t2"]);
    assert_eq!(order["t1"], vec!["n1", "c1"]);
    assert_eq!(order["c1"], vec!["x1"]);
}

#[test]
fn child_before_parent_is_rejected() {
    let err = build_tree(
        vec![
            flat("t1", OutlineItemType::Task, "h1"),
            flat("h1", OutlineItemType::Heading, ROOT_ITEM_ID),
        ],
        OrphanPolicy::Reject,
    )
    .unwrap_err();
    assert!(matches!(err, TreeBuildError::ParentNotFound { ref parent_id, .. } if parent_id == "h1"));
}

#[test]
fn editor_items_deserialize_from_snapshot_json() {
    let raw = serde_json::json!([
        {"id": "a", "dataType": "project", "bodyString": "Work:", "parentId": ROOT_ITEM_ID},
        {"id": "b", "dataType": "task", "bodyString": "- Ship it", "parentId": "a"},
        {"id": "c", "dataType": "note", "bodyString": null, "parentId": "a"},
        {"id": "d", "dataType": "note", "bodyString": "Remember", "parentId": "b"}
    ]);
    let items: Vec<EditorItem> = serde_json::from_value(raw).unwrap();

    let json = snapshot_outline(&items, OrphanPolicy::Reject).unwrap();
    let tree: OutlineItem = serde_json::from_str(&json).unwrap();

    assert_eq!(tree.kind, OutlineItemType::Root);
    let heading = &tree.children[0];
    assert_eq!(heading.kind, OutlineItemType::Heading);
    assert_eq!(heading.children.len(), 1);
    assert_eq!(heading.children[0].body, "Ship it");
    assert_eq!(heading.children[0].children[0].body, "Remember");
}
