use serde_json::json;
use taskthings_core::{
    convert_str, convert_value, to_things_document, ChecklistItem, ConvertError, OutlineItem,
    OutlineItemType, ProjectItem, ProjectOptions, ROOT_ITEM_ID,
};

fn options() -> ProjectOptions {
    ProjectOptions::new("Launch", None).unwrap()
}

fn item(id: &str, kind: &str, body: &str, children: serde_json::Value) -> serde_json::Value {
    json!({"id": id, "type": kind, "body": body, "parentId": "", "children": children})
}

fn root(children: serde_json::Value) -> serde_json::Value {
    json!({"id": ROOT_ITEM_ID, "type": "root", "body": "", "parentId": "", "children": children})
}

#[test]
fn heading_with_task_note_and_checklist_maps_to_things_items() {
    let input = root(json!([item(
        "h",
        "heading",
        "Work",
        json!([item(
            "t",
            "task",
            "Write spec",
            json!([
                item("n", "note", "draft v1", json!([])),
                item("c", "task", "Outline sections", json!([]))
            ])
        )])
    )]));

    let document = convert_value(&input, &options()).unwrap();
    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value[0]["attributes"]["items"],
        json!([
            {"type": "heading", "attributes": {"title": "Work"}},
            {
                "type": "to-do",
                "attributes": {
                    "title": "Write spec",
                    "notes": "draft v1",
                    "checklist-items": [
                        {"type": "checklist-item", "attributes": {"title": "Outline sections"}}
                    ]
                }
            }
        ])
    );
}

#[test]
fn top_level_tasks_come_before_heading_groups() {
    let input = root(json!([
        item("h1", "project", "First", json!([item("h1t", "task", "In first", json!([]))])),
        item("t1", "task", "Loose one", json!([])),
        item("h2", "heading", "Second", json!([])),
        item("t2", "task", "Loose two", json!([])),
    ]));

    let document = convert_value(&input, &options()).unwrap();
    let titles = document[0]
        .attributes
        .items
        .iter()
        .map(ProjectItem::title)
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Loose one", "Loose two", "First", "In first", "Second"]
    );
    assert!(matches!(document[0].attributes.items[2], ProjectItem::Heading(_)));
    assert!(matches!(document[0].attributes.items[4], ProjectItem::Heading(_)));
}

#[test]
fn root_notes_become_project_notes_and_deeper_notes_are_dropped() {
    let input = root(json!([
        item("n1", "note", "first", json!([])),
        item("h", "heading", "Work", json!([item("hn", "note", "heading note", json!([]))])),
        item("n2", "note", "second", json!([])),
        item(
            "t",
            "task",
            "Task",
            json!([item("c", "task", "Check", json!([item("cn", "note", "too deep", json!([]))]))])
        ),
    ]));

    let document = convert_value(&input, &options()).unwrap();
    let project = &document[0].attributes;
    assert_eq!(project.notes, "first\nsecond");

    let rendered = serde_json::to_string(&document).unwrap();
    assert!(!rendered.contains("heading note"));
    assert!(!rendered.contains("too deep"));
}

#[test]
fn checklist_entries_are_leaves_whatever_their_children() {
    let input = root(json!([item(
        "t",
        "task",
        "Task",
        json!([item(
            "c",
            "task",
            "Check",
            json!([
                item("c1", "task", "deeper task", json!([])),
                item("c2", "heading", "deeper heading", json!([])),
                item("c3", "note", "deeper note", json!([]))
            ])
        )])
    )]));

    let document = convert_value(&input, &options()).unwrap();
    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value[0]["attributes"]["items"][0]["attributes"]["checklist-items"],
        json!([{"type": "checklist-item", "attributes": {"title": "Check"}}])
    );
    let rendered = value.to_string();
    assert!(!rendered.contains("deeper"));
}

#[test]
fn nested_headings_and_unknown_items_are_dropped() {
    let input = root(json!([
        item(
            "h",
            "heading",
            "Outer",
            json!([item("hh", "heading", "Inner", json!([item("x", "task", "lost", json!([]))]))])
        ),
        item("u", "separator", "---", json!([])),
    ]));

    let document = convert_value(&input, &options()).unwrap();
    let items = &document[0].attributes.items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], ProjectItem::heading("Outer"));
}

#[test]
fn task_without_notes_has_empty_notes_field() {
    let input = root(json!([item("t", "task", "Solo", json!([]))]));
    let value = serde_json::to_value(convert_value(&input, &options()).unwrap()).unwrap();
    assert_eq!(value[0]["attributes"]["notes"], json!(""));
    assert_eq!(value[0]["attributes"]["items"][0]["attributes"]["notes"], json!(""));
    assert_eq!(
        value[0]["attributes"]["items"][0]["attributes"]["checklist-items"],
        json!([])
    );
}

#[test]
fn area_is_set_only_when_provided() {
    let input = root(json!([]));

    let without = serde_json::to_value(convert_value(&input, &options()).unwrap()).unwrap();
    assert!(without[0]["attributes"].get("area").is_none());
    assert_eq!(without[0]["attributes"]["title"], json!("Launch"));

    let with_area = ProjectOptions::new("Launch", Some("Office".to_string())).unwrap();
    let with = serde_json::to_value(convert_value(&input, &with_area).unwrap()).unwrap();
    assert_eq!(with[0]["attributes"]["area"], json!("Office"));
}

#[test]
fn document_is_always_a_single_project_sequence() {
    let document = convert_str("{}", &options()).unwrap();
    assert_eq!(document.len(), 1);
    assert!(document[0].attributes.items.is_empty());
}

#[test]
fn conversion_is_deterministic() {
    let input = root(json!([
        item("t", "task", "A", json!([item("n", "note", "x", json!([]))])),
        item("h", "heading", "H", json!([item("ht", "task", "B", json!([]))])),
    ]));
    let first = convert_value(&input, &options()).unwrap();
    let second = convert_value(&input, &options()).unwrap();
    assert_eq!(first, second);

    let tree: OutlineItem = serde_json::from_value(input).unwrap();
    assert_eq!(to_things_document(&tree, &options()), first);
}

#[test]
fn non_object_inputs_are_invalid_data() {
    for raw in ["[]", "null", "42", "\"text\""] {
        let err = convert_str(raw, &options()).unwrap_err();
        assert!(
            matches!(err, ConvertError::InvalidData { .. }),
            "unexpected error for {raw}: {err}"
        );
        assert!(err.to_string().starts_with("Error: data is invalid.\nGot: "));
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = convert_str("{\"children\": [", &options()).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}

#[test]
fn object_with_wrong_shape_is_a_decode_error() {
    let err = convert_str("{\"children\": 3}", &options()).unwrap_err();
    assert!(matches!(err, ConvertError::Decode(_)));
}

#[test]
fn built_tree_feeds_transformer() {
    let tree = OutlineItem::root()
        .with_child(OutlineItem::new("n", OutlineItemType::Note, "hello", ROOT_ITEM_ID))
        .with_child(OutlineItem::new("t", OutlineItemType::Task, "do", ROOT_ITEM_ID));
    let document = to_things_document(&tree, &options());
    assert_eq!(document[0].attributes.notes, "hello");
    assert_eq!(document[0].attributes.items, vec![ProjectItem::to_do("do", "", Vec::new())]);
}

fn task_chain_json(depth: usize) -> String {
    let mut json = String::new();
    for level in 0..depth {
        json.push_str(&format!(
            "{{\"id\":\"t{level}\",\"type\":\"task\",\"body\":\"level {level}\",\"children\":["
        ));
    }
    for _ in 0..depth {
        json.push_str("]}");
    }
    json
}

#[test]
fn deeply_nested_outline_converts() {
    let input = format!(
        "{{\"id\":\"{ROOT_ITEM_ID}\",\"type\":\"root\",\"children\":[{}]}}",
        task_chain_json(200)
    );

    let document = convert_str(&input, &options()).unwrap();
    assert_eq!(
        document[0].attributes.items,
        vec![ProjectItem::to_do(
            "level 0",
            "",
            vec![ChecklistItem::new("level 1")]
        )]
    );
}

#[test]
fn deeply_nested_outline_under_heading_converts() {
    let input = format!(
        "{{\"type\":\"root\",\"children\":[{{\"type\":\"heading\",\"body\":\"Work\",\"children\":[{}]}}]}}",
        task_chain_json(200)
    );

    let document = convert_str(&input, &options()).unwrap();
    assert_eq!(
        document[0].attributes.items,
        vec![
            ProjectItem::heading("Work"),
            ProjectItem::to_do("level 0", "", vec![ChecklistItem::new("level 1")]),
        ]
    );
}

#[test]
fn odd_values_in_dropped_subtrees_do_not_fail_conversion() {
    let input = json!({
        "type": "root",
        "children": [{
            "type": "task",
            "body": null,
            "children": [
                {"type": "task", "body": 12, "children": [
                    {"type": "task", "body": null, "children": {"not": "a list"}}
                ]}
            ]
        }]
    });

    let document = convert_str(&input.to_string(), &options()).unwrap();
    assert_eq!(
        document[0].attributes.items,
        vec![ProjectItem::to_do("", "", vec![ChecklistItem::new("12")])]
    );
}

#[test]
fn trailing_text_after_object_is_a_parse_error() {
    let err = convert_str("{\"children\": []} trailing", &options()).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)));
}
