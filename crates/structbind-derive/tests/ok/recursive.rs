use structbind::{to_map, Record};

#[derive(Default, Record)]
struct Node {
    #[record(key = "label")]
    label: String,
    #[record(key = "children")]
    children: Vec<Node>,
    #[record(key = "parent")]
    parent: Option<Box<Node>>,
}

fn main() {
    let tree = Node {
        label: "root".to_string(),
        children: vec![Node {
            label: "leaf".to_string(),
            ..Node::default()
        }],
        parent: None,
    };
    let map = to_map(&tree, false);
    let children = map["children"].as_list().unwrap();
    assert_eq!(children[0].get("label").and_then(|v| v.as_str()), Some("leaf"));
}
