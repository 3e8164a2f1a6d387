use structbind::{to_map, Record};

#[derive(Default, Record)]
struct Item {
    r#type: String,
    #[record(key = "match")]
    r#match: bool,
}

fn main() {
    let item = Item {
        r#type: "book".to_string(),
        r#match: true,
    };
    let map = to_map(&item, false);
    assert_eq!(map["type"].as_str(), Some("book"));
    assert_eq!(map["match"].as_bool(), Some(true));
}
