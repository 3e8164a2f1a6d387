use structbind::{to_map, FieldKind, FieldValue, Record};

#[derive(Default, Record)]
struct Page<T> {
    #[record(key = "items")]
    items: Vec<T>,
    #[record(key = "page")]
    page: i32,
}

fn main() {
    let page = Page::<String> {
        items: vec!["a".to_string()],
        page: 1,
    };
    let map = to_map(&page, true);
    assert_eq!(map["page"].as_str(), Some("1"));
    assert_eq!(
        <Page<i64> as FieldValue>::field_kind(),
        FieldKind::Nested("Page")
    );
}
