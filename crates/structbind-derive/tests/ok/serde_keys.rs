use serde::Deserialize;
use structbind::{bind, to_map, Record, Values};

#[derive(Default, Deserialize, Record)]
struct Filter {
    #[serde(rename = "q")]
    query: String,
    #[serde(skip)]
    cache: std::cell::Cell<u8>,
}

fn main() {
    let mut filter = Filter::default();
    bind(&Values::parse("q=winter"), &mut filter).unwrap();
    assert_eq!(filter.query, "winter");

    let map = to_map(&filter, false);
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("q"));
    assert_eq!(filter.cache.get(), 0);
}
