use structbind::Record;

#[derive(Record)]
struct Form {
    #[record(alias = "name")]
    name: String,
}

fn main() {}
