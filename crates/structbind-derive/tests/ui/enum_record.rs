use structbind::Record;

#[derive(Record)]
enum Color {
    Red,
}

fn main() {}
