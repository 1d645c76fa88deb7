use domlab::zoon::*;
use frontend::page::Page;

fn main() {
    start_app("app", Page::new);
}
