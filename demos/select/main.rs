/// Indexed selection on the demo feed: jump to a record, look around it,
/// then select past the end to show the wrap-around.
/// Usage: `cargo run --example select`
use ring_list::sample::sample_feed;

fn main() {
    let mut feed = sample_feed();

    // the Thursday night sample
    feed.select(11).expect("sample feed is not empty");
    println!("selected: {}", feed.current().unwrap());

    feed.retreat();
    println!("before:   {}", feed.current().unwrap());

    feed.advance();
    feed.advance();
    println!("after:    {}", feed.current().unwrap());

    // selecting len() + k wraps to the same records as selecting k
    let wrapped = feed.len() + 11;
    feed.select(wrapped).expect("sample feed is not empty");
    println!("wrapped:  {}", feed.current().unwrap());
}
