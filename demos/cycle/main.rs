use ring_list::output::render_walk;
/// Round-robin walk over the demo feed, two reads per stop, twice around.
/// Usage: `cargo run --example cycle`
use ring_list::sample::sample_feed;

fn main() {
    let mut feed = sample_feed();

    let stops = feed.len() * 2;
    let walk = render_walk(&mut feed, stops, 2).expect("sample feed is not empty");

    print!("{}", walk);
}
