use crate::ring::CircularList;
use crate::types::{Affect, DayOfWeek, FeedRecord, TimeOfDay, Weather};

/// Builds the hardcoded demo feed: one week of samples, three per day.
///
/// Ids run 0..=20 in insertion order, so the cursor starts on record 0.
pub fn sample_feed() -> CircularList<FeedRecord> {
    use DayOfWeek::*;
    use TimeOfDay::{Day, Night};
    use Weather::{Rain, Sun};

    let av = Affect::new;
    let rec = FeedRecord::new;

    // fields: id, day of week, time, weather, news, social, direct msg, sound, heartbeat
    [
        rec(0, Monday, Day, Rain, av(-1, -5), av(3, -3), av(-3, -4), 80, 80),
        rec(1, Monday, Day, Sun, av(-1, -5), av(5, -1), av(-3, -4), 70, 0),
        rec(2, Monday, Night, Sun, av(1, -7), av(5, -1), av(0, 0), 10, 0),
        rec(3, Tuesday, Day, Sun, av(1, -7), av(4, -2), av(0, 0), 70, 0),
        rec(4, Tuesday, Day, Sun, av(3, -3), av(4, -2), av(3, -1), 50, 60),
        rec(5, Tuesday, Night, Rain, av(3, -3), av(4, 2), av(3, -1), 10, 0),
        rec(6, Wednesday, Day, Rain, av(1, -2), av(4, 2), av(0, 0), 60, 0),
        rec(7, Wednesday, Day, Rain, av(1, -2), av(-1, -6), av(0, 0), 60, 90),
        rec(8, Wednesday, Night, Rain, av(5, -8), av(-1, -6), av(7, -3), 20, 0),
        rec(9, Thursday, Day, Sun, av(5, -8), av(-3, 0), av(7, -3), 70, 0),
        rec(10, Thursday, Day, Sun, av(5, 6), av(-3, 0), av(7, 8), 50, 0),
        rec(11, Thursday, Night, Sun, av(5, 6), av(6, 7), av(7, 8), 20, 120),
        rec(12, Friday, Day, Sun, av(-3, 1), av(6, 7), av(0, 0), 80, 140),
        rec(13, Friday, Day, Sun, av(-3, 1), av(6, 1), av(0, 0), 20, 0),
        rec(14, Friday, Night, Rain, av(-1, -3), av(6, 1), av(1, 1), 30, 0),
        rec(15, Saturday, Day, Rain, av(-1, -3), av(2, 4), av(1, 1), 40, 80),
        rec(16, Saturday, Day, Sun, av(1, -8), av(2, 4), av(2, -5), 50, 0),
        rec(17, Saturday, Night, Sun, av(1, -8), av(1, 7), av(2, -5), 50, 0),
        rec(18, Sunday, Day, Sun, av(1, -1), av(1, 7), av(0, 0), 10, 0),
        rec(19, Sunday, Day, Rain, av(1, -1), av(5, 2), av(0, 7), 20, 90),
        rec(20, Sunday, Night, Rain, av(-2, 1), av(5, 2), av(0, 7), 10, 0),
    ]
    .into_iter()
    .collect()
}
