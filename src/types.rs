/// Day of the week a sample was taken on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Coarse time of day.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Day => write!(f, "Day"),
            TimeOfDay::Night => write!(f, "Night"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Weather {
    Sun,
    Rain,
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weather::Sun => write!(f, "Sun"),
            Weather::Rain => write!(f, "Rain"),
        }
    }
}

/// Arousal/valence pair, both components in `-10..=10`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Affect {
    pub arousal: i32,
    pub valence: i32,
}

impl Affect {
    pub fn new(arousal: i32, valence: i32) -> Self {
        Self { arousal, valence }
    }
}

impl std::fmt::Display for Affect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(arousal={}, valence={})", self.arousal, self.valence)
    }
}

/// One sample of the demo feed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeedRecord {
    pub id: u32,
    pub day_of_week: DayOfWeek,
    pub time_of_day: TimeOfDay,
    pub weather: Weather,
    pub news: Affect,
    pub social: Affect,
    pub direct_message: Affect,
    /// Simplified to percent.
    pub sound_level: i32,
    /// Beats per minute, 0 meaning no signal.
    pub heartbeat: i32,
}

impl FeedRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        day_of_week: DayOfWeek,
        time_of_day: TimeOfDay,
        weather: Weather,
        news: Affect,
        social: Affect,
        direct_message: Affect,
        sound_level: i32,
        heartbeat: i32,
    ) -> Self {
        Self {
            id,
            day_of_week,
            time_of_day,
            weather,
            news,
            social,
            direct_message,
            sound_level,
            heartbeat,
        }
    }

    /// Context reduction: weather and time-of-day bias, averaged with the
    /// news channel.
    pub fn context(&self) -> Affect {
        let mut av = Affect::default();
        match self.weather {
            Weather::Sun => av.valence += 5,
            Weather::Rain => av.valence -= 5,
        }
        match self.time_of_day {
            TimeOfDay::Day => av.arousal += 5,
            TimeOfDay::Night => av.arousal -= 5,
        }
        av.arousal = (av.arousal + self.news.arousal) / 2;
        av.valence = (av.valence + self.news.valence) / 2;
        av
    }

    /// Direct reduction: social and direct-message channels folded together
    /// with scaled sound level and heartbeat. Heartbeat is centered on a
    /// resting 80 bpm, so an absent signal (0) pulls arousal down.
    pub fn direct(&self) -> Affect {
        Affect::new(
            (self.social.arousal
                + self.direct_message.arousal
                + self.sound_level / 10
                + (self.heartbeat - 80) / 10)
                / 5,
            (self.social.valence + self.direct_message.valence) / 3,
        )
    }
}

impl std::fmt::Display for FeedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(id={} day={} time={} weather={} news={} social={} dm={} sound={}% heartbeat={}bpm context={} direct={})",
            self.id,
            self.day_of_week,
            self.time_of_day,
            self.weather,
            self.news,
            self.social,
            self.direct_message,
            self.sound_level,
            self.heartbeat,
            self.context(),
            self.direct(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday_rain() -> FeedRecord {
        FeedRecord::new(
            0,
            DayOfWeek::Monday,
            TimeOfDay::Day,
            Weather::Rain,
            Affect::new(-1, -5),
            Affect::new(3, -3),
            Affect::new(-3, -4),
            80,
            80,
        )
    }

    #[test]
    fn test_context_reduction() {
        // day (+5 arousal), rain (-5 valence), averaged with news (-1, -5)
        assert_eq!(monday_rain().context(), Affect::new(2, -5));

        let night_sun = FeedRecord {
            time_of_day: TimeOfDay::Night,
            weather: Weather::Sun,
            news: Affect::new(1, -7),
            ..monday_rain()
        };
        assert_eq!(night_sun.context(), Affect::new(-2, -1));
    }

    #[test]
    fn test_direct_reduction() {
        // (3 - 3 + 80/10 + (80-80)/10) / 5 = 1, (-3 - 4) / 3 = -2
        assert_eq!(monday_rain().direct(), Affect::new(1, -2));

        // integer division truncates toward zero, -0.4 becomes 0
        let no_signal = FeedRecord {
            social: Affect::new(5, -1),
            direct_message: Affect::new(0, 0),
            sound_level: 10,
            heartbeat: 0,
            ..monday_rain()
        };
        assert_eq!(no_signal.direct(), Affect::new(0, 0));
    }

    #[test]
    fn test_affect_display() {
        assert_eq!(Affect::new(-1, 5).to_string(), "(arousal=-1, valence=5)");
    }

    #[test]
    fn test_record_display_carries_reductions() {
        let rendered = monday_rain().to_string();
        assert!(rendered.starts_with("(id=0 day=Monday time=Day weather=Rain"));
        assert!(rendered.contains("context=(arousal=2, valence=-5)"));
        assert!(rendered.contains("direct=(arousal=1, valence=-2)"));
    }
}
