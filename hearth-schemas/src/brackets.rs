//! Discrete survey brackets and the text parsers that produce them.
//!
//! Each parser lowercases and trims the raw answer, then matches known
//! phrases by containment. Text that matches nothing becomes the `Unknown`
//! variant; the configuration tables decide what `Unknown` costs.

use serde::{Deserialize, Serialize};
use std::fmt;

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lowercased, trimmed equality against "yes".
pub fn is_yes(raw: &str) -> bool {
    normalize(raw) == "yes"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefrigeratorSize {
    HalfCompact,
    Small,
    Medium,
    Large,
    ExtraLarge,
    #[default]
    Unknown,
}

impl RefrigeratorSize {
    pub fn from_survey(raw: &str) -> Self {
        let text = normalize(raw);
        if text.contains("half-size") || text.contains("compact") {
            RefrigeratorSize::HalfCompact
        } else if text.contains("very large") || text.contains("bigger than 29.5") {
            RefrigeratorSize::ExtraLarge
        } else if text.contains("small") || text.contains("17.5 cubic feet or less") {
            RefrigeratorSize::Small
        } else if text.contains("medium") || text.contains("17.6 to 22.5") {
            RefrigeratorSize::Medium
        } else if text.contains("large") || text.contains("22.6 to 29.5") {
            RefrigeratorSize::Large
        } else {
            RefrigeratorSize::Unknown
        }
    }
}

/// Age brackets shared by refrigerators and central air conditioners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceAge {
    LessThan2,
    From2To4,
    From5To9,
    From10To14,
    From15To19,
    TwentyOrMore,
    #[default]
    Unknown,
}

impl ApplianceAge {
    pub fn from_survey(raw: &str) -> Self {
        let text = normalize(raw);
        if text.contains("less than 2 year") {
            ApplianceAge::LessThan2
        } else if text.contains("2 to 4 year") {
            ApplianceAge::From2To4
        } else if text.contains("5 to 9 year") {
            ApplianceAge::From5To9
        } else if text.contains("10 to 14 year") {
            ApplianceAge::From10To14
        } else if text.contains("15 to 19 year") {
            ApplianceAge::From15To19
        } else if text.contains("20 or more year") {
            ApplianceAge::TwentyOrMore
        } else {
            ApplianceAge::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvType {
    Crt,
    Lcd,
    Led,
    Plasma,
    Oled,
    #[default]
    Unknown,
}

impl TvType {
    pub fn from_survey(raw: &str) -> Self {
        let text = normalize(raw);
        if text.contains("crt") {
            TvType::Crt
        } else if text.contains("lcd") {
            TvType::Lcd
        } else if text.contains("oled") {
            TvType::Oled
        } else if text.contains("led") {
            TvType::Led
        } else if text.contains("plasma") {
            TvType::Plasma
        } else {
            TvType::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvSize {
    LessThan27,
    From27To39,
    From40To59,
    SixtyOrLarger,
    #[default]
    Unknown,
}

impl TvSize {
    pub fn from_survey(raw: &str) -> Self {
        let text = normalize(raw);
        if text.contains("less than 27 inches") {
            TvSize::LessThan27
        } else if text.contains("27 to 39 inches") {
            TvSize::From27To39
        } else if text.contains("40 to 59 inches") {
            TvSize::From40To59
        } else if text.contains("60 inches or larger") {
            TvSize::SixtyOrLarger
        } else {
            TvSize::Unknown
        }
    }
}

/// Bulb technology that sets the average bulb wattage for a home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulbTechnology {
    Led,
    Incandescent,
    #[default]
    Cfl,
}

impl BulbTechnology {
    /// Picks one technology from the presence flags: LED wins over
    /// incandescent, and CFL is the fallback.
    pub fn from_presence(led: bool, incandescent: bool) -> Self {
        if led {
            BulbTechnology::Led
        } else if incandescent {
            BulbTechnology::Incandescent
        } else {
            BulbTechnology::Cfl
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Owner,
    Renter,
    #[default]
    Unknown,
}

impl Ownership {
    pub fn from_survey(raw: &str) -> Self {
        let text = normalize(raw);
        if text.contains("own") {
            Ownership::Owner
        } else if text.contains("rent") || text.contains("lease") {
            Ownership::Renter
        } else {
            Ownership::Unknown
        }
    }
}

/// The nine year cohorts used when comparing homes by construction or
/// move-in year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YearBucket {
    #[serde(rename = "Before 1950")]
    Before1950,
    #[serde(rename = "1950-1959")]
    Fifties,
    #[serde(rename = "1960-1969")]
    Sixties,
    #[serde(rename = "1970-1979")]
    Seventies,
    #[serde(rename = "1980-1989")]
    Eighties,
    #[serde(rename = "1990-1999")]
    Nineties,
    #[serde(rename = "2000-2009")]
    TwoThousands,
    #[serde(rename = "2010-2019")]
    TwentyTens,
    #[serde(rename = "2020 or later")]
    From2020,
}

impl YearBucket {
    pub const ALL: [YearBucket; 9] = [
        YearBucket::Before1950,
        YearBucket::Fifties,
        YearBucket::Sixties,
        YearBucket::Seventies,
        YearBucket::Eighties,
        YearBucket::Nineties,
        YearBucket::TwoThousands,
        YearBucket::TwentyTens,
        YearBucket::From2020,
    ];

    pub fn label(self) -> &'static str {
        match self {
            YearBucket::Before1950 => "Before 1950",
            YearBucket::Fifties => "1950-1959",
            YearBucket::Sixties => "1960-1969",
            YearBucket::Seventies => "1970-1979",
            YearBucket::Eighties => "1980-1989",
            YearBucket::Nineties => "1990-1999",
            YearBucket::TwoThousands => "2000-2009",
            YearBucket::TwentyTens => "2010-2019",
            YearBucket::From2020 => "2020 or later",
        }
    }

    pub fn from_year(year: i32) -> Self {
        match year {
            i32::MIN..=1949 => YearBucket::Before1950,
            1950..=1959 => YearBucket::Fifties,
            1960..=1969 => YearBucket::Sixties,
            1970..=1979 => YearBucket::Seventies,
            1980..=1989 => YearBucket::Eighties,
            1990..=1999 => YearBucket::Nineties,
            2000..=2009 => YearBucket::TwoThousands,
            2010..=2019 => YearBucket::TwentyTens,
            _ => YearBucket::From2020,
        }
    }

    /// Normalizes a year answer. Returns `None` for text that names no
    /// recognizable year, which keeps that household out of the cohorts.
    pub fn from_survey(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }
        if text.contains("2020 or later") {
            return Some(YearBucket::From2020);
        }
        if text.contains("before") {
            return Some(YearBucket::Before1950);
        }
        if text.contains('-') {
            // Only the bucket labels themselves; other ranges may straddle buckets.
            return YearBucket::ALL
                .into_iter()
                .find(|bucket| bucket.label() == text);
        }
        text.parse::<i32>().ok().map(YearBucket::from_year)
    }
}

impl fmt::Display for YearBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Half-size or compact", RefrigeratorSize::HalfCompact)]
    #[case("Small (17.5 cubic feet or less)", RefrigeratorSize::Small)]
    #[case("Medium (17.6 to 22.5 cubic feet)", RefrigeratorSize::Medium)]
    #[case("  LARGE (22.6 to 29.5 cubic feet) ", RefrigeratorSize::Large)]
    #[case("Very large (bigger than 29.5 cubic feet)", RefrigeratorSize::ExtraLarge)]
    #[case("Don't know", RefrigeratorSize::Unknown)]
    #[case("", RefrigeratorSize::Unknown)]
    fn parses_refrigerator_sizes(#[case] raw: &str, #[case] expected: RefrigeratorSize) {
        assert_eq!(RefrigeratorSize::from_survey(raw), expected);
    }

    #[rstest]
    #[case("Less than 2 years old", ApplianceAge::LessThan2)]
    #[case("2 to 4 years old", ApplianceAge::From2To4)]
    #[case("5 to 9 years old", ApplianceAge::From5To9)]
    #[case("10 to 14 years old", ApplianceAge::From10To14)]
    #[case("15 to 19 years old", ApplianceAge::From15To19)]
    #[case("20 or more years old", ApplianceAge::TwentyOrMore)]
    #[case("Don't know", ApplianceAge::Unknown)]
    #[case("nan", ApplianceAge::Unknown)]
    fn parses_ages(#[case] raw: &str, #[case] expected: ApplianceAge) {
        assert_eq!(ApplianceAge::from_survey(raw), expected);
    }

    #[rstest]
    #[case("CRT (cathode ray tube)", TvType::Crt)]
    #[case("LCD (liquid crystal display)", TvType::Lcd)]
    #[case("LED (light-emitting diode)", TvType::Led)]
    #[case("Plasma", TvType::Plasma)]
    #[case("OLED (organic light-emitting diode)", TvType::Oled)]
    #[case("Projector", TvType::Unknown)]
    fn parses_tv_types(#[case] raw: &str, #[case] expected: TvType) {
        assert_eq!(TvType::from_survey(raw), expected);
    }

    #[rstest]
    #[case("Less than 27 inches", TvSize::LessThan27)]
    #[case("27 to 39 inches", TvSize::From27To39)]
    #[case("40 to 59 inches", TvSize::From40To59)]
    #[case("60 inches or larger", TvSize::SixtyOrLarger)]
    #[case("huge", TvSize::Unknown)]
    fn parses_tv_sizes(#[case] raw: &str, #[case] expected: TvSize) {
        assert_eq!(TvSize::from_survey(raw), expected);
    }

    #[test]
    fn led_takes_priority_over_incandescent() {
        assert_eq!(BulbTechnology::from_presence(true, true), BulbTechnology::Led);
        assert_eq!(BulbTechnology::from_presence(false, true), BulbTechnology::Incandescent);
        assert_eq!(BulbTechnology::from_presence(false, false), BulbTechnology::Cfl);
    }

    #[rstest]
    #[case("Own", Ownership::Owner)]
    #[case("Rent", Ownership::Renter)]
    #[case("Lease", Ownership::Renter)]
    #[case("Other", Ownership::Unknown)]
    fn parses_ownership(#[case] raw: &str, #[case] expected: Ownership) {
        assert_eq!(Ownership::from_survey(raw), expected);
    }

    #[rstest]
    #[case("2020 or later", Some(YearBucket::From2020))]
    #[case("Before 1970", Some(YearBucket::Before1950))]
    #[case("1950-1959", Some(YearBucket::Fifties))]
    #[case(" 1990-1999 ", Some(YearBucket::Nineties))]
    #[case("1975-1985", None)]
    #[case("1970-1975", None)]
    #[case("1970 to 1979", None)]
    #[case("2015 to present", None)]
    #[case("1948", Some(YearBucket::Before1950))]
    #[case("1995", Some(YearBucket::Nineties))]
    #[case("2019", Some(YearBucket::TwentyTens))]
    #[case("2023", Some(YearBucket::From2020))]
    #[case("Don't know", None)]
    #[case("", None)]
    fn buckets_years(#[case] raw: &str, #[case] expected: Option<YearBucket>) {
        assert_eq!(YearBucket::from_survey(raw), expected);
    }

    #[test]
    fn year_buckets_sort_chronologically() {
        let mut shuffled = vec![YearBucket::From2020, YearBucket::Before1950, YearBucket::Eighties];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![YearBucket::Before1950, YearBucket::Eighties, YearBucket::From2020]
        );
    }
}
