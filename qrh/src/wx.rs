// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weather report utilities.
//!
//! Helpers around the raw text reports a crew pulls up next to the
//! calculator: where to fetch them and how old they are. Fetching itself is
//! the caller's business, this module only builds URLs and reads report
//! times.

use std::fmt;
use std::str::FromStr;

use log::warn;
use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod constants {
    /// Minutes in half a day, used to fold report ages across midnight.
    pub const HALF_DAY: i32 = 720;
    pub const FULL_DAY: i32 = 1440;
    /// Reports this many minutes old should no longer be trusted.
    pub const STALE_AFTER: i32 = 120;
}

/// A four-letter ICAO location indicator e.g. `EDDH`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Icao(String);

impl Icao {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Icao {
    type Err = Error;

    /// Parses an indicator, tolerating lowercase input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::UnexpectedString);
        }

        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The URL of the latest METAR for `station` on the NOAA text server.
pub fn metar_url(station: &Icao) -> String {
    format!("https://tgftp.nws.noaa.gov/data/observations/metar/stations/{station}.TXT")
}

/// The URL of the latest TAF for `station` on the NOAA text server.
pub fn taf_url(station: &Icao) -> String {
    format!("https://tgftp.nws.noaa.gov/data/forecasts/taf/stations/{station}.TXT")
}

/// A report time in UTC as found in METAR or ATIS text, e.g. `1250Z`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportTime {
    hours: u8,
    minutes: u8,
}

impl ReportTime {
    /// Scans free text for the first plausible `hhmmZ` token.
    ///
    /// Six-digit METAR day-time groups like `251250Z` do not match, they
    /// carry the day as well.
    pub fn find_in(text: &str) -> Option<Self> {
        text.split(|c: char| !c.is_ascii_alphanumeric())
            .find_map(|token| token.parse().ok())
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The age of the report relative to `now`, folded into at most half a
    /// day either way.
    ///
    /// Report times carry no date, so an age beyond twelve hours flips over
    /// to the nearer day. A negative age means the report time lies ahead
    /// of the clock.
    pub fn age(&self, now: OffsetDateTime) -> ReportAge {
        let now = i32::from(now.hour()) * 60 + i32::from(now.minute());
        let report = i32::from(self.hours) * 60 + i32::from(self.minutes);

        let mut minutes = now - report;
        if minutes < -constants::HALF_DAY {
            minutes += constants::FULL_DAY;
        } else if minutes > constants::HALF_DAY {
            minutes -= constants::FULL_DAY;
        }

        if minutes < 0 {
            warn!("report time {self} lies {} min ahead of the clock", -minutes);
        }

        ReportAge { minutes }
    }

    /// The age of the report relative to the system clock.
    pub fn age_now(&self) -> ReportAge {
        self.age(OffsetDateTime::now_utc())
    }
}

impl FromStr for ReportTime {
    type Err = Error;

    /// Parses a `hhmmZ` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix('Z').ok_or(Error::UnexpectedString)?;

        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedString);
        }

        let hours: u8 = digits[..2].parse().map_err(|_| Error::UnexpectedString)?;
        let minutes: u8 = digits[2..].parse().map_err(|_| Error::UnexpectedString)?;

        if hours > 23 || minutes > 59 {
            return Err(Error::ImplausibleValue);
        }

        Ok(Self { hours, minutes })
    }
}

impl fmt::Display for ReportTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}Z", self.hours, self.minutes)
    }
}

/// How long ago a report was issued.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportAge {
    minutes: i32,
}

impl ReportAge {
    /// The age in minutes, negative when the report lies ahead of the
    /// clock.
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// Whether the report is too old to rely on.
    pub fn is_stale(&self) -> bool {
        self.minutes >= constants::STALE_AFTER
    }
}

impl fmt::Display for ReportAge {
    /// Formats the age as `2 h 5 min`, ages ahead of the clock as `0 min`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.minutes.max(0);
        let hours = minutes / 60;
        let minutes = minutes % 60;

        if hours > 0 {
            write!(f, "{hours} h {minutes} min")
        } else {
            write!(f, "{minutes} min")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn icao_uppercases_and_validates() {
        let station: Icao = "eddh".parse().unwrap();
        assert_eq!(station.as_str(), "EDDH");

        assert_eq!("EDD".parse::<Icao>(), Err(Error::UnexpectedString));
        assert_eq!("EDDHH".parse::<Icao>(), Err(Error::UnexpectedString));
        assert_eq!("ED H".parse::<Icao>(), Err(Error::UnexpectedString));
    }

    #[test]
    fn noaa_urls_point_at_the_station() {
        let station: Icao = "RJTT".parse().unwrap();

        assert_eq!(
            metar_url(&station),
            "https://tgftp.nws.noaa.gov/data/observations/metar/stations/RJTT.TXT"
        );
        assert_eq!(
            taf_url(&station),
            "https://tgftp.nws.noaa.gov/data/forecasts/taf/stations/RJTT.TXT"
        );
    }

    #[test]
    fn report_time_parses_from_a_token() {
        let time: ReportTime = "1250Z".parse().unwrap();

        assert_eq!(time.hours(), 12);
        assert_eq!(time.minutes(), 50);
        assert_eq!(format!("{time}"), "1250Z");
    }

    #[test]
    fn out_of_range_times_are_implausible() {
        assert_eq!("2460Z".parse::<ReportTime>(), Err(Error::ImplausibleValue));
        assert_eq!("1860Z".parse::<ReportTime>(), Err(Error::ImplausibleValue));
        assert_eq!("125Z".parse::<ReportTime>(), Err(Error::UnexpectedString));
        assert_eq!("1250".parse::<ReportTime>(), Err(Error::UnexpectedString));
    }

    #[test]
    fn find_in_picks_the_first_time_token() {
        let atis = "TOKYO INTL ATIS INFORMATION K 1250Z WIND 18009KT ...";
        let time = ReportTime::find_in(atis).unwrap();

        assert_eq!((time.hours(), time.minutes()), (12, 50));
    }

    #[test]
    fn day_time_groups_do_not_match() {
        // The six-digit group carries the day of month, skipping it beats
        // misreading 2512 as a time.
        assert_eq!(ReportTime::find_in("METAR RJTT 251250Z 18009KT"), None);
    }

    #[test]
    fn age_counts_forward_from_the_report() {
        let time: ReportTime = "1200Z".parse().unwrap();
        let age = time.age(datetime!(2026-02-25 13:45 UTC));

        assert_eq!(age.minutes(), 105);
        assert!(!age.is_stale());
    }

    #[test]
    fn age_folds_across_midnight() {
        let time: ReportTime = "2350Z".parse().unwrap();
        let age = time.age(datetime!(2026-02-26 00:05 UTC));

        assert_eq!(age.minutes(), 15);
    }

    #[test]
    fn reports_slightly_ahead_of_the_clock_read_negative() {
        let time: ReportTime = "0005Z".parse().unwrap();
        let age = time.age(datetime!(2026-02-25 23:50 UTC));

        assert_eq!(age.minutes(), -15);
        assert_eq!(format!("{age}"), "0 min");
    }

    #[test]
    fn two_hours_counts_as_stale() {
        let time: ReportTime = "1200Z".parse().unwrap();

        assert!(time.age(datetime!(2026-02-25 14:00 UTC)).is_stale());
        assert!(!time.age(datetime!(2026-02-25 13:59 UTC)).is_stale());
    }

    #[test]
    fn ages_format_with_hours_when_long() {
        let time: ReportTime = "1200Z".parse().unwrap();

        assert_eq!(
            format!("{}", time.age(datetime!(2026-02-25 14:15 UTC))),
            "2 h 15 min"
        );
        assert_eq!(
            format!("{}", time.age(datetime!(2026-02-25 12:45 UTC))),
            "45 min"
        );
    }
}
