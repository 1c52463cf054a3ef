//! Schedule time model.
//!
//! # Design
//!
//! Time is represented as a signed minute count since the Unix epoch.  Flight
//! schedules are published at minute resolution, and the discrete-event
//! engines advance their virtual clock along the same axis, so one integer
//! type covers both.  Integer minutes keep all schedule arithmetic exact
//! (no floating-point drift) and comparisons O(1).
//!
//! Civil-date conversion is done in-crate (Gregorian, proleptic) rather than
//! pulling in a datetime library — the only operations needed are
//! construction from a calendar date and human-readable display.

use std::fmt;

const MINUTES_PER_DAY: i64 = 1_440;

// ── Stamp ────────────────────────────────────────────────────────────────────

/// An absolute point on the schedule axis: minutes since 1970-01-01 00:00 UTC.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamp(pub i64);

impl Stamp {
    pub const ZERO: Stamp = Stamp(0);

    /// Sentinel "later than any real schedule" — the search's initial
    /// best-arrival value, improvable by every first visit.
    pub const MAX: Stamp = Stamp(i64::MAX);

    /// Build a stamp from a civil date and time of day (proleptic Gregorian).
    ///
    /// Uses the days-from-civil algorithm; exact for any year representable
    /// in `i32`.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Stamp {
        let y = year as i64 - if month <= 2 { 1 } else { 0 };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = month as i64;
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        let days = era * 146_097 + doe - 719_468;
        Stamp(days * MINUTES_PER_DAY + hour as i64 * 60 + minute as i64)
    }

    /// Stamp `minutes` later than `self`.
    #[inline]
    pub fn offset(self, minutes: i64) -> Stamp {
        Stamp(self.0 + minutes)
    }

    /// Minutes elapsed from `earlier` to `self`.  Negative if `earlier`
    /// is actually later.
    #[inline]
    pub fn since(self, earlier: Stamp) -> i64 {
        self.0 - earlier.0
    }

    /// Decompose into (year, month, day, hour, minute).  Inverse of
    /// [`from_ymd_hm`](Self::from_ymd_hm).
    fn civil(self) -> (i32, u32, u32, u32, u32) {
        let days = self.0.div_euclid(MINUTES_PER_DAY);
        let rem = self.0.rem_euclid(MINUTES_PER_DAY);

        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };

        (y as i32, m as u32, d as u32, (rem / 60) as u32, (rem % 60) as u32)
    }
}

impl std::ops::Add<i64> for Stamp {
    type Output = Stamp;
    #[inline]
    fn add(self, rhs: i64) -> Stamp {
        Stamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Stamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Stamp) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, mo, d, h, mi) = self.civil();
        write!(f, "{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}")
    }
}

// ── TimeWindow ───────────────────────────────────────────────────────────────

/// The half-open journey window `[opens, closes]` both engines search inside.
///
/// Callers validate non-degeneracy (`opens < closes`) before handing the
/// window to an engine; the core does not re-check it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub opens: Stamp,
    pub closes: Stamp,
}

impl TimeWindow {
    pub fn new(opens: Stamp, closes: Stamp) -> Self {
        Self { opens, closes }
    }

    /// `true` if `at` lies inside the window (inclusive on both ends).
    #[inline]
    pub fn contains(&self, at: Stamp) -> bool {
        self.opens <= at && at <= self.closes
    }

    /// Window length in minutes.
    #[inline]
    pub fn span_minutes(&self) -> i64 {
        self.closes - self.opens
    }

    /// Stamp at fraction `num / den` of the span from `opens`.  Used to
    /// place equally spaced ant spawn waves.
    #[inline]
    pub fn at_fraction(&self, num: i64, den: i64) -> Stamp {
        self.opens + self.span_minutes() * num / den
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.opens, self.closes)
    }
}
