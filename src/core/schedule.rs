use itertools::Itertools;

use crate::core::{
    clock_time::{ClockTime, ClockTimeFormatError},
    time_range::TimeRange,
};

/// One program of the announced day and the span it airs in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleEntry {
    pub airs_at: TimeRange,
    pub name: String,
}

/// The whole announced day, in page order.
///
/// The spans are contiguous by construction: every entry ends where its
/// successor starts, and the last entry wraps around to the first one.
#[derive(Debug, Eq, PartialEq, derive_more::Deref)]
pub struct DailySchedule(pub Vec<ScheduleEntry>);

/// Matching «now» against the schedule did not pin down a single program.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("no schedule entry covers the requested time")]
    NothingAiring,

    #[error("{count} schedule entries cover the requested time")]
    Ambiguous { count: usize },
}

impl DailySchedule {
    /// Build the day from the announced `(start time text, program name)`
    /// pairs, in page order.
    ///
    /// Each program runs from its own start time up to the start time of its
    /// cyclic successor: the last program of the page wraps around to the
    /// first one, closing the day into a ring. A lone announcement therefore
    /// yields the degenerate span containing only its own start instant.
    ///
    /// The first start time that fails to parse aborts the whole assembly.
    pub fn assemble(announcements: Vec<(String, String)>) -> Result<Self, ClockTimeFormatError> {
        let starts: Vec<(ClockTime, String)> = announcements
            .into_iter()
            .map(|(starts_at, name)| Ok((starts_at.parse()?, name)))
            .collect::<Result<_, ClockTimeFormatError>>()?;
        let entries = starts
            .into_iter()
            .circular_tuple_windows()
            .map(|((starts_at, name), (next_starts_at, _))| ScheduleEntry {
                airs_at: TimeRange::new(starts_at, next_starts_at),
                name,
            })
            .collect();
        Ok(Self(entries))
    }

    /// Shift every span once by the signed offset and return the single
    /// entry whose span contains `now`.
    ///
    /// Spans share their boundary instants with their neighbors, so a `now`
    /// falling exactly on a boundary is ambiguous and errors out.
    pub fn currently_airing(
        &self,
        offset_minutes: i32,
        now: ClockTime,
    ) -> Result<&ScheduleEntry, ResolveError> {
        let airing: Vec<&ScheduleEntry> = self
            .iter()
            .filter(|entry| entry.airs_at.shift(offset_minutes).contains(now))
            .collect();
        match airing.as_slice() {
            &[entry] => Ok(entry),
            &[] => Err(ResolveError::NothingAiring),
            _ => Err(ResolveError::Ambiguous { count: airing.len() }),
        }
    }
}
