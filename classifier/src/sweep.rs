//! Range sweeps and per-kind tallies.

use crate::classification::{Classification, Kind};
use crate::errors::{ClassifierError, Result};
use crate::rules::{Mode, classify_with};
use serde::Serialize;
use serde::ser::SerializeStruct;

/// One classified number from a sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entry {
    pub n: u64,
    pub classification: Classification,
}

impl Serialize for Entry {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Entry", 3)?;
        s.serialize_field("n", &self.n)?;
        s.serialize_field("kind", &self.classification.kind())?;
        s.serialize_field("label", &self.classification.label())?;
        s.end()
    }
}

/// Lazy classification of every number in an inclusive range.
#[derive(Clone, Debug)]
pub struct Sweep {
    mode: Mode,
    next: u64,
    end: u64,
    exhausted: bool,
}

/// Classify every number in `start..=end` with `mode`.
pub fn sweep(start: u64, end: u64, mode: Mode) -> Result<Sweep> {
    if start > end {
        return Err(ClassifierError::InvalidRange { start, end });
    }
    tracing::debug!(start, end, %mode, "starting sweep");
    Ok(Sweep {
        mode,
        next: start,
        end,
        exhausted: false,
    })
}

impl Sweep {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Numbers left to classify. Saturates for the full `u64` range.
    pub fn remaining(&self) -> u64 {
        self.exact_remaining().unwrap_or(u64::MAX)
    }

    fn exact_remaining(&self) -> Option<u64> {
        if self.exhausted {
            Some(0)
        } else {
            (self.end - self.next).checked_add(1)
        }
    }
}

impl Iterator for Sweep {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.exhausted {
            return None;
        }
        let n = self.next;
        if n == self.end {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        Some(Entry {
            n,
            classification: classify_with(self.mode, n),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.exact_remaining().and_then(|n| usize::try_from(n).ok()) {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Sweep {}

/// Count of classifications per kind.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Tally {
    pub fibonacci: u64,
    pub fizz_buzz: u64,
    pub fizz: u64,
    pub buzz: u64,
    pub number: u64,
}

impl Tally {
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut tally = Self::default();
        for entry in entries {
            tally.record(&entry.classification);
        }
        tally
    }

    pub fn record(&mut self, classification: &Classification) {
        *self.slot(classification.kind()) += 1;
    }

    pub fn get(&self, kind: Kind) -> u64 {
        match kind {
            Kind::Fibonacci => self.fibonacci,
            Kind::FizzBuzz => self.fizz_buzz,
            Kind::Fizz => self.fizz,
            Kind::Buzz => self.buzz,
            Kind::Number => self.number,
        }
    }

    pub fn total(&self) -> u64 {
        Kind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }

    fn slot(&mut self, kind: Kind) -> &mut u64 {
        match kind {
            Kind::Fibonacci => &mut self.fibonacci,
            Kind::FizzBuzz => &mut self.fizz_buzz,
            Kind::Fizz => &mut self.fizz,
            Kind::Buzz => &mut self.buzz,
            Kind::Number => &mut self.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sweep_yields_ascending_entries() {
        let entries: Vec<Entry> = sweep(6, 10, Mode::FizzBuzzFibonacci)
            .expect("valid range")
            .collect();
        let labels: Vec<String> = entries
            .iter()
            .map(|e| e.classification.label().into_owned())
            .collect();
        assert_eq!(labels, vec!["Fizz", "7", "Fibonacci", "Fizz", "Buzz"]);
        assert_eq!(
            entries.iter().map(|e| e.n).collect::<Vec<_>>(),
            vec![6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn single_number_range() {
        let entries: Vec<Entry> = sweep(42, 42, Mode::FizzBuzz)
            .expect("valid range")
            .collect();
        assert_eq!(
            entries,
            vec![Entry {
                n: 42,
                classification: Classification::Fizz
            }]
        );
    }

    #[test]
    fn range_ending_at_max_terminates() {
        let entries: Vec<Entry> = sweep(u64::MAX - 2, u64::MAX, Mode::FizzBuzz)
            .expect("valid range")
            .collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.last().map(|e| e.n), Some(u64::MAX));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            sweep(10, 2, Mode::default()),
            Err(ClassifierError::InvalidRange { start: 10, end: 2 })
        ));
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut s = sweep(0, 100, Mode::default()).expect("valid range");
        assert_eq!(s.size_hint(), (101, Some(101)));
        s.next();
        assert_eq!(s.remaining(), 100);
        assert_eq!(s.by_ref().count(), 100);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn tally_for_zero_to_hundred() {
        let tally = sweep(0, 100, Mode::FizzBuzzFibonacci)
            .map(Tally::from_entries)
            .expect("valid range");
        assert_eq!(
            tally,
            Tally {
                fibonacci: 11,
                fizz_buzz: 6,
                fizz: 25,
                buzz: 12,
                number: 47,
            }
        );
        assert_eq!(tally.total(), 101);
    }

    #[test]
    fn plain_tally_for_zero_to_hundred() {
        let tally = sweep(0, 100, Mode::FizzBuzz)
            .map(Tally::from_entries)
            .expect("valid range");
        assert_eq!(tally.get(Kind::Fibonacci), 0);
        assert_eq!(tally.get(Kind::FizzBuzz), 7);
        assert_eq!(tally.get(Kind::Fizz), 27);
        assert_eq!(tally.get(Kind::Buzz), 14);
        assert_eq!(tally.get(Kind::Number), 53);
    }

    #[test]
    fn entry_serializes_with_kind_and_label() {
        let entry = Entry {
            n: 9,
            classification: Classification::Fizz,
        };
        assert_eq!(
            serde_json::to_string(&entry).expect("serialize"),
            r#"{"n":9,"kind":"fizz","label":"Fizz"}"#
        );
        let entry = Entry {
            n: 7,
            classification: Classification::Number(7),
        };
        assert_eq!(
            serde_json::to_string(&entry).expect("serialize"),
            r#"{"n":7,"kind":"number","label":"7"}"#
        );
    }
}
