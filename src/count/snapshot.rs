use std::fmt;

use crate::event::EventSpec;

/// Counts read from a stopped [`CounterGroup`][super::CounterGroup].
///
/// The raw form has one slot more than the group has events: slot 0 holds
/// the leading value of the grouped read (the number of members), slots
/// `1..=len` hold the count of each event in open order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountSnapshot {
    specs: Vec<EventSpec>,
    raw: Vec<i64>,
}

/// The count of a single event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    pub spec: EventSpec,
    pub count: i64,
}

impl CountSnapshot {
    pub(crate) fn new(specs: Vec<EventSpec>, raw: Vec<i64>) -> Self {
        debug_assert_eq!(specs.len() + 1, raw.len());
        Self { specs, raw }
    }

    /// All slots as read, including the leading slot 0.
    pub fn raw(&self) -> &[i64] {
        &self.raw
    }

    /// Event counts in open order, without the leading slot.
    pub fn counts(&self) -> &[i64] {
        &self.raw[1..]
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Reading of the `index`-th event, the leader being 0.
    pub fn get(&self, index: usize) -> Option<Reading> {
        let spec = *self.specs.get(index)?;
        let count = self.raw[index + 1];
        Some(Reading { spec, count })
    }

    pub fn iter(&self) -> impl Iterator<Item = Reading> + '_ {
        self.specs
            .iter()
            .zip(self.counts())
            .map(|(&spec, &count)| Reading { spec, count })
    }

    /// The `PERF` tag followed by each count, tab separated, newline terminated.
    ///
    /// ```text
    /// PERF	1523	2210	3
    /// ```
    pub fn format(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for CountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PERF")?;
        for count in self.counts() {
            write!(f, "\t{}", count)?;
        }
        Ok(())
    }
}
