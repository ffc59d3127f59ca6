//! The built network: stops, lines and weighted links.

use std::collections::BTreeSet;

use chrono::Duration;

use crate::domain::{LineId, StopId, StopKey};

/// A physical station.
///
/// A stop served by several lines is a single `Stop` with several entries
/// in its membership set.
#[derive(Debug, Clone)]
pub struct Stop {
    pub(crate) key: StopKey,
    pub(crate) lines: BTreeSet<LineId>,
}

impl Stop {
    /// The stop's normalized name.
    pub fn key(&self) -> &StopKey {
        &self.key
    }

    /// The stop's name for display.
    pub fn name(&self) -> &str {
        self.key.as_str()
    }

    /// Lines serving this stop.
    pub fn lines(&self) -> &BTreeSet<LineId> {
        &self.lines
    }

    /// Returns true if more than one line serves this stop.
    pub fn is_shared(&self) -> bool {
        self.lines.len() > 1
    }
}

/// A named, ordered sequence of stops.
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) name: String,
    pub(crate) minutes_between_stops: u32,
    pub(crate) stops: Vec<StopId>,
}

impl Line {
    /// The line's name, e.g. "Blue".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Travel time between consecutive stops on this line.
    pub fn minutes_between_stops(&self) -> u32 {
        self.minutes_between_stops
    }

    /// The stops served, in running order.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }
}

/// How a link between two stops is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Riding a line between consecutive stops.
    Ride(LineId),
    /// Moving between two distinct stops at the same location.
    Interchange,
}

/// One direction of an undirected weighted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub to: StopId,
    pub minutes: u32,
    pub kind: LinkKind,
}

impl Link {
    /// The line ridden along this link, if any.
    pub fn line(&self) -> Option<LineId> {
        match self.kind {
            LinkKind::Ride(line) => Some(line),
            LinkKind::Interchange => None,
        }
    }

    /// Returns the link weight as a Duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }
}

/// A declared interchange, as it ended up in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interchange {
    /// Both sides named the same stop. Its line memberships model the
    /// transfer and no link exists, so the declared `minutes` are kept
    /// for reference but never charged.
    SharedStop { stop: StopId, minutes: u32 },
    /// Two distinct stops joined by an interchange link.
    Linked { a: StopId, b: StopId, minutes: u32 },
}

/// A stop and the names of the lines serving it, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopListing {
    pub name: String,
    pub lines: Vec<String>,
}

/// An immutable multi-line rail network.
///
/// Built once by [`NetworkBuilder`](super::NetworkBuilder); every query
/// afterwards borrows it read-only, so a single instance can serve
/// concurrent searches without locking.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) stops: Vec<Stop>,
    pub(crate) lines: Vec<Line>,
    /// One adjacency list per stop. Every link is stored in both directions.
    pub(crate) adjacency: Vec<Vec<Link>>,
    pub(crate) interchanges: Vec<Interchange>,
}

impl Network {
    /// Look up a stop by its normalized name.
    ///
    /// The name must already be normalized; see
    /// [`normalize_stop_name`](crate::domain::normalize_stop_name).
    pub fn resolve(&self, name: &str) -> Option<StopId> {
        self.stops
            .iter()
            .position(|stop| stop.key.as_str() == name)
            .map(StopId)
    }

    /// Returns the stop with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this network.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Returns the line with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this network.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }

    /// Lines serving a stop.
    pub fn lines_of(&self, id: StopId) -> &BTreeSet<LineId> {
        &self.stop(id).lines
    }

    /// All links leaving a stop.
    pub fn neighbors(&self, id: StopId) -> &[Link] {
        &self.adjacency[id.0]
    }

    /// Weight of the cheapest direct link between two stops.
    ///
    /// Returns `None` if the stops are not directly connected.
    pub fn weight(&self, from: StopId, to: StopId) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .filter(|link| link.to == to)
            .map(|link| link.minutes)
            .min()
    }

    /// Iterate over stops with their ids, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// Iterate over lines with their ids, in declaration order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    /// Interchanges declared when the network was built.
    pub fn interchanges(&self) -> &[Interchange] {
        &self.interchanges
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Every stop with the names of the lines serving it, in insertion order.
    pub fn list_stops(&self) -> Vec<StopListing> {
        self.stops
            .iter()
            .map(|stop| StopListing {
                name: stop.name().to_string(),
                lines: stop
                    .lines
                    .iter()
                    .map(|line| self.line(*line).name.clone())
                    .collect(),
            })
            .collect()
    }
}
