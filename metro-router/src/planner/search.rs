//! Minimum-time, fewest-changes route search.
//!
//! Runs Dijkstra over (stop, line being ridden) states. Costs compare
//! lexicographically: travel minutes first, then line changes. Tracking
//! the ridden line in the state means a stop served by several lines is
//! charged a change only when the route actually switches lines there.
//! Walking an interchange link after riding a line is a change too; the
//! walk leaves the traveller on no line, so boarding after it is free.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{LineId, StopId};
use crate::network::{LinkKind, Network};

use super::itinerary::Itinerary;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A name did not match any stop
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    /// Both stops exist but nothing connects them
    #[error("no path exists between {from} and {to}")]
    NoPathExists { from: String, to: String },
}

/// Accumulated cost of a partial route.
///
/// Ordering is lexicographic: fewer minutes always wins, and line changes
/// only decide between routes of equal duration.
///
/// Minutes are summed as `u64`, wide enough for any route over `u32`
/// link weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost {
    pub minutes: u64,
    pub line_changes: u32,
}

impl Cost {
    fn extend(self, minutes: u32, changes_line: bool) -> Self {
        Cost {
            minutes: self.minutes + u64::from(minutes),
            line_changes: self.line_changes + u32::from(changes_line),
        }
    }
}

/// One link travelled by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: StopId,
    pub to: StopId,
    pub minutes: u32,
    pub kind: LinkKind,
}

impl Hop {
    /// The line ridden on this hop, if any.
    pub fn line(&self) -> Option<LineId> {
        match self.kind {
            LinkKind::Ride(line) => Some(line),
            LinkKind::Interchange => None,
        }
    }
}

/// A cheapest route between two stops.
///
/// # Invariants
///
/// - At least one stop
/// - `stops[i]` and `stops[i + 1]` are the ends of `hops[i]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<StopId>,
    hops: Vec<Hop>,
    cost: Cost,
}

impl Route {
    /// Stops visited, origin first.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Links travelled, in order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Total travel time in minutes.
    pub fn minutes(&self) -> u64 {
        self.cost.minutes
    }

    /// Number of times the route switches from one line to another.
    pub fn line_changes(&self) -> u32 {
        self.cost.line_changes
    }

    pub fn origin(&self) -> StopId {
        self.stops[0]
    }

    pub fn destination(&self) -> StopId {
        self.stops[self.stops.len() - 1]
    }
}

/// If boarding `next` while riding `current` switches lines, returns the
/// line being left.
///
/// Boarding the first line of a route is not a change, nor is boarding
/// after an interchange link, which has already been counted.
pub(crate) fn line_left(current: Option<LineId>, next: LineId) -> Option<LineId> {
    current.filter(|line| *line != next)
}

/// Best known way to reach a search state.
#[derive(Debug, Clone, Copy)]
struct Label {
    cost: Cost,
    /// Previous state and the hop taken from it. `None` at the origin.
    prev: Option<(usize, Hop)>,
}

/// Maps (stop, ridden line) pairs to dense indices.
///
/// Slot 0 is "not riding any line"; slot `n + 1` is line `n`. Indices
/// grow with the stop index, so ordering by index favours lower stops.
#[derive(Debug, Clone, Copy)]
struct StateSpace {
    slots: usize,
}

impl StateSpace {
    fn new(network: &Network) -> Self {
        Self {
            slots: network.line_count() + 1,
        }
    }

    fn len(&self, network: &Network) -> usize {
        network.stop_count() * self.slots
    }

    fn index(&self, stop: StopId, riding: Option<LineId>) -> usize {
        stop.0 * self.slots + riding.map_or(0, |line| line.0 + 1)
    }

    fn decode(&self, index: usize) -> (StopId, Option<LineId>) {
        let slot = index % self.slots;
        let riding = slot.checked_sub(1).map(LineId);
        (StopId(index / self.slots), riding)
    }
}

/// Route planner over a borrowed network.
///
/// The planner never mutates the network, so any number of planners may
/// search the same network at once.
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// The network being searched.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Find the best route between two stop names.
    ///
    /// Names must already be normalized. Both names are resolved before
    /// any search runs; the origin is checked first.
    pub fn find_route(&self, source: &str, destination: &str) -> Result<Itinerary, RouteError> {
        let from = self.resolve(source)?;
        let to = self.resolve(destination)?;

        let route = self
            .shortest_path(from, to)
            .ok_or_else(|| RouteError::NoPathExists {
                from: source.to_string(),
                to: destination.to_string(),
            })?;

        Ok(Itinerary::from_route(self.network, &route))
    }

    fn resolve(&self, name: &str) -> Result<StopId, RouteError> {
        self.network
            .resolve(name)
            .ok_or_else(|| RouteError::StationNotFound {
                name: name.to_string(),
            })
    }

    /// Search for the cheapest route between two stops.
    ///
    /// Returns `None` if the destination cannot be reached. Among routes
    /// with equal cost, the one through lower-numbered stops is preferred,
    /// so repeated searches always return the same route.
    pub fn shortest_path(&self, source: StopId, destination: StopId) -> Option<Route> {
        let space = StateSpace::new(self.network);
        let mut labels: Vec<Option<Label>> = vec![None; space.len(self.network)];
        let mut settled = vec![false; labels.len()];
        let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();

        let start = space.index(source, None);
        labels[start] = Some(Label {
            cost: Cost::default(),
            prev: None,
        });
        heap.push(Reverse((Cost::default(), start)));

        let mut states_settled = 0usize;

        while let Some(Reverse((cost, state))) = heap.pop() {
            if settled[state] {
                continue;
            }
            settled[state] = true;
            states_settled += 1;

            let (stop, riding) = space.decode(state);
            if stop == destination {
                debug!(
                    source = %self.network.stop(source).key(),
                    destination = %self.network.stop(destination).key(),
                    minutes = cost.minutes,
                    line_changes = cost.line_changes,
                    states_settled,
                    "Route found"
                );
                return Some(reconstruct(&labels, state, source));
            }

            for link in self.network.neighbors(stop) {
                let (next_riding, changes_line) = match link.kind {
                    LinkKind::Ride(line) => (Some(line), line_left(riding, line).is_some()),
                    LinkKind::Interchange => (None, riding.is_some()),
                };

                let next = space.index(link.to, next_riding);
                if settled[next] {
                    continue;
                }

                let candidate = cost.extend(link.minutes, changes_line);
                if labels[next].is_none_or(|label| candidate < label.cost) {
                    trace!(
                        from = %stop,
                        to = %link.to,
                        minutes = candidate.minutes,
                        line_changes = candidate.line_changes,
                        "Relaxed"
                    );
                    labels[next] = Some(Label {
                        cost: candidate,
                        prev: Some((
                            state,
                            Hop {
                                from: stop,
                                to: link.to,
                                minutes: link.minutes,
                                kind: link.kind,
                            },
                        )),
                    });
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(
            source = %self.network.stop(source).key(),
            destination = %self.network.stop(destination).key(),
            states_settled,
            "No route"
        );
        None
    }
}

/// Follow predecessor links back from `end` to the origin.
fn reconstruct(labels: &[Option<Label>], end: usize, origin: StopId) -> Route {
    let cost = labels[end].map(|label| label.cost).unwrap_or_default();

    let mut hops = Vec::new();
    let mut state = end;
    while let Some((prev, hop)) = labels[state].and_then(|label| label.prev) {
        hops.push(hop);
        state = prev;
    }
    hops.reverse();

    let stops = std::iter::once(origin)
        .chain(hops.iter().map(|hop| hop.to))
        .collect();

    Route { stops, hops, cost }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
