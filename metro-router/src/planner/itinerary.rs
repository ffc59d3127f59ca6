//! Itineraries: routes described by stop names and lines.

use chrono::Duration;

use crate::domain::{LineId, StopId};
use crate::network::{LinkKind, Network};

use super::search::{Route, line_left};

/// A stop on an itinerary and the line the traveller is on there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStop {
    pub name: String,
    pub line: String,
}

/// A change from one line to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchangeEvent {
    /// Stop where the new line is boarded, or reached on foot
    pub at: String,
    pub from_line: String,
    pub to_line: String,
}

/// A route ready to be shown to a traveller.
///
/// The interchange count is the one accumulated by the search, so it is
/// always the count the route was optimized for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    stops: Vec<ItineraryStop>,
    interchanges: Vec<InterchangeEvent>,
    interchange_count: usize,
    travel_minutes: u64,
}

impl Itinerary {
    /// Describe a route found in `network`.
    ///
    /// Walks the route once, tracking the line being ridden. Each stop is
    /// labelled with the line that brought the traveller there. The origin
    /// and stops reached over an interchange link take the line boarded
    /// next when it serves them, and otherwise the first line that does.
    pub fn from_route(network: &Network, route: &Route) -> Self {
        let hops = route.hops();
        let stop_name = |id: StopId| network.stop(id).name().to_string();
        let line_name =
            |id: Option<LineId>| id.map(|l| network.line(l).name().to_string()).unwrap_or_default();
        let serving = |stop: StopId, preferred: Option<LineId>| {
            let lines = network.lines_of(stop);
            preferred
                .filter(|line| lines.contains(line))
                .or_else(|| lines.first().copied())
        };

        let origin = route.origin();
        let mut stops = Vec::with_capacity(route.stops().len());
        stops.push(ItineraryStop {
            name: stop_name(origin),
            line: line_name(serving(origin, hops.first().and_then(|hop| hop.line()))),
        });

        let mut interchanges = Vec::new();
        let mut riding: Option<LineId> = None;

        for (i, hop) in hops.iter().enumerate() {
            let label = match hop.kind {
                LinkKind::Ride(line) => {
                    if let Some(previous) = line_left(riding, line) {
                        interchanges.push(InterchangeEvent {
                            at: stop_name(hop.from),
                            from_line: line_name(Some(previous)),
                            to_line: line_name(Some(line)),
                        });
                    }
                    riding = Some(line);
                    Some(line)
                }
                LinkKind::Interchange => {
                    let boarded = hops[i + 1..].iter().find_map(|next| next.line());
                    let label = serving(hop.to, boarded);
                    if let Some(previous) = riding.take() {
                        interchanges.push(InterchangeEvent {
                            at: stop_name(hop.to),
                            from_line: line_name(Some(previous)),
                            to_line: line_name(label),
                        });
                    }
                    label
                }
            };

            stops.push(ItineraryStop {
                name: stop_name(hop.to),
                line: line_name(label),
            });
        }

        debug_assert_eq!(
            interchanges.len(),
            route.line_changes() as usize,
            "reported interchanges disagree with the search"
        );

        Self {
            stops,
            interchanges,
            interchange_count: route.line_changes() as usize,
            travel_minutes: route.minutes(),
        }
    }

    /// Stops in travel order, with line labels.
    pub fn stops(&self) -> &[ItineraryStop] {
        &self.stops
    }

    /// Line changes in travel order.
    pub fn interchanges(&self) -> &[InterchangeEvent] {
        &self.interchanges
    }

    pub fn interchange_count(&self) -> usize {
        self.interchange_count
    }

    /// Number of stops, including origin and destination.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn travel_minutes(&self) -> u64 {
        self.travel_minutes
    }

    /// Returns the travel time as a Duration.
    ///
    /// Saturates at `Duration::MAX` for totals chrono cannot represent.
    pub fn travel_time(&self) -> Duration {
        i64::try_from(self.travel_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }

    pub fn origin(&self) -> &str {
        &self.stops[0].name
    }

    pub fn destination(&self) -> &str {
        &self.stops[self.stops.len() - 1].name
    }
}
