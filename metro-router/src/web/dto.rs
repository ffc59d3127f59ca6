//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Line, Network, StopListing};
use crate::planner::{InterchangeEvent, Itinerary, ItineraryStop};

/// Request to find a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin stop name, free text
    pub from: String,

    /// Destination stop name, free text
    pub to: String,
}

/// A stop on a route.
#[derive(Debug, Serialize)]
pub struct RouteStopResult {
    /// Stop name
    pub name: String,

    /// Line the traveller is on at this stop
    pub line: String,
}

impl From<&ItineraryStop> for RouteStopResult {
    fn from(stop: &ItineraryStop) -> Self {
        Self {
            name: stop.name.clone(),
            line: stop.line.clone(),
        }
    }
}

/// A change of line.
#[derive(Debug, Serialize)]
pub struct InterchangeResult {
    /// Stop where the change happens
    pub at: String,
    pub from_line: String,
    pub to_line: String,
}

impl From<&InterchangeEvent> for InterchangeResult {
    fn from(event: &InterchangeEvent) -> Self {
        Self {
            at: event.at.clone(),
            from_line: event.from_line.clone(),
            to_line: event.to_line.clone(),
        }
    }
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Normalized origin name
    pub from: String,

    /// Normalized destination name
    pub to: String,

    /// Stops in travel order
    pub stops: Vec<RouteStopResult>,

    /// Line changes in travel order
    pub interchanges: Vec<InterchangeResult>,

    /// Number of line changes
    pub interchange_count: usize,

    /// Number of stops, including both ends
    pub stop_count: usize,

    /// Estimated travel time in minutes
    pub travel_minutes: u64,
}

impl RouteResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            from: itinerary.origin().to_string(),
            to: itinerary.destination().to_string(),
            stops: itinerary.stops().iter().map(RouteStopResult::from).collect(),
            interchanges: itinerary
                .interchanges()
                .iter()
                .map(InterchangeResult::from)
                .collect(),
            interchange_count: itinerary.interchange_count(),
            stop_count: itinerary.stop_count(),
            travel_minutes: itinerary.travel_minutes(),
        }
    }
}

/// A stop in the stop listing.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub name: String,

    /// Lines serving the stop
    pub lines: Vec<String>,
}

impl From<StopListing> for StopResult {
    fn from(listing: StopListing) -> Self {
        Self {
            name: listing.name,
            lines: listing.lines,
        }
    }
}

/// Response listing every stop.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopResult>,
}

/// A line in the line listing.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub name: String,

    /// Minutes between consecutive stops
    pub minutes_between_stops: u32,

    /// Stop names in running order
    pub stops: Vec<String>,
}

impl LineResult {
    pub fn from_line(network: &Network, line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            minutes_between_stops: line.minutes_between_stops(),
            stops: line
                .stops()
                .iter()
                .map(|id| network.stop(*id).name().to_string())
                .collect(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub kind: &'static str,

    /// Human-readable message
    pub error: String,

    /// Where to look next, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
