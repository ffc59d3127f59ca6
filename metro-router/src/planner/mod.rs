//! Route planner.
//!
//! Answers "what is the quickest way from this stop to that one?",
//! preferring fewer line changes when two routes take the same time.
//!
//! [`Planner`] searches a borrowed [`Network`](crate::network::Network)
//! and turns the best [`Route`] into an [`Itinerary`].

mod itinerary;
mod search;

pub use itinerary::{InterchangeEvent, Itinerary, ItineraryStop};
pub use search::{Cost, Hop, Planner, Route, RouteError};
