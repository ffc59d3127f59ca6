//! Metro route finder.
//!
//! Finds the quickest route between two stops of a multi-line rail
//! network, preferring fewer line changes when journey times tie.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
