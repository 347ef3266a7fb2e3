//! Trip plan synthesis server.
//!
//! Turns a pair (or chain) of countries, a budget and a pace into hub
//! cities, estimated route legs, a cost breakdown and an itinerary
//! skeleton. Also resolves randomized city candidate sets for a trip.

pub mod cache;
pub mod candidates;
pub mod catalog;
pub mod config;
pub mod geo;
pub mod osrm;
pub mod planner;
pub mod web;
