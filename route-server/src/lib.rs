//! Point-to-point route finder over a rail network.
//!
//! Stations and directed route segments are loaded from a store, built
//! into a weighted graph, and searched for either the fewest-hop route
//! (BFS) or the cheapest route by duration or distance (Dijkstra). A small
//! JSON API serves the searches over HTTP.

pub mod config;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod stations;
pub mod store;
pub mod web;
