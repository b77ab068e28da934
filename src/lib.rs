//! Demo1 API - Static health and greeting endpoints for demo1-471009
//!
//! This library exposes the core modules for testing and reuse.

pub mod config;
pub mod routes;
