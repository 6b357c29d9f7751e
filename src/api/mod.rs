//! API Module
//!
//! HTTP handlers and routing for the chart cache administration API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /cache/stats` - Cache statistics
//! - `POST /cache/contains` - Check for a live chart
//! - `POST /cache/invalidate` - Drop one chart
//! - `POST /cache/cleanup` - Run an expiry sweep now
//! - `DELETE /cache` - Drop every chart

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
