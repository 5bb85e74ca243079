//! HTTP surface of SessionGate: routes, the session guard and envelope mapping

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
