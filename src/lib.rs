pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

#[cfg(test)]
mod testing;
