/// Launch-data proxy and list controller
pub mod clients;
pub mod config;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod search;
pub mod services;
pub mod utils;
