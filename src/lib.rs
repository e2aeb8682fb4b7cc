// src/lib.rs — Library root for WeatherDeck

pub mod api;
pub mod cli;
pub mod core;
pub mod infra;
pub mod session;
pub mod tui;
pub mod view;
pub mod weather;
