// src/core/mod.rs

pub mod controller;

pub use controller::{Alert, Completion, Controller, Request};
