#![allow(warnings)]
//! Workout List Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(config::log_level(), rolling_logger::DEFAULT_CAPACITY) {
        log::warn!("[APP] Logger already installed: {}", e);
    }
    mount_to_body(App);
}
