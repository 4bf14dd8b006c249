//! Food Menu Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod categories;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod format;
mod logging;
mod models;
mod selection;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
