//! Stylist Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod flows;
mod logger;
mod models;
mod outfit;
mod session;
mod status;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
