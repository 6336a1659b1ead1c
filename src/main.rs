#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod models;
mod error;
mod board;
mod view_plan;
mod config;
mod context;
mod store;
mod logger;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("[APP] mounting todo board");
    mount_to_body(App);
}
