//! Shopping List Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod controller;
mod models;
mod render;
mod store;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
