#![allow(warnings)]
//! Tribute Page Entry Point

mod models;
mod content;
mod config;
mod dom;
mod particles;
mod accordion;
mod carousel;
mod game;
mod audio;
mod components;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = dom::on_ready(app::boot) {
        web_sys::console::error_1(&format!("[APP] boot failed: {}", e).into());
    }
}
