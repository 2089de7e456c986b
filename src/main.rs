//! TaskDeck Dashboard
//!
//! Project/task management dashboard prototype built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary cards and kanban board over in-memory demo data
//! - Pie/bar/line status charts rendered as inline SVG
//! - Timeline (gantt) view of task spans
//! - Alerts list with severity levels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is hard-coded or generated per render; there is no
//! backend, persistence, or network surface.

use leptos::*;

mod app;
mod components;
mod data;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
