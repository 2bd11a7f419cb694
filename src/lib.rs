//! tocsin: scroll-synced table of contents navigation for markdown documents.
//!
//! The crate splits into the pure tracking core and the terminal host around it. The
//! core (`tracker`, `observer`, `scroll`) decides which section is active at a scroll
//! position, suppresses the race between user selection and scroll-driven updates, and
//! animates the sidebar toward the highlighted entry. The host (`outline`, `layout`,
//! `app_state`, `ui`) extracts headings with tree-sitter, measures their rendered rows
//! once at load, and wires key input through the application state.

pub mod app_state;
pub mod config;
pub mod formats;
pub mod layout;
pub mod observer;
pub mod outline;
pub mod scroll;
pub mod tracker;
pub mod ui;
