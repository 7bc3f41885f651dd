//! Floating-panel GM screen for the terminal.
//!
//! The desk hosts draggable, resizable panels (dice roller, notes, rules
//! reference, character sheets, NPC generator) whose layout and settings
//! persist as JSON documents in the platform data directory.

pub mod app;
pub mod character;
pub mod content;
pub mod desk;
pub mod dice;
pub mod error;
pub mod event_loop;
pub mod logging;
pub mod npc;
pub mod render;
pub mod settings;
pub mod statusbar;
pub mod storage;
pub mod theme;
pub mod ui;

pub use app::App;
pub use error::{Error, Result};
