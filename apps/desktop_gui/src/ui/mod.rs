//! UI layer for the movie card: app shell, widgets, theme, and layout primitives.

pub mod app;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use app::MovieCardApp;
