// ABOUTME: Shared types and configuration for colview.
// ABOUTME: Defines geometry, perspectives, settings, signals, and bookmarks.

pub mod bookmarks;
pub mod config;
pub mod geometry;
pub mod mouse;
pub mod perspective;
pub mod setting;
pub mod signal;

pub use bookmarks::Bookmarks;
pub use config::{Config, ConfigError, Settings};
pub use geometry::Rect;
pub use mouse::{MouseButton, MouseEvent, MouseKind};
pub use perspective::Perspective;
pub use setting::{Setting, Signal};
pub use signal::{SignalDispatcher, SubscriptionId};
