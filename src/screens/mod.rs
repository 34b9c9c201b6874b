//! Screens of the interactive UI.

pub mod outlines;
pub mod screen_trait;

pub use outlines::OutlinesScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
