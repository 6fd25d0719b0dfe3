// Public API
pub use display::{Display, InMemoryDisplay, Panel, TextField};
pub use panels::Panels;
pub use popup::PopupTimers;
pub use subscriber::UiEventSubscriber;

// Internal modules
mod display;
mod panels;
mod popup;
mod subscriber;
