// Public API
pub use library::{AudioClip, SoundLibrary};
pub use output::{AudioOutput, LoggingAudioOutput};
pub use subscriber::AudioEventSubscriber;

// Internal modules
mod library;
mod output;
mod subscriber;
