pub mod duration;
pub mod event;
pub mod interval;
pub mod message;
pub mod phase;

pub use duration::PhaseDuration;
pub use event::TransitionEvent;
pub use interval::LongBreakInterval;
pub use message::NotificationMessage;
pub use phase::Phase;
