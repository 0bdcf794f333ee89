pub mod animation;
pub mod config;
pub mod error;
pub mod host;
pub mod locale;
pub mod value;
pub mod visibility;

// Re-exports for convenience
pub use animation::{AnimatedStats, ManualScheduler, Phase, RealtimeScheduler, Scheduler, StatEntry};
pub use error::{ConfigError, StatsError};
pub use host::{ElementId, HtmlDocument, Rect, StatHost, StaticLayout};
pub use value::{Decoration, format_value, parse_value};
pub use visibility::{ContainerVisibilityWatcher, ImmediateWatcher, IntersectionWatcher, Trigger};
