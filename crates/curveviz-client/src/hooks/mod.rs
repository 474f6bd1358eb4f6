mod use_animation_frame;
mod use_drag_listeners;
mod use_progress_sweep;
mod use_query_config;
mod use_window_resize;

pub use use_animation_frame::use_animation_frame;
pub use use_drag_listeners::use_drag_listeners;
pub use use_progress_sweep::{SweepHandle, use_progress_sweep};
pub use use_query_config::{QueryConfig, use_query_config};
pub use use_window_resize::use_window_resize;
