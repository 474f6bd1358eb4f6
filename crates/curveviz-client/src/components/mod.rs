//! UI components for the curve visualizer.

mod hero_background;
mod path_visualizer;

pub use hero_background::HeroBackground;
pub use path_visualizer::PathVisualizer;
