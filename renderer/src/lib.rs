pub mod block;
pub mod config;
pub mod context;
pub mod driver;
pub mod entity;
pub mod error;
pub mod list;
pub mod markup;
pub mod runs;
pub mod sections;
pub mod style_index;

pub use config::{HashtagConfig, RenderOptions};
pub use context::RenderContext;
pub use driver::{render, render_html};
pub use entity::EntityTransform;
pub use error::RenderError;
