//! linkdeck-renderer - derived visual output
//!
//! Everything downstream of the editable state: animation resolution, link
//! icon classification, projection of profile + links + appearance into a
//! render model of CSS-equivalent values, and the static HTML preview
//! writer.

pub mod animation;
pub mod html;
pub mod icons;
pub mod projector;

pub use animation::{resolve, KeyframeAnimation, RenderAnimation, FILL_MODE};
pub use html::{escape_html, render_page};
pub use icons::{classify, IconCategory};
pub use projector::{
    background_css, project, project_preview, LinkRender, ProfileRender, RenderModel,
    GRID_COLUMNS, INACTIVE_OPACITY,
};
