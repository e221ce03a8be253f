pub mod drift_render;

pub use drift_render::{
    render_drift_report, render_key_report, RenderOptions, DEFAULT_WIDTH, LABEL_WIDTH,
    VALUE_INDENT,
};
