//! Reading room parameters and writing estimates and drawings.

pub mod json;
pub mod svg;

pub use json::{
    bundle_to_string, params_from_str, read_params, read_render_config, write_bundle,
    write_params,
};
pub use svg::write_svg;
