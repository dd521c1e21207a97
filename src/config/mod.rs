//! Settings and built-in tables

mod settings;
mod styles;


pub use self::settings::{
    AnimationSettings, CurveSettings, ExportSettings, Settings, DEFAULT_CONFIG_FILE, MODEL_SIZE_RANGE,
};
pub use self::styles::{map_style, map_style_keys, MapStyle, MapStyles};
