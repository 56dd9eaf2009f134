// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "carplot/0.3";
pub const NET_TIMEOUT_SECS: u64 = 15;

// Filter: listings at or below this price are placeholders/wrecks
// and would squash the price axis.
pub const PRICE_FLOOR: u32 = 8000;

// Age → color gradient. Hue is fixed; saturation and lightness run
// from the "young" endpoint (bold, dark) to the "old" one (faded).
pub const POINT_HUE: f32 = 234.0;
pub const SAT_YOUNG: f32 = 100.0;
pub const SAT_OLD: f32 = 79.0;
pub const LIGHT_YOUNG: f32 = 33.0;
pub const LIGHT_OLD: f32 = 80.0;

// Chart
pub const AXIS_PAD_LOW: f64 = 0.8; // axis min = observed min * this
pub const AXIS_PAD_HIGH: f64 = 1.1; // axis max = observed max * this
pub const POINT_RADIUS: f32 = 5.0;
pub const POINT_RADIUS_HOVER: f32 = 7.0;
pub const HIT_RADIUS_PX: f32 = 8.0;
