//! Fixed screen layout
//!
//! Every pixel coordinate on the 160x128 landscape display lives here.
//! The gauge occupies the left half; step indicators sit top-right and
//! the two progress bars run along the bottom.

/// Display size (landscape)
pub const SCREEN_W: u16 = 160;
pub const SCREEN_H: u16 = 128;

// Speed gauge
pub const GAUGE_CX: i16 = 50;
pub const GAUGE_CY: i16 = 50;
/// Outer white ring radius
pub const GAUGE_RING_R: u16 = 40;
/// Inner face radius (background infill)
pub const GAUGE_FACE_R: u16 = 38;
/// Triangle masking the unused lower sweep gap: apex at the center,
/// base spanning below the dial
pub const GAUGE_MASK: [(i16, i16); 3] = [(50, 50), (0, 90), (100, 90)];
pub const GAUGE_LABEL_POS: (i16, i16) = (37, 76);

// Step indicators: 20x20 outlined frames with a 16x16 active region inset
pub const STEP_SIZE: u16 = 16;
pub const STEP_FRAME_SIZE: u16 = 20;
pub const STEP_LEFT_FRAME: (i16, i16) = (108, 30);
pub const STEP_LEFT_REGION: (i16, i16) = (110, 32);
pub const STEP_LEFT_LABEL_POS: (i16, i16) = (116, 26);
pub const STEP_RIGHT_FRAME: (i16, i16) = (132, 30);
pub const STEP_RIGHT_REGION: (i16, i16) = (134, 32);
pub const STEP_RIGHT_LABEL_POS: (i16, i16) = (140, 26);

// Progress bars: outlined 144x8 frames with a 140x4 fill region inset
pub const BAR_X: i16 = 10;
pub const BAR_W: u16 = 140;
pub const BAR_H: u16 = 4;
pub const BAR_FRAME_X: i16 = 8;
pub const BAR_FRAME_W: u16 = 144;
pub const BAR_FRAME_H: u16 = 8;
pub const LAP_BAR_Y: i16 = 90;
pub const LAP_BAR_FRAME_Y: i16 = 88;
pub const LAP_BAR_LABEL_POS: (i16, i16) = (12, 86);
pub const RACE_BAR_Y: i16 = 110;
pub const RACE_BAR_FRAME_Y: i16 = 108;
pub const RACE_BAR_LABEL_POS: (i16, i16) = (12, 106);
