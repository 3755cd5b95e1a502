//! Dashboard controller
//!
//! Owns the displayed state (speed, lap/race progress, step levels) and
//! the active player slot. Telemetry application and rendering both go
//! through here, so there is exactly one writer of dashboard state.

use slipstream_protocol::{Player, TelemetryPacket};

use crate::bars::{LAP_BAR, RACE_BAR};
use crate::config::{LAPS, TRACK_LENGTH};
use crate::gauge::{SpeedGauge, SPEED_MAX};
use crate::layout::{
    BAR_FRAME_H, BAR_FRAME_W, BAR_FRAME_X, LAP_BAR_FRAME_Y, LAP_BAR_LABEL_POS, RACE_BAR_FRAME_Y,
    RACE_BAR_LABEL_POS, STEP_FRAME_SIZE, STEP_LEFT_FRAME, STEP_LEFT_LABEL_POS, STEP_RIGHT_FRAME,
    STEP_RIGHT_LABEL_POS,
};
use crate::palette;
use crate::steps::{set_step, StepSide};
use crate::traits::surface::DrawSurface;

/// Current-lap completion percentage for a cumulative distance.
pub fn lap_progress(distance: i16) -> f32 {
    distance.rem_euclid(TRACK_LENGTH) as f32 * 100.0 / TRACK_LENGTH as f32
}

/// Whole-race completion percentage for a cumulative distance.
pub fn race_progress(distance: i16) -> f32 {
    distance as f32 * 100.0 / (LAPS * TRACK_LENGTH) as f32
}

/// The single owner of displayed dashboard state
pub struct DashboardController {
    player: Player,
    gauge: SpeedGauge,
    speed: i16,
    lap_percent: f32,
    race_percent: f32,
    lap_index: i16,
    lap_rollover: bool,
    step_left: bool,
    step_right: bool,
    steps_dirty: bool,
}

impl DashboardController {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            gauge: SpeedGauge::new(),
            speed: 0,
            lap_percent: 0.0,
            race_percent: 0.0,
            lap_index: 0,
            lap_rollover: false,
            step_left: false,
            step_right: false,
            steps_dirty: false,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn speed(&self) -> i16 {
        self.speed
    }

    /// Apply a decoded telemetry sample.
    pub fn on_telemetry(&mut self, packet: TelemetryPacket) {
        self.speed = packet.speed;
        self.lap_percent = lap_progress(packet.distance);
        self.race_percent = race_progress(packet.distance);

        // Crossing into a new lap clears the lap bar before refilling
        let lap_index = packet.distance.div_euclid(TRACK_LENGTH);
        if lap_index != self.lap_index {
            self.lap_index = lap_index;
            self.lap_rollover = true;
        }
    }

    /// Drive the gauge directly (boot self-test sweep).
    pub fn set_speed(&mut self, speed: i16) {
        self.speed = speed;
    }

    /// Set a step indicator level.
    pub fn set_step(&mut self, side: StepSide, enabled: bool) {
        match side {
            StepSide::Left => self.step_left = enabled,
            StepSide::Right => self.step_right = enabled,
        }
        self.steps_dirty = true;
    }

    /// Full static repaint: background, dial, frames, and labels.
    pub fn draw_chrome<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_screen(palette::BACKGROUND)?;

        self.gauge.draw_dial(surface)?;

        let (x, y) = STEP_LEFT_FRAME;
        surface.draw_rect(x, y, STEP_FRAME_SIZE, STEP_FRAME_SIZE, palette::WHITE)?;
        let (x, y) = STEP_LEFT_LABEL_POS;
        surface.draw_text(x, y, "L", palette::WHITE)?;
        let (x, y) = STEP_RIGHT_FRAME;
        surface.draw_rect(x, y, STEP_FRAME_SIZE, STEP_FRAME_SIZE, palette::WHITE)?;
        let (x, y) = STEP_RIGHT_LABEL_POS;
        surface.draw_text(x, y, "R", palette::WHITE)?;

        surface.draw_rect(BAR_FRAME_X, LAP_BAR_FRAME_Y, BAR_FRAME_W, BAR_FRAME_H, palette::WHITE)?;
        let (x, y) = LAP_BAR_LABEL_POS;
        surface.draw_text(x, y, "LAP", palette::WHITE)?;
        surface.draw_rect(BAR_FRAME_X, RACE_BAR_FRAME_Y, BAR_FRAME_W, BAR_FRAME_H, palette::WHITE)?;
        let (x, y) = RACE_BAR_LABEL_POS;
        surface.draw_text(x, y, "RACE", palette::WHITE)?;

        Ok(())
    }

    /// Redraw the dynamic elements from current state.
    pub fn render<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let accent = palette::player_color(self.player);

        self.gauge.set_speed(surface, self.speed, accent)?;

        if self.lap_rollover {
            LAP_BAR.reset(surface)?;
            self.lap_rollover = false;
        }
        LAP_BAR.render(surface, self.lap_percent, accent)?;
        RACE_BAR.render(surface, self.race_percent, accent)?;

        if self.steps_dirty {
            set_step(surface, StepSide::Left, self.step_left)?;
            set_step(surface, StepSide::Right, self.step_right)?;
            self.steps_dirty = false;
        }

        Ok(())
    }
}

/// Boot self-test sweep: 0 → 250 → 0, one gauge step at a time
#[derive(Debug, Clone)]
pub struct DemoSweep {
    speed: i16,
    delta: i16,
}

impl Default for DemoSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSweep {
    /// Steps for one full up-and-down pass
    pub const CYCLE_STEPS: usize = 2 * SPEED_MAX as usize;

    pub const fn new() -> Self {
        Self { speed: 0, delta: 1 }
    }

    /// Advance the sweep and return the next speed.
    pub fn step(&mut self) -> i16 {
        self.speed += self.delta;
        if self.speed >= SPEED_MAX {
            self.delta = -1;
        }
        if self.speed <= 0 {
            self.delta = 1;
        }
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::fill_width;
    use crate::layout::{BAR_H, BAR_W, BAR_X, LAP_BAR_Y};
    use crate::testutil::{Op, TraceSurface};

    fn packet(speed: i16, distance: i16) -> TelemetryPacket {
        TelemetryPacket { speed, distance }
    }

    #[test]
    fn test_progress_derivation() {
        assert_eq!(lap_progress(0), 0.0);
        assert_eq!(lap_progress(150), 50.0);
        // Exactly one track length wraps to the start of the next lap
        assert_eq!(lap_progress(300), 0.0);
        assert_eq!(race_progress(900), 100.0);

        let third = race_progress(300);
        assert!(third > 33.32 && third < 33.34, "got {third}");
    }

    #[test]
    fn test_telemetry_updates_state() {
        let mut dash = DashboardController::new(Player::new(1));
        dash.on_telemetry(packet(10, 300));

        assert_eq!(dash.speed(), 10);
        assert_eq!(dash.lap_percent, 0.0);
        assert!(dash.race_percent > 33.32 && dash.race_percent < 33.34);
    }

    #[test]
    fn test_lap_rollover_resets_lap_bar() {
        let mut dash = DashboardController::new(Player::new(2));
        let mut surface = TraceSurface::new();

        dash.on_telemetry(packet(100, 290));
        dash.render(&mut surface).unwrap();

        dash.on_telemetry(packet(100, 310));
        surface.ops.clear();
        dash.render(&mut surface).unwrap();

        // The reset fill covers the whole bar region in background
        assert!(surface.ops.iter().any(|op| matches!(
            op,
            Op::FillRect { x: BAR_X, y: LAP_BAR_Y, w: BAR_W, h: BAR_H, color }
                if *color == palette::BACKGROUND
        )));

        // A second render without a lap change does not reset again
        surface.ops.clear();
        dash.render(&mut surface).unwrap();
        assert!(!surface.ops.iter().any(|op| matches!(
            op,
            Op::FillRect { w: BAR_W, color, .. } if *color == palette::BACKGROUND
        )));
    }

    #[test]
    fn test_render_uses_player_accent() {
        let mut dash = DashboardController::new(Player::new(3));
        let mut surface = TraceSurface::new();

        dash.on_telemetry(packet(42, 150));
        dash.render(&mut surface).unwrap();

        let accent = palette::player_color(Player::new(3));
        let lap_width = fill_width(50.0);
        assert!(surface.ops.iter().any(|op| matches!(
            op,
            Op::FillRect { y: LAP_BAR_Y, w, color, .. }
                if *w == lap_width && *color == accent
        )));
        assert!(surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Line { color, .. } if *color == accent)));
    }

    #[test]
    fn test_steps_drawn_only_when_changed() {
        let mut dash = DashboardController::new(Player::new(1));
        let mut surface = TraceSurface::new();

        dash.render(&mut surface).unwrap();
        let step_region = crate::layout::STEP_LEFT_REGION;
        assert!(!surface.ops.iter().any(
            |op| matches!(op, Op::FillRect { x, y, .. } if (*x, *y) == step_region)
        ));

        dash.set_step(StepSide::Left, true);
        surface.ops.clear();
        dash.render(&mut surface).unwrap();
        assert!(surface.ops.iter().any(|op| matches!(
            op,
            Op::FillRect { x, y, color, .. }
                if (*x, *y) == step_region && *color == palette::STEP_LEFT
        )));
    }

    #[test]
    fn test_demo_sweep_full_cycle() {
        let mut sweep = DemoSweep::new();
        let mut peak = 0;
        let mut last = 0;
        for _ in 0..DemoSweep::CYCLE_STEPS {
            last = sweep.step();
            peak = peak.max(last);
        }
        assert_eq!(peak, SPEED_MAX);
        assert_eq!(last, 0);
    }
}
