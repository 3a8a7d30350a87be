//! Falling-glyph rain: per-column state, per-frame update and engine lifecycle.
//!
//! Nothing here touches the browser. Drawing goes through [`RainSurface`] and
//! randomness through [`RandomSource`], so the browser glue supplies a canvas
//! and `Math.random` while tests supply recorders.

pub const DEFAULT_CELL_SIZE: f64 = 16.0;
/// Chance per frame that a column which has left the viewport restarts at the top.
pub const RESET_PROBABILITY: f64 = 0.025;
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.08)";
pub const GLYPH_FILL: &str = "#00ff41";
pub const GLYPH_ALPHABET: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズヅブプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポ0123456789ABCDEFGabcdefg";

/// The drawing operations the rain needs from a 2D surface.
pub trait RainSurface {
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String>;
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainConfig {
    pub cell_size: f64,
    pub reset_probability: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            reset_probability: RESET_PROBABILITY,
        }
    }
}

impl RainConfig {
    pub fn font(&self) -> String {
        format!("{}px monospace", self.cell_size)
    }

    pub fn column_count(&self, width: f64) -> usize {
        if self.cell_size <= 0.0 {
            return 0;
        }

        // NaN and negative widths saturate to zero columns.
        (width / self.cell_size).floor() as usize
    }
}

/// Viewport dimensions plus the next row to draw in each column.
#[derive(Clone, Debug, PartialEq)]
pub struct RainState {
    width: f64,
    height: f64,
    drops: Vec<u32>,
}

impl RainState {
    pub fn new(config: &RainConfig, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drops: vec![1; config.column_count(width)],
        }
    }

    pub fn column_count(&self) -> usize {
        self.drops.len()
    }

    #[cfg(test)]
    fn drops(&self) -> &[u32] {
        &self.drops
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Stopped,
}

pub struct RainEngine {
    config: RainConfig,
    glyphs: Vec<char>,
    font: String,
    state: RainState,
    phase: Phase,
    frames: u64,
    draw_error: Option<String>,
    draw_error_taken: bool,
}

impl RainEngine {
    pub fn new(config: RainConfig, width: f64, height: f64) -> Self {
        Self {
            glyphs: GLYPH_ALPHABET.chars().collect(),
            font: config.font(),
            state: RainState::new(&config, width, height),
            config,
            phase: Phase::Running,
            frames: 0,
            draw_error: None,
            draw_error_taken: false,
        }
    }

    pub fn state(&self) -> &RainState {
        &self.state
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// The first glyph draw failure, handed out once for the engine's lifetime.
    pub fn take_draw_error(&mut self) -> Option<String> {
        let error = self.draw_error.take();
        if error.is_some() {
            self.draw_error_taken = true;
        }
        error
    }

    /// Replaces the whole state; old column progress is not carried over.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state = RainState::new(&self.config, width, height);
    }

    /// Draws one frame. Returns [`Tick::Halted`] without drawing once torn down.
    pub fn frame<S, R>(&mut self, surface: &mut S, random: &mut R) -> Tick
    where
        S: RainSurface + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.phase == Phase::Stopped {
            return Tick::Halted;
        }

        let cell = self.config.cell_size;
        let RainState {
            width,
            height,
            drops,
        } = &mut self.state;

        surface.set_fill_style(TRAIL_FILL);
        surface.fill_rect(0.0, 0.0, *width, *height);

        surface.set_fill_style(GLYPH_FILL);
        surface.set_font(&self.font);

        let mut glyph_buf = [0u8; 4];
        for (index, row) in drops.iter_mut().enumerate() {
            let glyph = pick_glyph(&self.glyphs, random);
            let x = index as f64 * cell;
            let y = f64::from(*row) * cell;

            if let Err(error) = surface.fill_text(glyph.encode_utf8(&mut glyph_buf), x, y) {
                if !self.draw_error_taken && self.draw_error.is_none() {
                    self.draw_error = Some(error);
                }
            }

            if y > *height && random.next_unit() < self.config.reset_probability {
                *row = 0;
            }
            *row = row.saturating_add(1);
        }

        self.frames += 1;
        Tick::Continue
    }

    /// Stops the engine. Returns whether it was still running; later calls are no-ops.
    pub fn teardown(&mut self) -> bool {
        let was_running = self.phase == Phase::Running;
        self.phase = Phase::Stopped;
        was_running
    }
}

fn pick_glyph<R>(glyphs: &[char], random: &mut R) -> char
where
    R: RandomSource + ?Sized,
{
    if glyphs.is_empty() {
        return ' ';
    }

    let sample = random.next_unit().clamp(0.0, 1.0);
    let index = ((sample * glyphs.len() as f64) as usize).min(glyphs.len() - 1);
    glyphs[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(String, f64, f64, f64, f64)>,
        texts: Vec<(String, String, f64, f64)>,
        fill: String,
        font: String,
    }

    impl RainSurface for RecordingSurface {
        fn set_fill_style(&mut self, style: &str) {
            self.fill = style.to_string();
        }

        fn set_font(&mut self, font: &str) {
            self.font = font.to_string();
        }

        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.rects.push((self.fill.clone(), x, y, width, height));
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
            self.texts.push((text.to_string(), self.fill.clone(), x, y));
            Ok(())
        }
    }

    /// Accepts fills but rejects every glyph.
    #[derive(Default)]
    struct RejectingSurface {
        attempts: usize,
    }

    impl RainSurface for RejectingSurface {
        fn set_fill_style(&mut self, _style: &str) {}

        fn set_font(&mut self, _font: &str) {}

        fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}

        fn fill_text(&mut self, text: &str, _x: f64, _y: f64) -> Result<(), String> {
            self.attempts += 1;
            Err(format!("InvalidStateError drawing {text}"))
        }
    }

    /// Repeats a fixed value, so every reset draw either always or never fires.
    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    struct Scripted {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Scripted {
        fn new(values: Vec<f64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    fn engine(width: f64, height: f64) -> RainEngine {
        RainEngine::new(RainConfig::default(), width, height)
    }

    #[test]
    fn column_count_tracks_viewport_width() {
        for width in [0.0, 15.9, 16.0, 31.0, 320.0, 1000.0, 1600.0, 1921.5] {
            let engine = engine(width, 600.0);
            let expected = (width / DEFAULT_CELL_SIZE).floor() as usize;

            assert_eq!(engine.state().column_count(), expected, "width {width}");
            assert!(engine.state().drops().iter().all(|row| *row == 1));
        }
    }

    #[test]
    fn degenerate_widths_produce_no_columns() {
        assert_eq!(engine(-40.0, 600.0).state().column_count(), 0);
        assert_eq!(engine(f64::NAN, 600.0).state().column_count(), 0);

        let zero_cell = RainConfig {
            cell_size: 0.0,
            ..RainConfig::default()
        };
        assert_eq!(zero_cell.column_count(800.0), 0);
    }

    #[test]
    fn frame_paints_trail_then_one_glyph_per_column() {
        let mut engine = engine(64.0, 480.0);
        let mut surface = RecordingSurface::default();

        assert_eq!(engine.frame(&mut surface, &mut Constant(0.0)), Tick::Continue);

        assert_eq!(surface.rects, vec![(TRAIL_FILL.to_string(), 0.0, 0.0, 64.0, 480.0)]);
        assert_eq!(surface.font, "16px monospace");
        assert_eq!(surface.texts.len(), 4);

        for (index, (glyph, fill, x, y)) in surface.texts.iter().enumerate() {
            assert_eq!(glyph, "ア");
            assert_eq!(fill, GLYPH_FILL);
            assert_eq!(*x, index as f64 * DEFAULT_CELL_SIZE);
            assert_eq!(*y, DEFAULT_CELL_SIZE);
        }
    }

    #[test]
    fn glyphs_come_from_the_alphabet() {
        let mut engine = engine(160.0, 480.0);
        let mut surface = RecordingSurface::default();
        let mut random = Scripted::new(vec![0.0, 0.31, 0.5, 0.77, 0.999_999]);

        for _ in 0..10 {
            engine.frame(&mut surface, &mut random);
        }

        let last = GLYPH_ALPHABET.chars().last().expect("non-empty alphabet");
        assert!(surface.texts.iter().any(|(glyph, ..)| glyph == &last.to_string()));
        for (glyph, ..) in &surface.texts {
            assert!(GLYPH_ALPHABET.contains(glyph.as_str()), "unexpected glyph {glyph}");
        }
    }

    #[test]
    fn columns_advance_by_one_each_frame_while_on_screen() {
        let mut engine = engine(48.0, 160.0);
        let mut surface = RecordingSurface::default();

        for frame in 1..=10u32 {
            let before = engine.state().drops().to_vec();
            engine.frame(&mut surface, &mut Constant(0.0));

            assert_eq!(engine.state().drops().len(), before.len());
            for (old, new) in before.iter().zip(engine.state().drops()) {
                assert_eq!(*new, old + 1);
            }
            assert!(engine.state().drops().iter().all(|row| *row == frame + 1));
        }
    }

    #[test]
    fn offscreen_column_resets_to_zero_then_increments() {
        // 2 rows fit; the drop drawn at row 3 is past the bottom.
        let mut engine = engine(16.0, 32.0);
        let mut surface = RecordingSurface::default();
        let mut always_reset = Constant(0.0);

        engine.frame(&mut surface, &mut always_reset);
        engine.frame(&mut surface, &mut always_reset);
        assert_eq!(engine.state().drops(), &[3]);

        engine.frame(&mut surface, &mut always_reset);
        assert_eq!(engine.state().drops(), &[1]);
        assert_eq!(surface.texts.last().map(|text| text.3), Some(48.0));
    }

    #[test]
    fn offscreen_column_keeps_falling_when_reset_draw_misses() {
        let mut engine = engine(16.0, 32.0);
        let mut surface = RecordingSurface::default();
        let mut never_reset = Constant(0.5);

        for _ in 0..20 {
            engine.frame(&mut surface, &mut never_reset);
        }

        assert_eq!(engine.state().drops(), &[21]);
    }

    #[test]
    fn resets_are_independent_per_column() {
        let mut engine = engine(32.0, 16.0);
        let mut surface = RecordingSurface::default();

        // Frame 1 draws row 1 (y = 16), not past the bottom: one glyph draw per column.
        engine.frame(&mut surface, &mut Constant(0.9));
        // Frame 2 at row 2 is past the bottom: glyph, reset, glyph, reset.
        let mut random = Scripted::new(vec![0.1, 0.01, 0.1, 0.5]);
        engine.frame(&mut surface, &mut random);

        assert_eq!(engine.state().drops(), &[1, 3]);
    }

    #[test]
    fn reset_value_is_never_mid_range() {
        let mut engine = engine(160.0, 64.0);
        let mut surface = RecordingSurface::default();
        let mut random = Scripted::new(vec![0.2, 0.02, 0.7, 0.9, 0.024, 0.4, 0.6]);

        for _ in 0..200 {
            let before = engine.state().drops().to_vec();
            engine.frame(&mut surface, &mut random);

            for (old, new) in before.iter().zip(engine.state().drops()) {
                let was_offscreen = f64::from(*old) * DEFAULT_CELL_SIZE > 64.0;
                if *new != old + 1 {
                    assert!(was_offscreen, "reset while on screen");
                    assert_eq!(*new, 1, "reset must land on 0 before the increment");
                }
            }
        }
    }

    #[test]
    fn resize_replaces_state_with_fresh_columns() {
        let mut engine = engine(1600.0, 900.0);
        let mut surface = RecordingSurface::default();
        assert_eq!(engine.state().column_count(), 100);

        for _ in 0..5 {
            engine.frame(&mut surface, &mut Constant(0.0));
        }

        engine.resize(320.0, 480.0);

        assert_eq!(engine.state().column_count(), 20);
        assert!(engine.state().drops().iter().all(|row| *row == 1));

        surface.texts.clear();
        engine.frame(&mut surface, &mut Constant(0.0));
        assert_eq!(surface.texts.len(), 20);
        assert_eq!(surface.rects.last().map(|rect| (rect.3, rect.4)), Some((320.0, 480.0)));
    }

    #[test]
    fn resize_storm_leaves_consistent_state() {
        let mut engine = engine(800.0, 600.0);
        let mut surface = RecordingSurface::default();

        for step in 0..50u32 {
            let width = 100.0 + f64::from(step) * 37.0;
            engine.resize(width, 400.0);
            assert_eq!(engine.state().column_count(), (width / 16.0).floor() as usize);

            if step % 3 == 0 {
                engine.frame(&mut surface, &mut Constant(0.0));
            }
        }
    }

    #[test]
    fn teardown_is_idempotent_and_stops_frames() {
        let mut engine = engine(320.0, 240.0);
        let mut surface = RecordingSurface::default();

        engine.frame(&mut surface, &mut Constant(0.0));
        engine.frame(&mut surface, &mut Constant(0.0));
        assert_eq!(engine.frames_drawn(), 2);

        assert!(engine.teardown());
        assert!(!engine.teardown());

        let drawn = surface.texts.len();
        assert_eq!(engine.frame(&mut surface, &mut Constant(0.0)), Tick::Halted);
        assert_eq!(engine.frames_drawn(), 2);
        assert_eq!(surface.texts.len(), drawn);
    }

    #[test]
    fn custom_cell_size_changes_grid_and_font() {
        let config = RainConfig {
            cell_size: 20.0,
            reset_probability: 1.0,
        };
        let mut engine = RainEngine::new(config, 200.0, 10.0);
        let mut surface = RecordingSurface::default();

        assert_eq!(engine.state().column_count(), 10);
        engine.frame(&mut surface, &mut Constant(0.99));

        assert_eq!(surface.font, "20px monospace");
        assert!(engine.state().drops().iter().all(|row| *row == 1));
    }

    #[test]
    fn fresh_engine_paints_row_one_on_its_first_frame() {
        let mut engine = engine(48.0, 480.0);
        let mut surface = RecordingSurface::default();

        assert_eq!(engine.frames_drawn(), 0);
        assert_eq!(engine.frame(&mut surface, &mut Constant(0.0)), Tick::Continue);

        assert_eq!(engine.frames_drawn(), 1);
        assert_eq!(surface.rects.len(), 1);
        assert!(surface.texts.iter().all(|text| text.3 == DEFAULT_CELL_SIZE));
    }

    #[test]
    fn first_glyph_failure_is_reported_once() {
        let mut engine = engine(64.0, 480.0);
        let mut surface = RejectingSurface::default();

        assert_eq!(engine.take_draw_error(), None);
        assert_eq!(engine.frame(&mut surface, &mut Constant(0.0)), Tick::Continue);
        assert_eq!(surface.attempts, 4);
        assert_eq!(engine.take_draw_error().as_deref(), Some("InvalidStateError drawing ア"));

        engine.frame(&mut surface, &mut Constant(0.0));
        assert_eq!(engine.take_draw_error(), None);
        assert_eq!(engine.state().drops(), &[3, 3, 3, 3]);
    }
}
