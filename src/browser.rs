use crate::log::{LogLevel, Logger};
use crate::rain::{RainConfig, RainEngine, RainSurface, RandomSource, Tick};
use crate::theme::{StoreError, ThemeStore};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Reflect;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Storage};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }

    Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn local_storage() -> Result<Storage, StoreError> {
    window()
        .ok_or(StoreError::Unavailable)?
        .local_storage()
        .map_err(|error| StoreError::Rejected(describe_js_error(&error)))?
        .ok_or(StoreError::Unavailable)
}

/// `window.localStorage`, looked up on every call so a revoked store is noticed.
pub struct LocalStore;

impl ThemeStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|error| StoreError::Rejected(describe_js_error(&error)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|error| StoreError::Rejected(describe_js_error(&error)))
    }
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl RainSurface for CanvasSurface {
    fn set_fill_style(&mut self, style: &str) {
        self.context.set_fill_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        self.context.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
        self.context
            .fill_text(text, x, y)
            .map_err(|error| describe_js_error(&error))
    }
}

pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn acquire_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

struct RainDriver {
    engine: RainEngine,
    surface: CanvasSurface,
    random: JsRandom,
    canvas: HtmlCanvasElement,
    pending: Option<AnimationFrame>,
    logger: Logger,
}

impl RainDriver {
    fn draw(&mut self) -> Tick {
        let tick = self.engine.frame(&mut self.surface, &mut self.random);

        if let Some(error) = self.engine.take_draw_error() {
            self.logger.event(
                LogLevel::Debug,
                "rain_draw_failed",
                json!({ "error": error }),
            );
        }

        tick
    }
}

fn schedule_frame(driver: &Rc<RefCell<RainDriver>>) {
    let weak = Rc::downgrade(driver);
    let frame = request_animation_frame(move |_timestamp| {
        let Some(driver) = weak.upgrade() else {
            return;
        };

        let tick = driver.borrow_mut().draw();
        if tick == Tick::Continue {
            schedule_frame(&driver);
        }
    });

    driver.borrow_mut().pending = Some(frame);
}

/// A running rain animation bound to one canvas. Dropping it tears it down.
pub struct RainHandle {
    driver: Rc<RefCell<RainDriver>>,
    resize: Option<EventListener>,
    logger: Logger,
}

impl RainHandle {
    /// Starts the animation, or returns `None` when no 2D context is available.
    pub fn mount(canvas: HtmlCanvasElement, config: RainConfig, logger: Logger) -> Option<Self> {
        let Some(win) = window() else {
            logger.event(
                LogLevel::Debug,
                "rain_surface_unavailable",
                json!({ "reason": "no window" }),
            );
            return None;
        };

        let Some(context) = acquire_context(&canvas) else {
            logger.event(
                LogLevel::Debug,
                "rain_surface_unavailable",
                json!({ "reason": "2d context unavailable" }),
            );
            return None;
        };

        let (width, height) = viewport_size();
        size_canvas(&canvas, width, height);
        let engine = RainEngine::new(config, width, height);

        logger.event(
            LogLevel::Info,
            "rain_mounted",
            json!({
                "columns": engine.state().column_count(),
                "width": width,
                "height": height,
            }),
        );

        let driver = Rc::new(RefCell::new(RainDriver {
            engine,
            surface: CanvasSurface { context },
            random: JsRandom,
            canvas,
            pending: None,
            logger,
        }));

        let resize = {
            let driver = Rc::downgrade(&driver);
            EventListener::new(&win, "resize", move |_event| {
                let Some(driver) = driver.upgrade() else {
                    return;
                };

                let (width, height) = viewport_size();
                let mut driver = driver.borrow_mut();
                size_canvas(&driver.canvas, width, height);
                driver.engine.resize(width, height);

                logger.event(
                    LogLevel::Debug,
                    "rain_resized",
                    json!({
                        "columns": driver.engine.state().column_count(),
                        "width": width,
                        "height": height,
                    }),
                );
            })
        };

        // Paint at mount; the refresh loop takes over from the next frame.
        let first = driver.borrow_mut().draw();
        if first == Tick::Continue {
            schedule_frame(&driver);
        }

        Some(Self {
            driver,
            resize: Some(resize),
            logger,
        })
    }

    /// Cancels the pending frame and removes the resize listener. Safe to repeat.
    pub fn teardown(&mut self) {
        self.resize.take();

        let mut driver = self.driver.borrow_mut();
        driver.pending.take();

        if driver.engine.teardown() {
            self.logger.event(
                LogLevel::Info,
                "rain_stopped",
                json!({ "frames": driver.engine.frames_drawn() }),
            );
        }
    }
}

impl Drop for RainHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}
