//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use grocery_storefront::config::AppState;
use grocery_storefront::frontend::{FrameReport, StorefrontApp};

/// Seconds between two simulated frames
const FRAME_STEP: f64 = 0.1;

/// App state that never touches the network
pub fn offline_state() -> AppState {
    let mut state = AppState::default();
    state.ui_preferences.load_remote_images = false;
    state
}

/// A context and an offline app bound to it
pub fn headless_app() -> (egui::Context, StorefrontApp) {
    let ctx = egui::Context::default();
    let app = StorefrontApp::with_context(&ctx, offline_state());
    (ctx, app)
}

/// Input for a window of the given logical size
pub fn raw_input(width: f32, height: f32) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(width, height),
        )),
        ..Default::default()
    }
}

/// Run one full egui pass and return the last report
pub fn run_frame(ctx: &egui::Context, app: &mut StorefrontApp, input: egui::RawInput) -> FrameReport {
    let mut report = FrameReport::default();
    let _ = ctx.run(input, |ctx| {
        report = app.show(ctx);
    });
    report
}

/// Drives the page frame by frame with real pointer and keyboard events
pub struct PageDriver {
    pub ctx: egui::Context,
    pub app: StorefrontApp,
    size: egui::Vec2,
    time: f64,
    /// Visible text of the last frame with its screen rect
    texts: Vec<(String, egui::Rect)>,
}

impl PageDriver {
    /// An offline page without entrance animations, so every widget is
    /// drawn at full opacity from the first frame
    pub fn new(width: f32, height: f32) -> Self {
        let ctx = egui::Context::default();
        let mut state = offline_state();
        state.ui_preferences.reduce_motion = true;
        let app = StorefrontApp::with_context(&ctx, state);

        let mut driver = Self {
            ctx,
            app,
            size: egui::vec2(width, height),
            time: 0.0,
            texts: Vec::new(),
        };
        // egui paints no top panel content on the very first pass
        driver.settle(2);
        driver
    }

    /// Run a frame with the given events
    pub fn frame(&mut self, events: Vec<egui::Event>) -> FrameReport {
        self.time += FRAME_STEP;
        let mut input = raw_input(self.size.x, self.size.y);
        input.time = Some(self.time);
        input.events = events;

        let mut report = FrameReport::default();
        let app = &mut self.app;
        let output = self.ctx.run(input, |ctx| {
            report = app.show(ctx);
        });

        self.texts.clear();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, clipped.clip_rect, &mut self.texts);
        }
        report
    }

    /// Run a frame without input
    pub fn step(&mut self) -> FrameReport {
        self.frame(Vec::new())
    }

    /// Run `n` idle frames, letting animations settle
    pub fn settle(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Rects of every visible text equal to `text`, top to bottom
    pub fn find_all(&self, text: &str) -> Vec<egui::Rect> {
        let mut rects: Vec<_> = self
            .texts
            .iter()
            .filter(|(t, _)| t == text)
            .map(|(_, rect)| *rect)
            .collect();
        rects.sort_by(|a, b| a.top().total_cmp(&b.top()));
        rects
    }

    /// Topmost visible text equal to `text`
    pub fn find(&self, text: &str) -> egui::Rect {
        self.find_all(text)
            .first()
            .copied()
            .unwrap_or_else(|| panic!("{:?} is not on screen", text))
    }

    /// Topmost visible text starting with `prefix`
    pub fn find_prefix(&self, prefix: &str) -> egui::Rect {
        self.texts
            .iter()
            .filter(|(t, _)| t.starts_with(prefix))
            .map(|(_, rect)| *rect)
            .min_by(|a, b| a.top().total_cmp(&b.top()))
            .unwrap_or_else(|| panic!("{:?}.. is not on screen", prefix))
    }

    /// Move, press and release the primary button at `pos`.
    /// Returns the report of the release frame.
    pub fn click_at(&mut self, pos: egui::Pos2) -> FrameReport {
        self.frame(vec![egui::Event::PointerMoved(pos)]);
        self.frame(vec![pointer_button(pos, true)]);
        self.frame(vec![pointer_button(pos, false)])
    }

    /// Click the middle of the topmost visible `text`
    pub fn click_text(&mut self, text: &str) -> FrameReport {
        let pos = self.find(text).center();
        self.click_at(pos)
    }

    /// Send typed text to whatever has keyboard focus
    pub fn type_text(&mut self, text: &str) -> FrameReport {
        self.frame(vec![egui::Event::Text(text.to_owned())])
    }
}

fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn collect_text(shape: &egui::Shape, clip: egui::Rect, out: &mut Vec<(String, egui::Rect)>) {
    match shape {
        egui::Shape::Text(text) => {
            let rect = shape.visual_bounding_rect();
            if clip.intersects(rect) {
                out.push((text.galley.text().to_owned(), rect));
            }
        }
        egui::Shape::Vec(shapes) => {
            for shape in shapes {
                collect_text(shape, clip, out);
            }
        }
        _ => {}
    }
}
