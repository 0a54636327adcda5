//! 2D canvas presentation adapter
//!
//! Draws the engine snapshot each frame: clear, center net, both paddles,
//! the ball, and the score. All coordinates are arena units; the canvas
//! backing store is sized to match, so no transform is needed here.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::Snapshot;

/// Net dash geometry (units)
const NET_DASH_HEIGHT: f64 = 15.0;
const NET_DASH_SPACING: f64 = 30.0;
const NET_WIDTH: f64 = 2.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Draw the score above the net
    pub show_score: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            show_score: true,
        })
    }

    /// Render one frame from an engine snapshot.
    pub fn render(&self, snap: &Snapshot) {
        let w = snap.arena.width as f64;
        let h = snap.arena.height as f64;
        let paddle_w = snap.paddle_width as f64;
        let paddle_h = snap.paddle_height as f64;
        let ball = snap.ball_size as f64;

        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str("#fff");

        // Center net
        let mut y = 10.0;
        while y < h {
            self.ctx
                .fill_rect(w / 2.0 - NET_WIDTH / 2.0, y, NET_WIDTH, NET_DASH_HEIGHT);
            y += NET_DASH_SPACING;
        }

        // Paddles
        self.ctx
            .fill_rect(0.0, snap.player_y as f64, paddle_w, paddle_h);
        self.ctx
            .fill_rect(w - paddle_w, snap.opponent_y as f64, paddle_w, paddle_h);

        // Ball
        self.ctx.fill_rect(
            snap.ball_pos.x as f64,
            snap.ball_pos.y as f64,
            ball,
            ball,
        );

        if self.show_score {
            self.ctx.set_font("32px Arial");
            let _ = self
                .ctx
                .fill_text(&snap.player_score.to_string(), w / 2.0 - 50.0, 40.0);
            let _ = self
                .ctx
                .fill_text(&snap.opponent_score.to_string(), w / 2.0 + 30.0, 40.0);
        }
    }
}
