use crate::config::InteractionConfig;
use crate::view::View;

pub const INTERACTIVE_SELECTOR: &str = "a, button, .btn, .btn-show-more";
pub const HOVER_BORDER_COLOR: &str = "var(--secondary)";
pub const IDLE_BORDER_COLOR: &str = "var(--primary)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorStyle {
    pub transform: String,
    pub border_color: &'static str,
}

impl CursorStyle {
    pub fn apply(&self, view: &impl View) {
        view.set_transform(&self.transform);
        view.set_style("border-color", self.border_color);
    }
}

#[derive(Clone, Debug)]
pub struct InteractionContext {
    pointer: Point,
    follower: Point,
    scroll_offset: f64,
    hovering: bool,
    smoothing: f64,
    cursor_half_size: f64,
    follower_half_size: f64,
    hover_scale: f64,
}

impl InteractionContext {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            pointer: Point::default(),
            follower: Point::default(),
            scroll_offset: 0.0,
            hovering: false,
            smoothing: config.follower_smoothing,
            cursor_half_size: config.cursor_half_size,
            follower_half_size: config.follower_half_size,
            hover_scale: config.hover_scale,
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn follower(&self) -> Point {
        self.follower
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn record_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn track_pointer(&mut self, x: f64, y: f64) -> String {
        self.pointer = Point::new(x, y);
        self.cursor_transform()
    }

    pub fn step_follower(&mut self) -> String {
        self.follower.x += (self.pointer.x - self.follower.x) * self.smoothing;
        self.follower.y += (self.pointer.y - self.follower.y) * self.smoothing;

        translate(self.follower, self.follower_half_size)
    }

    pub fn enter_interactive(&mut self) -> CursorStyle {
        self.hovering = true;
        CursorStyle {
            transform: self.cursor_transform(),
            border_color: HOVER_BORDER_COLOR,
        }
    }

    pub fn leave_interactive(&mut self) -> CursorStyle {
        self.hovering = false;
        CursorStyle {
            transform: self.cursor_transform(),
            border_color: IDLE_BORDER_COLOR,
        }
    }

    fn cursor_transform(&self) -> String {
        let position = translate(self.pointer, self.cursor_half_size);
        let scale = if self.hovering { self.hover_scale } else { 1.0 };
        format!("{position} scale({scale})")
    }
}

/// Records a pointer move and repositions the tracker when the page has one.
/// The follower reads the recorded pointer either way.
pub fn pointer_moved(
    ctx: &mut InteractionContext,
    tracker: Option<&impl View>,
    x: f64,
    y: f64,
) {
    let transform = ctx.track_pointer(x, y);
    if let Some(tracker) = tracker {
        tracker.set_transform(&transform);
    }
}

fn translate(center: Point, half_size: f64) -> String {
    format!(
        "translate({}px, {}px)",
        center.x - half_size,
        center.y - half_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::RecordingView;
    use proptest::prelude::*;

    fn distance(a: Point, b: Point) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }

    fn context() -> InteractionContext {
        InteractionContext::new(&InteractionConfig::default())
    }

    #[test]
    fn tracker_is_centered_on_the_pointer() {
        let mut ctx = context();
        assert_eq!(ctx.track_pointer(110.0, 60.0), "translate(100px, 50px) scale(1)");
    }

    #[test]
    fn follower_moves_a_tenth_of_the_way_each_frame() {
        let mut ctx = context();
        ctx.track_pointer(100.0, 200.0);

        assert_eq!(ctx.step_follower(), "translate(-10px, 0px)");
        assert_eq!(ctx.follower(), Point::new(10.0, 20.0));

        ctx.step_follower();
        assert!((ctx.follower().x - 19.0).abs() < 1e-9);
        assert!((ctx.follower().y - 38.0).abs() < 1e-9);
    }

    #[test]
    fn hover_scales_and_recolors_then_restores() {
        let mut ctx = context();
        let cursor = RecordingView::default();
        ctx.track_pointer(50.0, 50.0);

        ctx.enter_interactive().apply(&cursor);
        assert_eq!(
            cursor.style("transform").as_deref(),
            Some("translate(40px, 40px) scale(1.5)")
        );
        assert_eq!(cursor.style("border-color").as_deref(), Some(HOVER_BORDER_COLOR));

        ctx.leave_interactive().apply(&cursor);
        assert_eq!(
            cursor.style("transform").as_deref(),
            Some("translate(40px, 40px) scale(1)")
        );
        assert_eq!(cursor.style("border-color").as_deref(), Some(IDLE_BORDER_COLOR));
    }

    #[test]
    fn moving_while_hovering_keeps_the_scale() {
        let mut ctx = context();
        ctx.enter_interactive();
        assert_eq!(ctx.track_pointer(20.0, 30.0), "translate(10px, 20px) scale(1.5)");
    }

    #[test]
    fn follower_chases_the_pointer_without_a_tracker() {
        let mut ctx = context();
        pointer_moved(&mut ctx, None::<&RecordingView>, 100.0, 0.0);

        assert_eq!(ctx.step_follower(), "translate(-10px, -20px)");
        assert_eq!(ctx.follower(), Point::new(10.0, 0.0));
    }

    #[test]
    fn pointer_move_repositions_a_present_tracker() {
        let mut ctx = context();
        let tracker = RecordingView::default();
        pointer_moved(&mut ctx, Some(&tracker), 30.0, 40.0);
        assert_eq!(
            tracker.style("transform").as_deref(),
            Some("translate(20px, 30px) scale(1)")
        );
    }

    #[test]
    fn scroll_offset_is_recorded() {
        let mut ctx = context();
        ctx.record_scroll(420.0);
        assert_eq!(ctx.scroll_offset(), 420.0);
    }

    proptest! {
        #[test]
        fn follower_distance_decays_geometrically(
            px in -2_000.0f64..2_000.0,
            py in -2_000.0f64..2_000.0,
            frames in 0usize..120,
        ) {
            let mut ctx = context();
            ctx.track_pointer(px, py);
            let initial = distance(ctx.follower(), ctx.pointer());

            for _ in 0..frames {
                ctx.step_follower();
            }

            let expected = initial * 0.9f64.powi(frames as i32);
            let actual = distance(ctx.follower(), ctx.pointer());
            prop_assert!((actual - expected).abs() <= 1e-6 * (1.0 + initial));
        }

        #[test]
        fn follower_never_overshoots(
            px in -2_000.0f64..2_000.0,
            frames in 1usize..200,
        ) {
            let mut ctx = context();
            ctx.track_pointer(px, 0.0);
            for _ in 0..frames {
                ctx.step_follower();
                let follower = ctx.follower().x;
                if px >= 0.0 {
                    prop_assert!(follower <= px && follower >= 0.0);
                } else {
                    prop_assert!(follower >= px && follower <= 0.0);
                }
            }
        }
    }
}
