use crate::view::View;

pub const SECTION_SELECTOR: &str = "section";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const ABOUT_SECTION_ID: &str = "about";

const VIEWPORT_BOTTOM_MARGIN: &str = "0px 0px -100px 0px";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    pub offset_px: f64,
    pub transition_secs: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub motion: Option<RevealMotion>,
    pub stagger_ms: u32,
    pub one_shot: bool,
}

impl RevealConfig {
    pub fn sections() -> Self {
        Self {
            threshold: 0.1,
            root_margin: VIEWPORT_BOTTOM_MARGIN,
            motion: Some(RevealMotion {
                offset_px: 50.0,
                transition_secs: 0.8,
            }),
            stagger_ms: 0,
            one_shot: false,
        }
    }

    pub fn project_cards(stagger_ms: u32) -> Self {
        Self {
            threshold: 0.1,
            root_margin: VIEWPORT_BOTTOM_MARGIN,
            motion: Some(RevealMotion {
                offset_px: 30.0,
                transition_secs: 0.6,
            }),
            stagger_ms,
            one_shot: false,
        }
    }

    pub fn about_trigger() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px",
            motion: None,
            stagger_ms: 0,
            one_shot: true,
        }
    }

    pub fn hide(&self, view: &impl View) {
        let Some(motion) = self.motion else {
            return;
        };
        let secs = motion.transition_secs;

        view.set_opacity(0.0);
        view.set_transform(&format!("translateY({}px)", motion.offset_px));
        view.set_style("transition", &format!("opacity {secs}s ease, transform {secs}s ease"));
    }

    pub fn stagger_schedule(&self, intersecting: &[bool]) -> Vec<(usize, u32)> {
        intersecting
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(index, _)| {
                let index_ms = u32::try_from(index).unwrap_or(u32::MAX);
                (index, index_ms.saturating_mul(self.stagger_ms))
            })
            .collect()
    }

    pub fn should_disconnect(&self, intersecting: &[bool]) -> bool {
        self.one_shot && intersecting.iter().any(|hit| *hit)
    }
}

pub fn reveal(view: &impl View) {
    view.set_opacity(1.0);
    view.set_transform("translateY(0)");
}

pub fn hide_body(body: &impl View) {
    body.set_opacity(0.0);
}

pub fn fade_in_body(body: &impl View) {
    body.set_style("transition", "opacity 0.5s ease");
    body.set_opacity(1.0);
}

/// `document.readyState` is `"complete"` once the `load` event has fired.
pub fn document_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}
