use crate::view::View;

pub const BACKGROUND_SELECTOR: &str = ".bg-gradient";
pub const NAV_SELECTOR: &str = "nav";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const TRACKED_SECTION_SELECTOR: &str = "section[id]";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";

pub const ACTIVE_LINK_COLOR: &str = "var(--primary)";
pub const SKILL_TAG_GLOW: &str = "0 0 20px rgba(0, 255, 136, 0.3)";

const NAV_TRANSLUCENT_BACKGROUND: &str = "rgba(10, 10, 10, 0.8)";
const NAV_OPAQUE_BACKGROUND: &str = "rgba(10, 10, 10, 0.95)";
const NAV_OPAQUE_SHADOW: &str = "0 5px 20px rgba(0, 255, 136, 0.1)";

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavBackground {
    Translucent,
    Opaque,
}

impl NavBackground {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Opaque
        } else {
            Self::Translucent
        }
    }

    pub fn apply(self, nav: &impl View) {
        match self {
            Self::Opaque => {
                nav.set_style("background", NAV_OPAQUE_BACKGROUND);
                nav.set_style("box-shadow", NAV_OPAQUE_SHADOW);
            }
            Self::Translucent => {
                nav.set_style("background", NAV_TRANSLUCENT_BACKGROUND);
                nav.set_style("box-shadow", "none");
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the reader is in: the last one, in document order, whose
/// offset-shifted span contains `scroll_y`.
pub fn active_section(scroll_y: f64, offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let start = section.top - offset;
            scroll_y >= start && scroll_y < start + section.height
        })
        .map(|section| section.id.as_str())
}

pub fn highlight_nav_links<'a, V: View + 'a>(
    links: impl IntoIterator<Item = (&'a V, Option<String>)>,
    active_id: Option<&str>,
) {
    for (link, href) in links {
        let is_active = matches!(
            (href.as_deref().and_then(|href| href.strip_prefix('#')), active_id),
            (Some(target), Some(active)) if target == active
        );

        if is_active {
            link.set_style("color", ACTIVE_LINK_COLOR);
        } else {
            link.clear_style("color");
        }
    }
}

pub fn card_scroll_target(card_viewport_top: f64, scroll_y: f64, offset: f64) -> f64 {
    card_viewport_top + scroll_y - offset
}

pub fn set_skill_glow(tag: &impl View, hovered: bool) {
    if hovered {
        tag.set_style("box-shadow", SKILL_TAG_GLOW);
    } else {
        tag.clear_style("box-shadow");
    }
}
