use crate::view::View;

pub const SHOW_MORE_SELECTOR: &str = ".btn-show-more";
pub const DETAILS_SELECTOR: &str = ".project-details";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    pub show_more: String,
    pub show_less: String,
}

impl ToggleLabels {
    pub fn for_state(&self, expanded: bool) -> &str {
        if expanded {
            &self.show_less
        } else {
            &self.show_more
        }
    }
}

/// Flips a project card's details panel and its button.
///
/// The panel and the button are toggled independently; the label follows the
/// panel. Returns whether the panel is now expanded.
pub fn toggle_details(details: &impl View, button: &impl View, labels: &ToggleLabels) -> bool {
    let expanded = details.toggle_class(ACTIVE_CLASS);
    button.toggle_class(ACTIVE_CLASS);
    button.set_text(labels.for_state(expanded));
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SHOW_LESS_LABEL, DEFAULT_SHOW_MORE_LABEL};
    use crate::view::testing::RecordingView;

    fn labels() -> ToggleLabels {
        ToggleLabels {
            show_more: DEFAULT_SHOW_MORE_LABEL.to_string(),
            show_less: DEFAULT_SHOW_LESS_LABEL.to_string(),
        }
    }

    #[test]
    fn first_click_expands_and_relabels() {
        let details = RecordingView::default();
        let button = RecordingView::with_text("Voir Plus");

        assert!(toggle_details(&details, &button, &labels()));
        assert!(details.has_class(ACTIVE_CLASS));
        assert!(button.has_class(ACTIVE_CLASS));
        assert_eq!(button.text(), "Voir Moins");
    }

    #[test]
    fn two_clicks_restore_the_original_state() {
        let details = RecordingView::default();
        let button = RecordingView::with_text("Voir Plus");
        let details_before = details.classes();
        let button_before = button.classes();

        toggle_details(&details, &button, &labels());
        let expanded = toggle_details(&details, &button, &labels());

        assert!(!expanded);
        assert_eq!(details.classes(), details_before);
        assert_eq!(button.classes(), button_before);
        assert_eq!(button.text(), "Voir Plus");
    }
}
