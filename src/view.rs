pub trait View {
    fn set_style(&self, property: &str, value: &str);

    fn clear_style(&self, property: &str);

    fn toggle_class(&self, class: &str) -> bool;

    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn set_transform(&self, transform: &str) {
        self.set_style("transform", transform);
    }

    fn set_opacity(&self, opacity: f64) {
        self.set_style("opacity", &opacity.to_string());
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::View;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    pub(crate) struct RecordingView {
        styles: RefCell<HashMap<String, String>>,
        classes: RefCell<BTreeSet<String>>,
        text: RefCell<String>,
    }

    impl RecordingView {
        pub(crate) fn with_text(text: &str) -> Self {
            let view = Self::default();
            *view.text.borrow_mut() = text.to_string();
            view
        }

        pub(crate) fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }

        pub(crate) fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        pub(crate) fn classes(&self) -> BTreeSet<String> {
            self.classes.borrow().clone()
        }
    }

    impl View for RecordingView {
        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }

        fn clear_style(&self, property: &str) {
            self.styles.borrow_mut().remove(property);
        }

        fn toggle_class(&self, class: &str) -> bool {
            let mut classes = self.classes.borrow_mut();
            if classes.remove(class) {
                false
            } else {
                classes.insert(class.to_string());
                true
            }
        }

        fn text(&self) -> String {
            self.text.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }
}
