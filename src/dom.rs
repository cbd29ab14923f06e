use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, NodeList, Window};

use crate::error::LayerError;
use crate::view::View;

impl View for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn clear_style(&self, property: &str) {
        let _ = self.style().remove_property(property);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

pub fn page() -> Result<(Window, Document), LayerError> {
    let window = window().ok_or(LayerError::MissingWindow)?;
    let document = window.document().ok_or(LayerError::MissingDocument)?;
    Ok((window, document))
}

pub fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, LayerError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

fn html_elements(nodes: &NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    as_html(document.query_selector(selector).ok().flatten())
}

pub fn select_within(element: &Element, selector: &str) -> Option<HtmlElement> {
    as_html(element.query_selector(selector).ok().flatten())
}

pub fn closest(element: &Element, selector: &str) -> Option<HtmlElement> {
    as_html(element.closest(selector).ok().flatten())
}

fn as_html(element: Option<Element>) -> Option<HtmlElement> {
    element.and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
