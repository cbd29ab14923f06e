pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id a same-document link points at, if any.
///
/// A bare `#` names nothing and resolves to `None`, so the click becomes a
/// silent no-op instead of a jump to the top.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

pub fn follow_anchor<T>(
    href: &str,
    find: impl FnOnce(&str) -> Option<T>,
    scroll: impl FnOnce(T),
) -> bool {
    let Some(target) = fragment_target(href).and_then(find) else {
        return false;
    };
    scroll(target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_resolves_to_id() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
    }

    #[test]
    fn bare_hash_and_external_links_resolve_to_nothing() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn missing_target_does_not_scroll() {
        let mut scrolled = false;
        let followed = follow_anchor("#contact", |_| None::<()>, |_| scrolled = true);
        assert!(!followed);
        assert!(!scrolled);
    }

    #[test]
    fn present_target_is_scrolled_to() {
        let mut scrolled_to = None;
        let followed = follow_anchor(
            "#projects",
            |id| (id == "projects").then(|| id.to_string()),
            |target| scrolled_to = Some(target),
        );
        assert!(followed);
        assert_eq!(scrolled_to.as_deref(), Some("projects"));
    }
}
