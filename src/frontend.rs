use futures_util::StreamExt;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::future::{IntervalStream, TimeoutFuture};
use js_sys::Array;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::anchor::{follow_anchor, ANCHOR_SELECTOR};
use crate::config::{InteractionConfig, CONFIG_ELEMENT_ID, DEFAULT_LOG_LEVEL};
use crate::counter::{StatCounter, STAT_SELECTOR};
use crate::cursor::{pointer_moved, InteractionContext, INTERACTIVE_SELECTOR};
use crate::dom;
use crate::error::LayerError;
use crate::log::{print_banner, Logger};
use crate::reveal::{
    document_loaded, fade_in_body, hide_body, reveal, RevealConfig, ABOUT_SECTION_ID,
    PROJECT_CARD_SELECTOR, SECTION_SELECTOR,
};
use crate::schedule::{RepeatingTask, StopHandle};
use crate::scroll::{
    active_section, card_scroll_target, highlight_nav_links, parallax_transform, set_skill_glow,
    NavBackground, SectionBounds, BACKGROUND_SELECTOR, NAV_LINK_SELECTOR, NAV_SELECTOR,
    SKILL_TAG_SELECTOR, TRACKED_SECTION_SELECTOR,
};
use crate::toggle::{toggle_details, ToggleLabels, DETAILS_SELECTOR, SHOW_MORE_SELECTOR};
use crate::view::View;

const CURSOR_SELECTOR: &str = ".cursor";
const FOLLOWER_SELECTOR: &str = ".cursor-follower";

thread_local! {
    static LAYER: RefCell<Option<PageLayer>> = const { RefCell::new(None) };
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct FrameLoop {
    stop: StopHandle,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    fn start(step: impl FnMut() + 'static) -> Self {
        let task = RepeatingTask::new(step);
        let stop = task.handle();
        let frame = Rc::new(RefCell::new(None));
        schedule_frame(Rc::new(RefCell::new(task)), Rc::clone(&frame));
        Self { stop, frame }
    }

    fn stop(&self) {
        self.stop.stop();
        self.frame.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_frame<F: FnMut() + 'static>(
    task: Rc<RefCell<RepeatingTask<F>>>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
) {
    let next_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |_timestamp| {
        next_slot.borrow_mut().take();
        if task.borrow_mut().tick() {
            schedule_frame(task, next_slot);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

/// Everything the page layer attached to the document. Dropping it detaches
/// every listener, disconnects every observer and stops the follower loop.
pub struct PageLayer {
    listeners: Vec<EventListener>,
    observers: Vec<VisibilityObserver>,
    follower: Option<FrameLoop>,
    logger: Logger,
}

impl PageLayer {
    pub fn install(config: &InteractionConfig) -> Result<Self, LayerError> {
        let (window, document) = dom::page()?;
        let ctx = Rc::new(RefCell::new(InteractionContext::new(config)));
        ctx.borrow_mut().record_scroll(dom::scroll_y(&window));
        let mut layer = Self {
            listeners: Vec::new(),
            observers: Vec::new(),
            follower: None,
            logger: Logger::new(config.log_level),
        };

        layer.install_cursor(&document, &ctx)?;
        layer.install_anchor_scroll(&document)?;
        layer.install_section_reveal(&document)?;
        layer.install_card_reveal(&document, config)?;
        layer.install_stat_counters(&document, config)?;
        layer.install_show_more(&window, &document, &ctx, config)?;
        layer.install_skill_tags(&document)?;
        layer.install_scroll_effects(&window, &document, &ctx, config)?;
        layer.install_load_fade(&window, &document, config);

        layer.logger.info(
            "layer_installed",
            json!({
                "listeners": layer.listeners.len(),
                "observers": layer.observers.len(),
                "follower": layer.follower.is_some(),
            }),
        );
        Ok(layer)
    }

    /// Stops the cursor follower's frame loop. The page never calls this.
    pub fn stop_follower(&self) {
        if let Some(follower) = self.follower.as_ref() {
            follower.stop();
        }
    }

    fn skipped(&self, behavior: &str, selector: &str) {
        self.logger.debug(
            "behavior_skipped",
            json!({ "behavior": behavior, "selector": selector }),
        );
    }

    fn install_cursor(
        &mut self,
        document: &Document,
        ctx: &Rc<RefCell<InteractionContext>>,
    ) -> Result<(), LayerError> {
        let cursor = dom::select_one(document, CURSOR_SELECTOR);

        {
            let ctx = Rc::clone(ctx);
            let cursor = cursor.clone();
            self.listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                pointer_moved(
                    &mut ctx.borrow_mut(),
                    cursor.as_ref(),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
            }));
        }

        if let Some(cursor) = cursor {
            for element in dom::select_all(document, INTERACTIVE_SELECTOR)? {
                let enter_ctx = Rc::clone(ctx);
                let enter_cursor = cursor.clone();
                self.listeners.push(EventListener::new(&element, "mouseenter", move |_| {
                    enter_ctx.borrow_mut().enter_interactive().apply(&enter_cursor);
                }));

                let leave_ctx = Rc::clone(ctx);
                let leave_cursor = cursor.clone();
                self.listeners.push(EventListener::new(&element, "mouseleave", move |_| {
                    leave_ctx.borrow_mut().leave_interactive().apply(&leave_cursor);
                }));
            }
        } else {
            self.skipped("cursor", CURSOR_SELECTOR);
        }

        let Some(follower) = dom::select_one(document, FOLLOWER_SELECTOR) else {
            self.skipped("cursor_follower", FOLLOWER_SELECTOR);
            return Ok(());
        };
        let ctx = Rc::clone(ctx);
        self.follower = Some(FrameLoop::start(move || {
            let transform = ctx.borrow_mut().step_follower();
            follower.set_transform(&transform);
        }));
        Ok(())
    }

    fn install_anchor_scroll(&mut self, document: &Document) -> Result<(), LayerError> {
        for anchor in dom::select_all(document, ANCHOR_SELECTOR)? {
            let document = document.clone();
            let link = anchor.clone();
            self.listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    let href = link.get_attribute("href").unwrap_or_default();
                    follow_anchor(
                        &href,
                        |id| document.get_element_by_id(id),
                        |target| {
                            let options = ScrollIntoViewOptions::new();
                            options.set_behavior(ScrollBehavior::Smooth);
                            options.set_block(ScrollLogicalPosition::Start);
                            target.scroll_into_view_with_scroll_into_view_options(&options);
                        },
                    );
                },
            ));
        }
        Ok(())
    }

    fn install_section_reveal(&mut self, document: &Document) -> Result<(), LayerError> {
        let sections = dom::select_all(document, SECTION_SELECTOR)?;
        self.install_reveal(RevealConfig::sections(), &sections)
    }

    fn install_card_reveal(
        &mut self,
        document: &Document,
        config: &InteractionConfig,
    ) -> Result<(), LayerError> {
        let cards = dom::select_all(document, PROJECT_CARD_SELECTOR)?;
        self.install_reveal(RevealConfig::project_cards(config.card_stagger_ms), &cards)
    }

    fn install_reveal(
        &mut self,
        reveal_config: RevealConfig,
        targets: &[HtmlElement],
    ) -> Result<(), LayerError> {
        if targets.is_empty() {
            return Ok(());
        }

        for target in targets {
            reveal_config.hide(target);
        }

        let schedule_config = reveal_config.clone();
        let observer = observe(&reveal_config, targets, move |batch| {
            let hits: Vec<bool> = batch.iter().map(|(_, hit)| *hit).collect();
            for (index, delay_ms) in schedule_config.stagger_schedule(&hits) {
                reveal_after(batch[index].0.clone(), delay_ms);
            }
        })?;
        self.observers.push(observer);
        Ok(())
    }

    fn install_stat_counters(
        &mut self,
        document: &Document,
        config: &InteractionConfig,
    ) -> Result<(), LayerError> {
        let Some(about) = document
            .get_element_by_id(ABOUT_SECTION_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            self.skipped("stat_counters", "#about");
            return Ok(());
        };

        let document = document.clone();
        let tick_ms = config.counter_tick_ms;
        let steps = config.counter_steps;
        let logger = self.logger;
        let observer = observe(&RevealConfig::about_trigger(), &[about], move |batch| {
            if batch.iter().any(|(_, hit)| *hit) {
                animate_stats(&document, tick_ms, steps, logger);
            }
        })?;
        self.observers.push(observer);
        Ok(())
    }

    fn install_show_more(
        &mut self,
        window: &Window,
        document: &Document,
        ctx: &Rc<RefCell<InteractionContext>>,
        config: &InteractionConfig,
    ) -> Result<(), LayerError> {
        let labels = ToggleLabels {
            show_more: config.show_more_label.clone(),
            show_less: config.show_less_label.clone(),
        };

        for button in dom::select_all(document, SHOW_MORE_SELECTOR)? {
            let window = window.clone();
            let ctx = Rc::clone(ctx);
            let labels = labels.clone();
            let delay_ms = config.show_more_scroll_delay_ms;
            let offset = config.show_more_scroll_offset;
            let clicked = button.clone();
            self.listeners.push(EventListener::new(&button, "click", move |_| {
                let Some(card) = dom::closest(&clicked, PROJECT_CARD_SELECTOR) else {
                    return;
                };
                let Some(details) = dom::select_within(&card, DETAILS_SELECTOR) else {
                    return;
                };

                if toggle_details(&details, &clicked, &labels) {
                    let window = window.clone();
                    let ctx = Rc::clone(&ctx);
                    spawn_local(async move {
                        TimeoutFuture::new(delay_ms).await;
                        let top = card_scroll_target(
                            card.get_bounding_client_rect().top(),
                            ctx.borrow().scroll_offset(),
                            offset,
                        );
                        let options = ScrollToOptions::new();
                        options.set_top(top);
                        options.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&options);
                    });
                }
            }));
        }
        Ok(())
    }

    fn install_skill_tags(&mut self, document: &Document) -> Result<(), LayerError> {
        for tag in dom::select_all(document, SKILL_TAG_SELECTOR)? {
            let entered = tag.clone();
            self.listeners.push(EventListener::new(&tag, "mouseenter", move |_| {
                set_skill_glow(&entered, true);
            }));
            let left = tag.clone();
            self.listeners.push(EventListener::new(&tag, "mouseleave", move |_| {
                set_skill_glow(&left, false);
            }));
        }
        Ok(())
    }

    fn install_scroll_effects(
        &mut self,
        window: &Window,
        document: &Document,
        ctx: &Rc<RefCell<InteractionContext>>,
        config: &InteractionConfig,
    ) -> Result<(), LayerError> {
        let background = dom::select_one(document, BACKGROUND_SELECTOR);
        if background.is_none() {
            self.skipped("parallax", BACKGROUND_SELECTOR);
        }
        let nav = dom::select_one(document, NAV_SELECTOR);
        if nav.is_none() {
            self.skipped("nav_background", NAV_SELECTOR);
        }
        let sections = dom::select_all(document, TRACKED_SECTION_SELECTOR)?;
        let links: Vec<(HtmlElement, Option<String>)> = dom::select_all(document, NAV_LINK_SELECTOR)?
            .into_iter()
            .map(|link| {
                let href = link.get_attribute("href");
                (link, href)
            })
            .collect();
        if links.is_empty() {
            self.skipped("nav_highlight", NAV_LINK_SELECTOR);
        }

        let ctx = Rc::clone(ctx);
        let scrolled_window = window.clone();
        let parallax_factor = config.parallax_factor;
        let nav_threshold = config.nav_scroll_threshold;
        let section_offset = config.nav_section_offset;
        self.listeners.push(EventListener::new(window, "scroll", move |_| {
            let scroll_y = dom::scroll_y(&scrolled_window);
            ctx.borrow_mut().record_scroll(scroll_y);

            if let Some(background) = background.as_ref() {
                background.set_transform(&parallax_transform(scroll_y, parallax_factor));
            }

            if let Some(nav) = nav.as_ref() {
                NavBackground::for_scroll(scroll_y, nav_threshold).apply(nav);
            }

            if !links.is_empty() {
                let bounds: Vec<SectionBounds> = sections
                    .iter()
                    .map(|section| SectionBounds {
                        id: section.id(),
                        top: f64::from(section.offset_top()),
                        height: f64::from(section.client_height()),
                    })
                    .collect();
                let active = active_section(scroll_y, section_offset, &bounds);
                highlight_nav_links(links.iter().map(|(link, href)| (link, href.clone())), active);
            }
        }));
        Ok(())
    }

    fn install_load_fade(&mut self, window: &Window, document: &Document, config: &InteractionConfig) {
        let Some(body) = document.body() else {
            self.skipped("load_fade", "body");
            return;
        };
        hide_body(&body);

        let delay_ms = config.fade_in_delay_ms;
        if document_loaded(&document.ready_state()) {
            fade_in_after(body, delay_ms);
            return;
        }
        self.listeners.push(EventListener::once(window, "load", move |_| {
            fade_in_after(body, delay_ms);
        }));
    }
}

fn observe(
    reveal_config: &RevealConfig,
    targets: &[HtmlElement],
    mut on_batch: impl FnMut(&[(HtmlElement, bool)]) + 'static,
) -> Result<VisibilityObserver, LayerError> {
    let disconnect_config = reveal_config.clone();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let batch: Vec<(HtmlElement, bool)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let hit = entry.is_intersecting();
                entry.target().dyn_into::<HtmlElement>().ok().map(|target| (target, hit))
            })
            .collect();

        on_batch(&batch);

        let hits: Vec<bool> = batch.iter().map(|(_, hit)| *hit).collect();
        if disconnect_config.should_disconnect(&hits) {
            observer.disconnect();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal_config.threshold));
    options.set_root_margin(reveal_config.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for target in targets {
        observer.observe(target);
    }

    Ok(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

fn reveal_after(element: HtmlElement, delay_ms: u32) {
    if delay_ms == 0 {
        reveal(&element);
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        reveal(&element);
    });
}

fn fade_in_after(body: HtmlElement, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        fade_in_body(&body);
    });
}

fn animate_stats(document: &Document, tick_ms: u32, steps: u32, logger: Logger) {
    let Ok(stats) = dom::select_all(document, STAT_SELECTOR) else {
        return;
    };

    for stat in stats {
        let text = stat.text();
        let Some(mut counter) = StatCounter::parse(&text, steps) else {
            logger.debug("stat_counter_skipped", json!({ "text": text }));
            continue;
        };

        spawn_local(async move {
            let mut ticks = IntervalStream::new(tick_ms);
            while ticks.next().await.is_some() {
                let frame = counter.tick();
                stat.set_text(frame.text());
                if frame.is_finished() {
                    break;
                }
            }
            logger.debug("stat_counter_finished", json!({ "target": counter.target() }));
        });
    }
}

fn load_config() -> InteractionConfig {
    let raw = dom::page()
        .ok()
        .and_then(|(_, document)| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw else {
        return InteractionConfig::default();
    };

    InteractionConfig::from_json(&raw).unwrap_or_else(|error| {
        Logger::new(DEFAULT_LOG_LEVEL).warn("config_rejected", json!({ "error": error.to_string() }));
        InteractionConfig::default()
    })
}

pub fn run() {
    print_banner();

    let config = load_config();
    match PageLayer::install(&config) {
        Ok(layer) => LAYER.with(|slot| *slot.borrow_mut() = Some(layer)),
        Err(error) => Logger::new(config.log_level)
            .warn("install_failed", json!({ "error": error.to_string() })),
    }
}
