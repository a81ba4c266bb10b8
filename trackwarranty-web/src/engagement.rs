/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Landing-page GA instrumentation: scroll depth, clicks, form activity,
//! section views and engaged time. Every listener, timer and observer lives
//! in [`PageAnalytics`]; dropping it detaches all of them.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use trackwarranty_types::engagement::{
    button_type, click_params, field_focus_params, form_params, scroll_params,
    section_name, section_view_params, user_engagement_params, EngagementTracker,
    ScrollDepthTracker, SectionViewTracker, ACTIVITY_EVENTS, INACTIVITY_MS, SCROLL_DEBOUNCE_MS,
};
use trackwarranty_types::forms::form_name;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlFormElement, Window};
use yew::prelude::*;

use crate::browser::{self, containing_section};
use crate::context::SiteCtx;
use crate::observers::{ViewportObserver, HALF_VISIBLE};

const CLICKABLE: &str = "button, a, .btn, .hero-app-btn, .app-store-btn, .nav-link";
const TRACKED_SECTIONS: &str = "section, .hero, .problem-section, .solution-section, .social-proof, .enterprise-section, .download-section";

pub struct PageAnalytics {
    _listeners: Vec<EventListener>,
    _sections: Option<ViewportObserver>,
    scroll_debounce: Rc<RefCell<Option<Timeout>>>,
    inactivity: Rc<RefCell<Option<Timeout>>>,
}

impl PageAnalytics {
    pub fn attach(site: SiteCtx) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let started_at = browser::now_ms();

        let scroll_debounce = Rc::new(RefCell::new(None));
        let inactivity = Rc::new(RefCell::new(None));

        let mut listeners = vec![
            scroll_depth(&window, &document, site.clone(), started_at, scroll_debounce.clone()),
            clicks(&document, site.clone()),
        ];
        listeners.extend(form_activity(&document, site.clone()));
        listeners.extend(engagement(&document, site.clone(), inactivity.clone()));

        Some(Self {
            _listeners: listeners,
            _sections: section_views(&document, site, started_at),
            scroll_debounce,
            inactivity,
        })
    }

    /// The inactivity timer only runs once the visitor has done something.
    pub fn inactivity_armed(&self) -> bool {
        self.inactivity.borrow().is_some()
    }
}

impl Drop for PageAnalytics {
    fn drop(&mut self) {
        self.scroll_debounce.borrow_mut().take();
        self.inactivity.borrow_mut().take();
    }
}

/// Attach [`PageAnalytics`] for the lifetime of the calling component.
#[hook]
pub fn use_page_analytics(site: SiteCtx) {
    use_effect_with((), move |_| {
        let analytics = PageAnalytics::attach(site);
        move || drop(analytics)
    });
}

fn scroll_depth(
    window: &Window,
    document: &Document,
    site: SiteCtx,
    started_at: u64,
    debounce: Rc<RefCell<Option<Timeout>>>,
) -> EventListener {
    let tracker = Rc::new(RefCell::new(ScrollDepthTracker::new()));
    let window_handle = window.clone();
    let document = document.clone();
    EventListener::new(window, "scroll", move |_| {
        let tracker = tracker.clone();
        let site = site.clone();
        let window = window_handle.clone();
        let document = document.clone();
        // Replacing the pending timeout cancels it.
        *debounce.borrow_mut() = Some(Timeout::new(SCROLL_DEBOUNCE_MS, move || {
            let top = window.page_y_offset().unwrap_or_default();
            let inner = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let height = document
                .document_element()
                .map(|el| f64::from(el.scroll_height()))
                .unwrap_or_default();
            let engaged = browser::now_ms().saturating_sub(started_at);
            for marker in tracker.borrow_mut().update(top, height - inner) {
                log::debug!("Scroll depth: {marker}%");
                site.tracker.track_ga("scroll", scroll_params(marker, engaged));
            }
        }));
    })
}

fn clicks(document: &Document, site: SiteCtx) -> EventListener {
    EventListener::new(document, "click", move |event| {
        let Some(target) = event_element(event) else {
            return;
        };
        let Ok(Some(control)) = target.closest(CLICKABLE) else {
            return;
        };

        let text = control
            .text_content()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| control.get_attribute("alt"))
            .unwrap_or_else(|| "Unknown".to_string());
        let href = control
            .dyn_ref::<HtmlAnchorElement>()
            .map(|a| a.href())
            .unwrap_or_default();
        let is_submit = control.get_attribute("type").as_deref() == Some("submit");
        let host = browser::hostname();
        let kind = button_type(Some(href.as_str()), is_submit, &host);
        let section = containing_section(&control);
        let outbound = !href.is_empty() && !href.contains(&host);

        log::debug!("Click tracked: {text} in {section}");
        site.tracker
            .track_ga("click", click_params(&text, kind, &section, &href, outbound));
    })
}

/// Name and location of the form around `event`'s target.
fn form_of(document: &Document, event: &Event) -> Option<(HtmlFormElement, String)> {
    let form: HtmlFormElement = event_element(event)?
        .closest("form")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;
    let form_el: &Element = form.as_ref();
    let forms = document.forms();
    let index = (0..forms.length())
        .position(|i| forms.item(i).as_ref() == Some(form_el))
        .unwrap_or_default();
    let name = form_name(&form.id(), &form.class_name(), index);
    Some((form, name))
}

fn form_activity(document: &Document, site: SiteCtx) -> Vec<EventListener> {
    let started = Rc::new(RefCell::new(HashSet::<String>::new()));

    let on_input = {
        let site = site.clone();
        let doc = document.clone();
        EventListener::new(document, "input", move |event| {
            let Some((form, name)) = form_of(&doc, event) else {
                return;
            };
            if started.borrow_mut().insert(name.clone()) {
                let location = containing_section(&form);
                site.tracker.track_ga("form_start", form_params(&name, &location));
            }
        })
    };

    let on_submit = {
        let site = site.clone();
        let doc = document.clone();
        EventListener::new(document, "submit", move |event| {
            if let Some((form, name)) = form_of(&doc, event) {
                let location = containing_section(&form);
                site.tracker.track_ga("form_submit", form_params(&name, &location));
            }
        })
    };

    let on_focus = {
        let doc = document.clone();
        EventListener::new(document, "focusin", move |event| {
            let Some(field) = event_element(event) else {
                return;
            };
            if !matches!(field.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") {
                return;
            }
            let Some((_, name)) = form_of(&doc, event) else {
                return;
            };
            let field_type = field
                .get_attribute("type")
                .unwrap_or_else(|| field.tag_name().to_lowercase());
            let field_name = field
                .get_attribute("name")
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| field_type.clone());
            site.tracker.track_ga(
                "form_field_focus",
                field_focus_params(&name, &field_name, &field_type),
            );
        })
    };

    vec![on_input, on_submit, on_focus]
}

fn section_views(document: &Document, site: SiteCtx, started_at: u64) -> Option<ViewportObserver> {
    let seen = RefCell::new(SectionViewTracker::new());
    let observer = ViewportObserver::new(HALF_VISIBLE, None, move |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let section = entry.target();
        let name = section_name(&section.id(), &section.class_name(), &section.tag_name());
        if seen.borrow_mut().observe(&name, entry.intersection_ratio()) {
            log::debug!("Section viewed: {name}");
            let elapsed = browser::now_ms().saturating_sub(started_at);
            site.tracker
                .track_ga("section_view", section_view_params(&name, elapsed));
        }
    })
    .map_err(|e| log::warn!("Section tracking disabled: {e:?}"))
    .ok()?;

    if let Ok(sections) = document.query_selector_all(TRACKED_SECTIONS) {
        for i in 0..sections.length() {
            if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
    Some(observer)
}

fn engagement(
    document: &Document,
    site: SiteCtx,
    inactivity: Rc<RefCell<Option<Timeout>>>,
) -> Vec<EventListener> {
    let state = Rc::new(RefCell::new(EngagementTracker::new(browser::now_ms() as f64)));

    let restart_timer = {
        let state = state.clone();
        let site = site.clone();
        let inactivity = inactivity.clone();
        move || {
            let state = state.clone();
            let site = site.clone();
            *inactivity.borrow_mut() = Some(Timeout::new(INACTIVITY_MS, move || {
                let elapsed = state
                    .borrow_mut()
                    .inactivity_elapsed(browser::now_ms() as f64);
                if let Some(ms) = elapsed {
                    site.tracker
                        .track_ga("user_engagement", user_engagement_params(ms, false));
                }
            }));
        }
    };

    let mut listeners: Vec<EventListener> = ACTIVITY_EVENTS
        .iter()
        .map(|name| {
            let state = state.clone();
            let restart_timer = restart_timer.clone();
            EventListener::new_with_options(
                document,
                *name,
                EventListenerOptions::run_in_capture_phase(),
                move |_| {
                    state.borrow_mut().activity(browser::now_ms() as f64);
                    restart_timer();
                },
            )
        })
        .collect();

    let doc = document.clone();
    listeners.push(EventListener::new(document, "visibilitychange", move |_| {
        let now = browser::now_ms() as f64;
        if doc.hidden() {
            if let Some(ms) = state.borrow().hidden(now) {
                site.tracker
                    .track_ga("user_engagement", user_engagement_params(ms, true));
            }
        } else {
            state.borrow_mut().visible(now);
        }
    }));
    listeners
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
