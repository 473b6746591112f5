use gloo_timers::callback::Timeout;
use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::Callback;

use crate::config;

const REVEAL_SELECTOR: &str = ".animate-on-scroll";
const REVEAL_CLASS: &str = "animate-fade-in-view";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupTrigger {
    Timer,
    ExitIntent,
}

/// Pointer left through the top edge of the viewport.
pub fn is_exit_intent(client_y: i32) -> bool {
    client_y <= 0
}

struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    fn observe(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEAL_CLASS);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
        debug!("Observing {} scroll-reveal elements", nodes.length());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Page-level listeners that open the popup: a one-shot delay timer and an
/// exit-intent `mouseleave` listener on the document. Also owns the
/// scroll-reveal observer since it shares the same mount/unmount lifetime.
#[derive(Default)]
pub struct PageTriggers {
    started: bool,
    popup_timer: Option<Timeout>,
    mouse_leave: Option<(Document, Closure<dyn FnMut(MouseEvent)>)>,
    reveal: Option<ScrollReveal>,
}

impl PageTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn start(&mut self, on_trigger: Callback<PopupTrigger>) {
        if self.started {
            warn!("Popup triggers already armed");
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            error!("No document available, popup triggers not armed");
            return;
        };
        self.started = true;

        let on_timer = on_trigger.clone();
        self.popup_timer = Some(Timeout::new(config::POPUP_DELAY_MS, move || {
            on_timer.emit(PopupTrigger::Timer);
        }));

        let mouse_leave = Closure::wrap(Box::new(move |e: MouseEvent| {
            if is_exit_intent(e.client_y()) {
                on_trigger.emit(PopupTrigger::ExitIntent);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        match document
            .add_event_listener_with_callback("mouseleave", mouse_leave.as_ref().unchecked_ref())
        {
            Ok(()) => self.mouse_leave = Some((document.clone(), mouse_leave)),
            Err(e) => {
                error!("Failed to register exit-intent listener");
                gloo_console::error!(e);
            }
        }

        match ScrollReveal::observe(&document) {
            Ok(reveal) => self.reveal = Some(reveal),
            Err(e) => {
                error!("Failed to start scroll reveal observer");
                gloo_console::error!(e);
            }
        }

        info!("Popup triggers armed ({} ms timer, exit intent)", config::POPUP_DELAY_MS);
    }

    /// Cancels the timer, unregisters the listener and disconnects the
    /// observer. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;

        self.popup_timer = None;
        if let Some((document, mouse_leave)) = self.mouse_leave.take() {
            if let Err(e) = document.remove_event_listener_with_callback(
                "mouseleave",
                mouse_leave.as_ref().unchecked_ref(),
            ) {
                error!("Failed to unregister exit-intent listener");
                gloo_console::error!(e);
            }
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.observer.disconnect();
        }
        debug!("Popup triggers disarmed");
    }
}

impl Drop for PageTriggers {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_top_edge_counts_as_exit_intent() {
        assert!(is_exit_intent(0));
        assert!(is_exit_intent(-12));
        assert!(!is_exit_intent(1));
        assert!(!is_exit_intent(480));
    }

    #[test]
    fn stop_before_start_is_harmless() {
        let mut triggers = PageTriggers::new();
        triggers.stop();
        triggers.stop();
        assert!(!triggers.is_started());
    }

    #[test]
    fn stop_leaves_nothing_registered() {
        let mut triggers = PageTriggers::new();
        triggers.stop();
        assert!(triggers.popup_timer.is_none());
        assert!(triggers.mouse_leave.is_none());
        assert!(triggers.reveal.is_none());
    }
}
