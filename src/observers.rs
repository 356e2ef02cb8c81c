use crate::constants::VISIBLE_CLASS;
use crate::dom;
use fnv::FnvHashMap;
use hawkins_core::reveal::{parse_delay_ms, REVEAL_SELECTOR};
use hawkins_core::{Section, Timer, VisibilityOptions, VisibilitySource, REVEAL_VISIBILITY};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Callbacks = Rc<RefCell<FnvHashMap<String, Box<dyn FnMut(bool)>>>>;
type ObserverFn = dyn FnMut(js_sys::Array, web::IntersectionObserver);

fn observer_init(options: &VisibilityOptions) -> web::IntersectionObserverInit {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    init
}

fn new_observer(
    options: &VisibilityOptions,
    on_entries: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(on_entries) as Box<ObserverFn>);
    let observer = web::IntersectionObserver::new_with_options(
        closure.as_ref().unchecked_ref(),
        &observer_init(options),
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    closure.forget();
    Ok(observer)
}

/// Section visibility backed by IntersectionObserver, one observer per
/// distinct set of options, dispatching by element id.
pub struct DomVisibility {
    document: web::Document,
    observers: RefCell<Vec<(VisibilityOptions, web::IntersectionObserver, Callbacks)>>,
}

impl DomVisibility {
    pub fn new(document: &web::Document) -> Self {
        Self {
            document: document.clone(),
            observers: RefCell::new(Vec::new()),
        }
    }

    fn observer_for(
        &self,
        options: &VisibilityOptions,
    ) -> anyhow::Result<(web::IntersectionObserver, Callbacks)> {
        let mut observers = self.observers.borrow_mut();
        if let Some((_, observer, callbacks)) = observers.iter().find(|(o, _, _)| o == options) {
            return Ok((observer.clone(), Rc::clone(callbacks)));
        }
        let callbacks: Callbacks = Rc::default();
        let dispatch = Rc::clone(&callbacks);
        let observer = new_observer(options, move |entries, _observer| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let id = entry.target().id();
                if let Some(on_change) = dispatch.borrow_mut().get_mut(&id) {
                    on_change(entry.is_intersecting());
                }
            }
        })?;
        observers.push((*options, observer.clone(), Rc::clone(&callbacks)));
        Ok((observer, callbacks))
    }
}

impl VisibilitySource for DomVisibility {
    fn watch(
        &self,
        section: Section,
        options: &VisibilityOptions,
        on_change: Box<dyn FnMut(bool)>,
    ) {
        let id = section.element_id();
        let Some(target) = dom::element(&self.document, id) else {
            return;
        };
        match self.observer_for(options) {
            Ok((observer, callbacks)) => {
                callbacks.borrow_mut().insert(id.to_string(), on_change);
                observer.observe(&target);
            }
            Err(e) => log::warn!("[sections] cannot watch #{}: {:?}", id, e),
        }
    }
}

/// Reveal story content once: add `visible` after the element's `data-delay`
/// and stop observing it.
pub fn wire_reveal(document: &web::Document, timer: Rc<dyn Timer>) -> anyhow::Result<()> {
    let observer = new_observer(&REVEAL_VISIBILITY, move |entries, observer| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let delay = parse_delay_ms(target.get_attribute("data-delay").as_deref());
            let el = target.clone();
            timer.defer(
                delay,
                Box::new(move || dom::set_class(&el, VISIBLE_CLASS, true)),
            );
            observer.unobserve(&target);
        }
    })?;
    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut count = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            observer.observe(&el);
            count += 1;
        }
    }
    log::info!("[reveal] observing {} elements", count);
    Ok(())
}
