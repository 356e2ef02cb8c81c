#![cfg(target_arch = "wasm32")]
use hawkins_core::particles::ParticleEmitter;
use hawkins_core::{Config, SectionEffect, Session, Timer};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug;
mod dom;
mod events;
mod glitch;
mod observers;
mod overlay;
mod particles;
mod scroll;
mod timer;
mod wall;

pub(crate) type PageSession = hawkins_core::Session<wall::DomLetter, wall::DomMessageBoard>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hawkins-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || run_init(&doc));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        run_init(&document);
    }
    Ok(())
}

fn run_init(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn load_config(document: &web::Document) -> Config {
    let Some(el) = document.get_element_by_id(constants::CONFIG_ELEMENT_ID) else {
        return Config::default();
    };
    match Config::from_json(&el.text_content().unwrap_or_default()) {
        Ok(config) => {
            log::info!("[config] {} messages from page", config.messages.len());
            config
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            Config::default()
        }
    }
}

fn apply_effect(effect: SectionEffect, session: &Rc<PageSession>, stage: &overlay::Stage) {
    match effect {
        SectionEffect::StartAlphabet => {
            let sequencer = Rc::clone(session.sequencer());
            spawn_local(async move {
                sequencer.run().await;
            });
        }
        SectionEffect::OpenPortal => stage.open_portal(),
        SectionEffect::ShowCredits => stage.show_credits(),
        SectionEffect::GlitchText(on) => stage.set_glitch_text(on),
    }
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let config = load_config(document);
    let timer: Rc<dyn Timer> = Rc::new(timer::WebTimer);
    let rng = hawkins_core::entropy_rng();

    // Letter registry
    let registry = wall::build_wall(document)?;
    let board = wall::DomMessageBoard::from_document(document);
    let session: Rc<PageSession> = Rc::new(Session::new(
        config.clone(),
        registry,
        board,
        Rc::clone(&timer),
        Rc::clone(&rng),
    ));

    // Ambient effects
    if let Some(layer) = particles::DomParticles::from_document(document) {
        ParticleEmitter::new(
            Rc::new(layer),
            Rc::clone(&timer),
            Rc::clone(&rng),
            config.particles.clone(),
            config.timing.particle_spawn_rate_ms,
        )
        .start();
    }
    if let Some(bands) = glitch::DomGlitchBands::build(document)? {
        hawkins_core::glitch::start(Rc::new(bands), Rc::clone(&timer), Rc::clone(&rng));
    }

    // Scroll-linked styling
    scroll::wire_scroll_progress(document);
    scroll::wire_hero_fade(document);

    // Section triggers and reveals
    observers::wire_reveal(document, Rc::clone(&timer))?;
    let stage = overlay::Stage::from_document(document, Rc::clone(&timer));
    let visibility = observers::DomVisibility::new(document);
    let s = Rc::clone(&session);
    session.watch_sections(
        &visibility,
        Rc::new(move |effect: SectionEffect| apply_effect(effect, &s, &stage)),
    );

    events::toggle::wire_toggle(document, Rc::clone(&session));
    debug::expose(&session)?;

    log::info!("hawkins-web ready");
    Ok(())
}
