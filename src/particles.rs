use crate::constants::{PARTICLES_CONTAINER_ID, PARTICLE_CLASS};
use crate::dom;
use hawkins_core::particles::{ParticleLayer, ParticleSpec};
use web_sys as web;

pub struct DomParticles {
    document: web::Document,
    container: web::Element,
}

impl DomParticles {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let container = dom::element(document, PARTICLES_CONTAINER_ID)?;
        Some(Self {
            document: document.clone(),
            container,
        })
    }
}

fn particle_style(spec: &ParticleSpec) -> String {
    format!(
        "left:{:.2}%;bottom:-10px;width:{size:.2}px;height:{size:.2}px;\
         animation-duration:{:.2}s;animation-delay:{}ms",
        spec.left_pct,
        spec.duration_s,
        spec.delay_ms,
        size = spec.size_px,
    )
}

impl ParticleLayer for DomParticles {
    type Particle = web::Element;

    fn spawn(&self, spec: &ParticleSpec) -> Option<web::Element> {
        let el = match dom::create(&self.document, "div", PARTICLE_CLASS) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[particles] {:?}", e);
                return None;
            }
        };
        _ = el.set_attribute("style", &particle_style(spec));
        dom::append(&self.container, &el).ok()?;
        Some(el)
    }

    fn remove(&self, particle: web::Element) {
        particle.remove();
    }
}
