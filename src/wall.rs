use crate::constants::*;
use crate::dom;
use hawkins_core::{LetterRegistry, MessageBoard, VisualHandle};
use web_sys as web;

/// One light-up letter: the container holds the bulb and the glyph.
pub struct DomLetter {
    container: web::Element,
    bulb: web::Element,
}

impl VisualHandle for DomLetter {
    fn set_active(&self, on: bool) {
        dom::set_class(&self.container, ACTIVE_CLASS, on);
    }

    fn set_lit(&self, on: bool) {
        dom::set_class(&self.bulb, LIT_CLASS, on);
    }
}

fn build_letter(
    document: &web::Document,
    wall: Option<&web::Element>,
    letter: char,
) -> anyhow::Result<DomLetter> {
    let text = letter.to_string();
    let container = dom::create(document, "div", LETTER_CONTAINER_CLASS)?;
    _ = container.set_attribute("data-letter", &text);

    let bulb = dom::create(document, "div", LETTER_BULB_CLASS)?;
    let glyph = dom::create(document, "span", LETTER_CHAR_CLASS)?;
    glyph.set_text_content(Some(&text));

    dom::append(&container, &bulb)?;
    dom::append(&container, &glyph)?;
    if let Some(wall) = wall {
        dom::append(wall, &container)?;
    }
    Ok(DomLetter { container, bulb })
}

/// Create the 26 letters inside `#alphabetWall`. Without the wall the letters
/// are still built (detached) so the sequencer keeps working invisibly.
pub fn build_wall(document: &web::Document) -> anyhow::Result<LetterRegistry<DomLetter>> {
    let wall = dom::element(document, ALPHABET_WALL_ID);
    LetterRegistry::try_build(|letter| build_letter(document, wall.as_ref(), letter))
}

/// `#messageDisplay`, the transcript under the wall.
pub struct DomMessageBoard {
    display: Option<web::Element>,
}

impl DomMessageBoard {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            display: dom::element(document, MESSAGE_DISPLAY_ID),
        }
    }
}

impl MessageBoard for DomMessageBoard {
    fn show(&self, text: &str) {
        if let Some(el) = &self.display {
            el.set_text_content(Some(text));
        }
    }
}
