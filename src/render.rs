use crate::audio::{self, BgmPlayer};
use crate::core::confetti::ConfettiPiece;
use crate::core::messages::DEFAULT_LABEL;
use crate::core::{AnxietyLevel, ButtonId, Effect};
use crate::dom;
use crate::overlay::{CrashOverlay, RevealOverlay};
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Every element and port the controller's effects touch.
pub struct Stage {
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub button: web::HtmlElement,
    pub button_text: web::Element,
    pub yes_button: web::Element,
    pub panic_message: web::Element,
    pub crash: CrashOverlay,
    pub reveal: RevealOverlay,
    pub player: Rc<RefCell<BgmPlayer>>,
    confetti: RefCell<FnvHashMap<u32, web::Element>>,
}

impl Stage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document: web::Document,
        body: web::HtmlElement,
        button: web::HtmlElement,
        button_text: web::Element,
        yes_button: web::Element,
        panic_message: web::Element,
        crash: CrashOverlay,
        reveal: RevealOverlay,
        player: Rc<RefCell<BgmPlayer>>,
    ) -> Self {
        Self {
            document,
            body,
            button,
            button_text,
            yes_button,
            panic_message,
            crash,
            reveal,
            player,
            confetti: RefCell::new(FnvHashMap::default()),
        }
    }

    pub fn apply_all(&self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn apply(&self, effect: &Effect) {
        match effect {
            Effect::SetLevel(level) => self.set_level(*level),
            Effect::ShowPanicMessage(text) => {
                dom::set_text(&self.panic_message, text);
                _ = self.panic_message.class_list().add_1("show");
            }
            Effect::HidePanicMessage => {
                _ = self.panic_message.class_list().remove_1("show");
            }
            Effect::Jitter(offset) => {
                let transform = format!("translate({:.2}px, {:.2}px)", offset.x, offset.y);
                _ = self.button.style().set_property("transform", &transform);
            }
            Effect::ClearJitter => {
                _ = self.button.style().set_property("transform", "");
            }
            Effect::MoveButton(pos) => self.move_button(Some(*pos)),
            Effect::SetRunning(on) => {
                _ = self.button.class_list().toggle_with_force("running", *on);
            }
            Effect::MarkClicked(ButtonId::Evasive) => {
                self.clear_level_classes();
                let cl = self.button.class_list();
                _ = cl.remove_1("running");
                _ = cl.add_1("clicked");
            }
            Effect::MarkClicked(ButtonId::Yes) => {
                _ = self.yes_button.class_list().add_1("clicked");
            }
            Effect::SetLabel(text) => dom::set_text(&self.button_text, text),
            Effect::ShowCrash => self.crash.show(),
            Effect::StartReveal => self.reveal.start(),
            Effect::RevealImage => self.reveal.show_image(),
            Effect::OpenAudioFilter => {
                let player = self.player.clone();
                spawn_local(async move {
                    audio::ensure_started(player.clone()).await;
                    player.borrow().open_filter();
                });
            }
            Effect::SpawnConfetti(piece) => self.spawn_confetti(piece),
            Effect::RemoveConfetti(id) => {
                if let Some(el) = self.confetti.borrow_mut().remove(id) {
                    el.remove();
                }
            }
            Effect::Reset => {
                let cl = self.button.class_list();
                _ = cl.remove_1("clicked");
                dom::set_text(&self.button_text, DEFAULT_LABEL);
                self.move_button(None);
            }
        }
    }

    fn clear_level_classes(&self) {
        let cl = self.button.class_list();
        for level in AnxietyLevel::ALL {
            _ = cl.remove_1(level.css_class());
        }
    }

    fn set_level(&self, level: AnxietyLevel) {
        self.clear_level_classes();
        let body_cl = self.body.class_list();
        for l in AnxietyLevel::ALL {
            _ = body_cl.remove_1(l.body_class());
        }
        _ = self.button.class_list().add_1(level.css_class());
        _ = body_cl.add_1(level.body_class());
    }

    fn move_button(&self, pos: Option<Vec2>) {
        let style = self.button.style();
        match pos {
            Some(p) => {
                _ = style.set_property("left", &format!("{:.2}px", p.x));
                _ = style.set_property("top", &format!("{:.2}px", p.y));
            }
            None => {
                _ = style.set_property("left", "");
                _ = style.set_property("top", "");
            }
        }
    }

    fn spawn_confetti(&self, piece: &ConfettiPiece) {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[confetti] create element: {:?}", e);
                return;
            }
        };
        el.set_class_name("confetti");
        _ = el.set_attribute("style", &piece.style());
        if self.body.append_child(&el).is_ok() {
            self.confetti.borrow_mut().insert(piece.id, el);
        }
    }
}
