use crate::core::AnxiousButton;
use crate::render::Stage;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elapsed page time, the only clock the controller ever sees.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

pub struct FrameContext {
    pub app: Rc<RefCell<AnxiousButton<StdRng>>>,
    pub stage: Rc<Stage>,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let due = match self.app.borrow().next_due() {
            Some(due) => due,
            None => return,
        };
        if due > now {
            return;
        }
        let effects = self.app.borrow_mut().tick(now);
        self.stage.apply_all(&effects);
    }
}

fn request_frame(window: &web::Window, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the controller's deferred work (message hide, crash delay, confetti)
/// from requestAnimationFrame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            request_frame(&w, &tick_clone);
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        request_frame(&w, &tick);
    }
}
