#![cfg(target_arch = "wasm32")]
use crate::core::AnxiousButton;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

use constants::*;

thread_local! {
    // Set once by `init`; read by the exported developer hooks.
    static APP: RefCell<Option<(Rc<RefCell<AnxiousButton<StdRng>>>, Rc<render::Stage>)>> =
        const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anxious-button starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Developer hook: put the evasive button back to its calm starting state.
#[wasm_bindgen]
pub fn reset_button() {
    APP.with(|slot| {
        if let Some((app, stage)) = slot.borrow().as_ref() {
            let effects = app.borrow_mut().reset();
            stage.apply_all(&effects);
            log::info!("[reset] button reset");
        }
    });
}

fn build_stage(
    document: &web::Document,
    player: Rc<RefCell<audio::BgmPlayer>>,
) -> anyhow::Result<render::Stage> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let button: web::HtmlElement = dom::require_by_id(document, ID_EVASIVE_BUTTON)?;
    let button_text: web::Element = dom::require_selector(&button, SEL_BUTTON_TEXT)?;
    let yes_button: web::Element = dom::require_by_id(document, ID_YES_BUTTON)?;
    let panic_message: web::Element = dom::require_by_id(document, ID_PANIC_MESSAGE)?;

    let crash = overlay::CrashOverlay {
        overlay: dom::require_by_id(document, ID_CRASH_OVERLAY)?,
        container: dom::require_document_selector(document, SEL_CONTAINER)?,
        body: body.clone(),
    };
    let reveal_root: web::Element = dom::require_by_id(document, ID_REVEAL)?;
    let reveal = overlay::RevealOverlay {
        flash: dom::require_selector(&reveal_root, SEL_REVEAL_FLASH)?,
        image: dom::require_by_id(document, ID_REVEAL_IMAGE)?,
        root: reveal_root,
    };

    Ok(render::Stage::new(
        document.clone(),
        body,
        button,
        button_text,
        yes_button,
        panic_message,
        crash,
        reveal,
        player,
    ))
}

fn wire_audio_controls(document: &web::Document, player: &Rc<RefCell<audio::BgmPlayer>>) {
    ui::set_controls_visible(document, SHOW_AUDIO_CONTROLS);

    let controls = player.borrow().controls().clone();
    controls.sync_labels();

    let sliders = [
        (controls.cutoff.input.clone(), false),
        (controls.q.input.clone(), false),
        (controls.volume.input.clone(), true),
    ];
    for (input, is_volume) in sliders {
        let Some(input) = input else { continue };
        let player = player.clone();
        dom::add_listener(&input, "input", move |_ev: web::Event| {
            let p = player.borrow();
            p.controls().sync_labels();
            if is_volume {
                p.apply_volume();
            } else {
                p.apply_filter_settings();
            }
        });
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Audio is optional: a page without #bgm just stays silent.
    let media: Option<web::HtmlMediaElement> = dom::find_by_id(&document, ID_BGM);
    if media.is_none() {
        log::warn!("[audio] no #{} element; music disabled", ID_BGM);
    }
    let player = Rc::new(RefCell::new(audio::BgmPlayer::new(
        media,
        ui::AudioControls::find(&document),
    )));
    wire_audio_controls(&document, &player);

    let stage = Rc::new(build_stage(&document, player.clone())?);
    let zone: web::Element = dom::require_document_selector(&document, SEL_BUTTON_ZONE)?;

    let rng = StdRng::from_entropy();
    let app = Rc::new(RefCell::new(
        AnxiousButton::new(rng).with_reveal_flash(Duration::from_millis(YES_REVEAL_FLASH_MS)),
    ));
    let clock = frame::Clock::start();

    _ = stage
        .button
        .class_list()
        .add_1(crate::core::AnxietyLevel::Calm.css_class());

    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        app: app.clone(),
        stage: stage.clone(),
        clock,
        zone,
        player: player.clone(),
    });
    events::wire_audio_keydown(&document, player);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        stage: stage.clone(),
        clock,
    })));

    APP.with(|slot| *slot.borrow_mut() = Some((app, stage)));
    log::info!("[init] wired");
    Ok(())
}
