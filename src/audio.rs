use crate::constants::{FILTER_OPEN_CUTOFF_HZ, FILTER_OPEN_TIME_CONSTANT};
use crate::core::audio_params::{
    open_filter_ramps, AudioError, AudioPhase, ParamRamp, STATUS_FILTER_OPENED, STATUS_PLAYING,
};
use crate::ui::AudioControls;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// media element -> low-pass -> gain -> destination
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub filter: web::BiquadFilterNode,
    pub gain: web::GainNode,
    _source: web::MediaElementAudioSourceNode,
}

fn graph_error(label: &'static str) -> impl FnOnce(JsValue) -> AudioError {
    move |e| {
        log::error!("{} error: {:?}", label, e);
        AudioError::Graph(format!("{}: {:?}", label, e))
    }
}

fn build_graph(media: &web::HtmlMediaElement) -> Result<AudioGraph, AudioError> {
    let ctx = web::AudioContext::new().map_err(|e| AudioError::Unsupported(format!("{:?}", e)))?;

    let filter = web::BiquadFilterNode::new(&ctx).map_err(graph_error("BiquadFilterNode"))?;
    filter.set_type(web::BiquadFilterType::Lowpass);
    let gain = web::GainNode::new(&ctx).map_err(graph_error("GainNode"))?;

    // Single use per media element: never rebuild after this succeeds.
    let source = ctx
        .create_media_element_source(media)
        .map_err(graph_error("MediaElementSource"))?;
    source
        .connect_with_audio_node(&filter)
        .map_err(graph_error("connect source"))?;
    filter
        .connect_with_audio_node(&gain)
        .map_err(graph_error("connect filter"))?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(graph_error("connect gain"))?;

    Ok(AudioGraph {
        ctx,
        filter,
        gain,
        _source: source,
    })
}

#[inline]
fn ramp(param: &web::AudioParam, ramp: ParamRamp, now: f64) {
    _ = param.cancel_scheduled_values(now);
    _ = param.set_target_at_time(ramp.target, now, ramp.time_constant);
}

async fn await_promise(promise: Result<js_sys::Promise, JsValue>) -> Result<(), AudioError> {
    let promise = promise.map_err(|e| AudioError::Playback(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| AudioError::Playback(format!("{:?}", e)))
}

async fn start_playback(
    ctx: &web::AudioContext,
    media: &web::HtmlMediaElement,
) -> Result<(), AudioError> {
    await_promise(ctx.resume()).await?;
    await_promise(media.play()).await
}

/// Background music behind the low-pass "muffle" filter.
pub struct BgmPlayer {
    media: Option<web::HtmlMediaElement>,
    controls: AudioControls,
    graph: Option<AudioGraph>,
    phase: AudioPhase,
}

impl BgmPlayer {
    pub fn new(media: Option<web::HtmlMediaElement>, controls: AudioControls) -> Self {
        Self {
            media,
            controls,
            graph: None,
            phase: AudioPhase::Uninitialized,
        }
    }

    pub fn controls(&self) -> &AudioControls {
        &self.controls
    }

    pub fn apply_filter_settings(&self) {
        let Some(g) = &self.graph else { return };
        let now = g.ctx.current_time();
        let settings = self.controls.settings();
        ramp(&g.filter.frequency(), settings.cutoff_ramp(), now);
        ramp(&g.filter.q(), settings.q_ramp(), now);
    }

    pub fn apply_volume(&self) {
        let Some(g) = &self.graph else { return };
        let now = g.ctx.current_time();
        ramp(&g.gain.gain(), self.controls.settings().volume_ramp(), now);
    }

    /// Smoothly open the low-pass all the way instead of snapping it.
    pub fn open_filter(&self) {
        let Some(g) = &self.graph else { return };
        let now = g.ctx.current_time();
        let (cutoff, q) = open_filter_ramps(FILTER_OPEN_CUTOFF_HZ, FILTER_OPEN_TIME_CONSTANT);
        ramp(&g.filter.frequency(), cutoff, now);
        ramp(&g.filter.q(), q, now);
        self.controls.set_status(STATUS_FILTER_OPENED);
        log::info!("[audio] filter opening");
    }

    fn prepare(&mut self) -> Option<(web::AudioContext, web::HtmlMediaElement)> {
        if !self.phase.can_start() {
            return None;
        }
        let media = self.media.clone()?;
        if self.phase.needs_graph() {
            match build_graph(&media) {
                Ok(graph) => {
                    self.graph = Some(graph);
                    self.phase = self.phase.after_graph_built();
                    self.controls.sync_labels();
                    self.apply_filter_settings();
                    self.apply_volume();
                }
                Err(e) => {
                    log::warn!("[audio] {}; music disabled", e);
                    self.phase = self.phase.after_graph_failed();
                    self.controls.set_status(e.status_text());
                    return None;
                }
            }
        }
        self.graph.as_ref().map(|g| (g.ctx.clone(), media))
    }
}

/// Build the graph on first use and start playback. Failures only update the
/// status line; a later call retries playback on the existing graph.
pub async fn ensure_started(player: Rc<RefCell<BgmPlayer>>) {
    let Some((ctx, media)) = player.borrow_mut().prepare() else {
        return;
    };
    let result = start_playback(&ctx, &media).await;

    let mut p = player.borrow_mut();
    p.phase = p.phase.after_playback(&result);
    match result {
        Ok(()) => {
            log::info!("[audio] playing");
            p.controls.set_status(STATUS_PLAYING);
        }
        Err(e) => {
            log::warn!("[audio] {}", e);
            p.controls.set_status(e.status_text());
        }
    }
}
