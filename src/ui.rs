use crate::constants::*;
use crate::core::audio_params::FilterSettings;
use crate::dom;
use web_sys as web;

/// One range input and the element echoing its value.
#[derive(Clone)]
pub struct Slider {
    pub input: Option<web::HtmlInputElement>,
    pub value_label: Option<web::Element>,
}

impl Slider {
    fn find(document: &web::Document, input_id: &str, label_id: &str) -> Self {
        Self {
            input: dom::find_by_id(document, input_id),
            value_label: dom::find_by_id(document, label_id),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.input.as_ref().map(|i| i.value())
    }

    pub fn sync_label(&self) {
        if let (Some(input), Some(label)) = (&self.input, &self.value_label) {
            dom::set_text(label, &input.value());
        }
    }
}

/// The (optional) low-pass/volume debug panel.
#[derive(Clone)]
pub struct AudioControls {
    pub cutoff: Slider,
    pub q: Slider,
    pub volume: Slider,
    pub status: Option<web::Element>,
}

impl AudioControls {
    pub fn find(document: &web::Document) -> Self {
        Self {
            cutoff: Slider::find(document, ID_CUTOFF, ID_CUTOFF_VALUE),
            q: Slider::find(document, ID_Q, ID_Q_VALUE),
            volume: Slider::find(document, ID_VOLUME, ID_VOLUME_VALUE),
            status: dom::find_by_id(document, ID_AUDIO_STATUS),
        }
    }

    pub fn settings(&self) -> FilterSettings {
        let cutoff = self.cutoff.raw();
        let q = self.q.raw();
        let volume = self.volume.raw();
        FilterSettings::from_sliders(cutoff.as_deref(), q.as_deref(), volume.as_deref())
    }

    pub fn sync_labels(&self) {
        self.cutoff.sync_label();
        self.q.sync_label();
        self.volume.sync_label();
    }

    pub fn set_status(&self, text: &str) {
        if let Some(el) = &self.status {
            dom::set_text(el, text);
        }
    }
}

pub fn set_controls_visible(document: &web::Document, visible: bool) {
    if let Some(panel) = dom::find_selector(document, SEL_AUDIO_CONTROLS) {
        _ = panel
            .class_list()
            .toggle_with_force("is-hidden", !visible);
    }
}
