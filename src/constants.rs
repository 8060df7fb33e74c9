// Page-level tunables. Default slider values live in index.html.

// Show the low-pass/volume sliders (debug panel).
pub const SHOW_AUDIO_CONTROLS: bool = false;

// Dip-to-white duration before the reveal image fades in. Must match the
// `.yes-reveal__flash` CSS transition.
pub const YES_REVEAL_FLASH_MS: u64 = 800;

// Cutoff the "yes" transition ramps to: effectively no low-pass.
pub const FILTER_OPEN_CUTOFF_HZ: f32 = 20000.0;
// setTargetAtTime constant for the opening ramp (larger = slower).
pub const FILTER_OPEN_TIME_CONSTANT: f64 = 1.1;

// Fake crash colors applied to the page.
pub const CRASH_BACKGROUND: &str = "#0078d7";

// Element ids and selectors the page must provide.
pub const ID_EVASIVE_BUTTON: &str = "anxiousBtn";
pub const SEL_BUTTON_TEXT: &str = ".button-text";
pub const ID_YES_BUTTON: &str = "yesBtn";
pub const ID_PANIC_MESSAGE: &str = "panicMessage";
pub const SEL_BUTTON_ZONE: &str = ".button-zone";
pub const SEL_CONTAINER: &str = ".container";
pub const ID_CRASH_OVERLAY: &str = "bsod";
pub const ID_REVEAL: &str = "yesReveal";
pub const SEL_REVEAL_FLASH: &str = ".yes-reveal__flash";
pub const ID_REVEAL_IMAGE: &str = "yesRevealImg";

pub const ID_BGM: &str = "bgm";
pub const SEL_AUDIO_CONTROLS: &str = ".audio-controls";
pub const ID_AUDIO_STATUS: &str = "audioStatus";
pub const ID_CUTOFF: &str = "lpCutoff";
pub const ID_CUTOFF_VALUE: &str = "lpCutoffVal";
pub const ID_Q: &str = "lpQ";
pub const ID_Q_VALUE: &str = "lpQVal";
pub const ID_VOLUME: &str = "bgmVol";
pub const ID_VOLUME_VALUE: &str = "bgmVolVal";
