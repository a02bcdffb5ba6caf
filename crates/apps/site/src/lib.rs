//! Browser entry points for the conference site: globe scene, scroll
//! tracking, reveal gates and stat counters.
//!
//! The JS side owns the renderer. It mounts the globe, calls `frame` once
//! per animation frame and applies the returned JSON.

use std::cell::RefCell;
use std::collections::BTreeMap;

use console_error_panic_hook::set_once;
use page::{
    CONFERENCE_STATS, CountUp, GateOptions, HeroParallax, PageConfig, ScrollTracker,
    VisibilityGate, globe_enabled, progress_bar_percent, stagger_delay_ms,
};
use runtime::{FrameClock, ProgressReader, Subscription};
use scene::{GlobeConfig, GlobeScene};
use serde::{Deserialize, Serialize};
use tracing::Level;
use wasm_bindgen::prelude::*;

mod dom;
mod logging;

/// Everything `configure` accepts. Missing sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub globe: GlobeConfig,
    pub page: PageConfig,
}

struct RevealEntry {
    gate: VisibilityGate,
    callback: js_sys::Function,
}

struct SiteState {
    config: SiteConfig,
    tracker: ScrollTracker,
    progress: ProgressReader,
    clock: FrameClock,
    scene: Option<GlobeScene>,
    listeners: Vec<Subscription>,
    reveals: BTreeMap<u32, RevealEntry>,
    next_reveal: u32,
}

impl SiteState {
    fn new() -> Self {
        let config = SiteConfig::default();
        let (tracker, progress) = ScrollTracker::new(config.page.progress_source.clone());
        Self {
            config,
            tracker,
            progress,
            clock: FrameClock::new(),
            scene: None,
            listeners: Vec::new(),
            reveals: BTreeMap::new(),
            next_reveal: 1,
        }
    }
}

thread_local! {
    static STATE: RefCell<SiteState> = RefCell::new(SiteState::new());
}

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json(value: &impl Serialize) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|s| JsValue::from_str(&s))
        .map_err(js_err)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    logging::init(level);
    track_scroll();
    Ok(())
}

/// Replace the site configuration from JSON. A mounted globe is dropped
/// and must be mounted again.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config: SiteConfig = serde_json::from_str(json).map_err(js_err)?;
    config.globe.validate().map_err(js_err)?;
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.tracker.set_source(config.page.progress_source.clone());
        state.scene = None;
        state.config = config;
    });
    tracing::info!("site configured");
    track_scroll();
    Ok(())
}

/// Whether the viewport is wide enough for the 3D globe.
#[wasm_bindgen]
pub fn globe_available() -> bool {
    let breakpoint = STATE.with(|state| state.borrow().config.page.mobile_breakpoint_px);
    dom::viewport_width().is_some_and(|width| globe_enabled(width, breakpoint))
}

/// Build the globe scene. Returns the scene description as JSON, or `null`
/// on narrow viewports where the page falls back to a static background.
#[wasm_bindgen]
pub fn mount_globe() -> Result<JsValue, JsValue> {
    if !globe_available() {
        tracing::info!("viewport below breakpoint, globe disabled");
        return Ok(JsValue::NULL);
    }

    let description = STATE.with(|state| -> Result<_, JsValue> {
        let mut state = state.borrow_mut();
        let scene = GlobeScene::new(state.config.globe.clone()).map_err(js_err)?;
        let description = scene.world().describe();
        state.scene = Some(scene);
        state.clock.reset();
        Ok(description)
    })?;
    sample_scroll();

    tracing::info!(nodes = description.nodes.len(), "globe mounted");
    description
        .to_json()
        .map(|s| JsValue::from_str(&s))
        .map_err(js_err)
}

/// Drop the globe only; scroll tracking and reveals keep running.
#[wasm_bindgen]
pub fn unmount_globe() {
    STATE.with(|state| state.borrow_mut().scene = None);
}

/// Drop the globe, scroll listeners and every reveal observer. Any later
/// `configure` or `track_*` call reinstalls the listeners.
#[wasm_bindgen]
pub fn unmount() {
    // Subscriptions release outside the borrow.
    let (listeners, reveals) = STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.scene = None;
        (
            std::mem::take(&mut state.listeners),
            std::mem::take(&mut state.reveals),
        )
    });
    drop(listeners);
    drop(reveals);
    tracing::debug!("site unmounted");
}

/// Advance one animation frame and return its `FrameState` as JSON, or
/// `null` when no globe is mounted.
#[wasm_bindgen]
pub fn frame(timestamp_ms: f64) -> Result<JsValue, JsValue> {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        let progress = state.progress.get();
        let frame = state.clock.tick(timestamp_ms);
        match state.scene.as_mut() {
            Some(scene) => to_json(&scene.tick(progress, frame)),
            None => Ok(JsValue::NULL),
        }
    })
}

#[wasm_bindgen]
pub fn scroll_progress() -> f64 {
    STATE.with(|state| state.borrow().progress.get())
}

/// Width of the top progress bar, in percent.
#[wasm_bindgen]
pub fn progress_bar_width() -> f64 {
    progress_bar_percent(scroll_progress())
}

/// Switch scroll tracking to a single element's pass through the viewport.
#[wasm_bindgen]
pub fn track_element(element_id: &str) {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        let source = page::ProgressSource::Element(element_id.to_string());
        state.tracker.set_source(source.clone());
        state.config.page.progress_source = source;
    });
    track_scroll();
}

#[wasm_bindgen]
pub fn track_page() {
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.tracker.set_source(page::ProgressSource::Page);
        state.config.page.progress_source = page::ProgressSource::Page;
    });
    track_scroll();
}

/// Hero opacity and offsets for the current scroll position, as JSON.
#[wasm_bindgen]
pub fn hero_parallax(scroll_y: f64) -> Result<JsValue, JsValue> {
    to_json(&HeroParallax::at(scroll_y))
}

/// Entrance delay for the `index`-th item of a staggered group.
#[wasm_bindgen]
pub fn stagger_delay(base_ms: f64, index: usize) -> f64 {
    let step = STATE.with(|state| state.borrow().config.page.stagger_step_ms);
    stagger_delay_ms(base_ms, index, step)
}

/// Watch a section with the configured reveal options. `callback` receives
/// `true`/`false` whenever visibility changes. Returns a handle for
/// `release_reveal`; a missing element yields a gate that never fires.
#[wasm_bindgen]
pub fn observe_reveal(element_id: &str, callback: js_sys::Function) -> Result<u32, JsValue> {
    let options = STATE.with(|state| state.borrow().config.page.reveal.clone());
    observe_with(element_id, options, callback)
}

/// Same as `observe_reveal`, with the stat-counter threshold.
#[wasm_bindgen]
pub fn observe_counters(element_id: &str, callback: js_sys::Function) -> Result<u32, JsValue> {
    let options = STATE.with(|state| state.borrow().config.page.counter_gate());
    observe_with(element_id, options, callback)
}

#[wasm_bindgen]
pub fn release_reveal(handle: u32) {
    let entry = STATE.with(|state| state.borrow_mut().reveals.remove(&handle));
    if let Some(mut entry) = entry {
        entry.gate.unmount();
    }
}

/// A count-up animation for one statistic.
#[wasm_bindgen]
pub struct Counter {
    inner: CountUp,
}

#[wasm_bindgen]
impl Counter {
    #[wasm_bindgen(constructor)]
    pub fn new(target: u32) -> Counter {
        let strategy = STATE.with(|state| state.borrow().config.page.counter);
        Counter {
            inner: CountUp::new(u64::from(target), strategy),
        }
    }

    pub fn trigger(&mut self) {
        self.inner.trigger();
    }

    /// Timed counters: value at an animation-frame timestamp.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        self.inner.sample_at(now_ms) as f64
    }

    /// Scroll-coupled counters: value at a section progress.
    pub fn sample_progress(&mut self, progress: f64) -> f64 {
        self.inner.sample_progress(progress) as f64
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> f64 {
        self.inner.value() as f64
    }
}

/// The built-in conference statistics as JSON.
#[wasm_bindgen]
pub fn conference_stats() -> Result<JsValue, JsValue> {
    to_json(&CONFERENCE_STATS)
}

fn observe_with(
    element_id: &str,
    options: GateOptions,
    callback: js_sys::Function,
) -> Result<u32, JsValue> {
    let handle = STATE.with(|state| {
        let mut state = state.borrow_mut();
        let handle = state.next_reveal;
        state.next_reveal += 1;
        state.reveals.insert(
            handle,
            RevealEntry {
                gate: VisibilityGate::new(options.clone()),
                callback,
            },
        );
        handle
    });

    let Some(element) = dom::element_by_id(element_id) else {
        tracing::debug!(element_id, "reveal target missing");
        return Ok(handle);
    };
    let observer = dom::observe_intersection(&element, &options, move |ratio| {
        on_reveal_ratio(handle, ratio)
    })?;

    let orphan = STATE.with(|state| match state.borrow_mut().reveals.get_mut(&handle) {
        Some(entry) => {
            entry.gate.mount(Some(observer));
            None
        }
        None => Some(observer),
    });
    drop(orphan);
    Ok(handle)
}

fn on_reveal_ratio(handle: u32, ratio: f64) {
    // A sticky gate releases its observer from inside this callback, so the
    // subscription is dropped while the closure is still running. The JS
    // callback itself runs after the borrow ends.
    let changed = STATE.with(|state| {
        let mut state = state.borrow_mut();
        let entry = state.reveals.get_mut(&handle)?;
        let before = entry.gate.is_visible();
        let after = entry.gate.on_intersection(ratio);
        (before != after).then(|| (after, entry.callback.clone()))
    });
    if let Some((visible, callback)) = changed {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_bool(visible)) {
            web_sys::console::error_1(&err);
        }
    }
}

/// Make sure scroll and resize drive the tracker, then take a fresh sample.
/// Runs regardless of whether the globe is mounted.
fn track_scroll() {
    let installed = ensure_listeners(|| {
        let window = dom::window()?;
        Ok(vec![
            dom::listen(&window, "scroll", sample_scroll)?,
            dom::listen(&window, "resize", sample_scroll)?,
        ])
    });
    if let Err(err) = installed {
        web_sys::console::error_1(&err);
    }
    sample_scroll();
}

fn ensure_listeners(
    install: impl FnOnce() -> Result<Vec<Subscription>, JsValue>,
) -> Result<(), JsValue> {
    let installed = STATE.with(|state| !state.borrow().listeners.is_empty());
    if installed {
        return Ok(());
    }
    let listeners = install()?;
    tracing::debug!(count = listeners.len(), "scroll listeners installed");
    STATE.with(|state| state.borrow_mut().listeners = listeners);
    Ok(())
}

fn sample_scroll() {
    let source = STATE.with(|state| state.borrow().tracker.source().clone());
    let Some(layout) = dom::layout_sample(&source) else {
        return;
    };
    STATE.with(|state| {
        state.borrow_mut().tracker.sample(&layout);
    });
}
