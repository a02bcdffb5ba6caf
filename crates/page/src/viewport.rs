/// Viewports narrower than this skip the 3D globe.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn globe_enabled(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width >= breakpoint_px
}

/// Width of the top progress bar, in percent.
pub fn progress_bar_percent(progress: f64) -> f64 {
    runtime::clamp_progress(progress) * 100.0
}
