use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Repeating browser timer. Cleared when dropped.
pub(super) struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub(super) fn start(period_ms: u32, f: impl FnMut() + 'static) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no window")?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|_| "failed to start interval".to_string())?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web_sys::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// One-shot browser timer. Cleared when dropped; clearing after it fired is a no-op.
///
/// The closure frees itself after it runs. A cancelled closure is left to the JS GC.
pub(super) struct Timeout {
    id: i32,
}

impl Timeout {
    pub(super) fn start(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<Self, String> {
        let window = web_sys::window().ok_or("no window")?;
        let callback = Closure::once_into_js(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|_| "failed to schedule timeout".to_string())?;
        Ok(Self { id })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web_sys::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
