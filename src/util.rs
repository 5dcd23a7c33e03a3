// Utility helpers: browser console logging and small formatting functions.
use log::{Level, LevelFilter};
use wasm_bindgen::JsValue;

/// Route `log` records to the browser console. Safe to call more than once.
pub fn init_logging(level: LevelFilter) {
    let console = fern::Output::call(|record| {
        let msg = JsValue::from_str(&record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    });
    let applied = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.target(), message)))
        .level(level)
        .chain(console)
        .apply();
    if applied.is_err() {
        log::debug!("logger already installed");
    }
}

/// Money with thousands separators, e.g. `50,000`.
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
