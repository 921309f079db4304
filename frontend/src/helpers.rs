//! Small browser utilities shared by the pages.
//!
//! - Failure reporting: console logging plus a blocking `window.alert` for
//!   actions the user started.
//! - Event value extraction for inputs, textareas, selects and file pickers.

use gloo_console::{error, log};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::ApiError;

/// Shows a blocking browser alert. Does nothing outside a browser window.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Logs a failed background fetch. The user is not told; the affected
/// section simply stays empty.
pub fn log_failure(operation: &str, err: &ApiError) {
    error!(format!("{} failed: {}", operation, err));
}

/// Logs a failed user action and shows the raw error text in an alert.
pub fn report_failure(operation: &str, err: &ApiError) {
    log_failure(operation, err);
    show_alert(&format!("{} failed: {}", operation, err));
}

/// Destination of failed user actions.
pub trait FailureReporter {
    fn report(&self, operation: &str, err: &ApiError);
}

/// Console log plus browser alert, see `report_failure`.
pub struct AlertReporter;

impl FailureReporter for AlertReporter {
    fn report(&self, operation: &str, err: &ApiError) {
        report_failure(operation, err);
    }
}

pub fn log_info(message: &str) {
    log!(message.to_string());
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// First file of a `<input type="file">` change event, if any.
pub fn chosen_file(e: &Event) -> Option<File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}
