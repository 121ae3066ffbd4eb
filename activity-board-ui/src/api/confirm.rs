use activity_board::Confirm;

/// `window.confirm` as a confirmation gate
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };

        window.confirm_with_message(prompt).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "Confirmation dialog unavailable");
            false
        })
    }
}
