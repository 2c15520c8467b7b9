use common::mail::{MailComposer, MailDraft};
use gloo_console::{error, log};

/// Hands drafts to the browser by navigating the current tab to the
/// `mailto:` URI, which opens whatever mail handler the system has set up.
#[derive(Default)]
pub struct LocationMailComposer;

impl MailComposer for LocationMailComposer {
    fn compose_and_open(&mut self, draft: &MailDraft) {
        let Some(window) = web_sys::window() else {
            error!("mail handoff skipped: no window");
            return;
        };
        log!("opening mail client for", draft.recipient.clone());
        if let Err(err) = window.location().set_href(&draft.to_mailto_uri()) {
            error!("mail handoff failed to start", err);
        }
    }
}
