//! Small utilities for the order form: input styling, validation feedback
//! and the toast used to report refused submissions.

use common::order::ValidationError;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const INPUT_CLASS: &str = "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-wood-dark focus:border-transparent transition-all";

/// CSS classes for a form control, with an error border when flagged.
pub fn input_class(invalid: bool) -> String {
    let border = if invalid { "border-red-500 bg-red-50" } else { "border-gray-300" };
    format!("{} {}", INPUT_CLASS, border)
}

/// One-line French summary of why the form was refused.
pub fn validation_summary(err: &ValidationError) -> String {
    format!("Merci de corriger le formulaire : {}.", err)
}

/// Displays a temporary message at the bottom of the page for three seconds.
///
/// Used when a submission is refused, to say which inputs need fixing next to
/// the red borders. The text is set as plain text, never parsed as HTML, since
/// it can echo what the visitor typed.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::order::OrderRequest;
    use common::order::validate;

    #[test]
    fn input_class_marks_invalid_controls() {
        assert!(input_class(true).contains("border-red-500"));
        assert!(!input_class(false).contains("border-red-500"));
        assert!(input_class(false).starts_with(INPUT_CLASS));
    }

    #[test]
    fn summary_lists_every_problem() {
        let err = validate(&OrderRequest::default()).unwrap_err();
        assert_eq!(
            validation_summary(&err),
            "Merci de corriger le formulaire : Nom complet est obligatoire; \
             Email est obligatoire; Modèle de planche est obligatoire."
        );
    }
}
