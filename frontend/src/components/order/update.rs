//! Update function for the order form, Elm style: mutate the component for a
//! `Msg` and report whether the view must re-render.

use common::order::SubmitOutcome;
use gloo_console::warn;
use yew::prelude::*;

use super::helpers::{show_toast, validation_summary};
use super::messages::Msg;
use super::state::OrderFormComponent;

pub fn update(component: &mut OrderFormComponent, ctx: &Context<OrderFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            component.session.update_field(field, value);
            component.invalid_fields.retain(|f| *f != field);
            true
        }
        Msg::Submit => match component.session.submit() {
            Ok(SubmitOutcome::HandedOff(_)) => {
                component.invalid_fields.clear();
                // The handoff gives no completion signal; settle after a fixed pause.
                let link = ctx.link().clone();
                let delay = component.config.submit_delay_ms;
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    link.send_message(Msg::HandoffSettled);
                });
                true
            }
            Ok(SubmitOutcome::Ignored) => false,
            Err(err) => {
                warn!("order refused:", err.to_string());
                component.invalid_fields = err.fields();
                show_toast(&validation_summary(&err));
                true
            }
        },
        Msg::HandoffSettled => component.session.complete_handoff(),
    }
}
