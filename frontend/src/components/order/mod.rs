//! Order form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! The component keeps a `FormSession` from `common` and only translates DOM
//! events into session calls. Validation, mail composition and the
//! submission state machine all live in the session.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderFormProps;
pub use state::OrderFormComponent;

impl Component for OrderFormComponent {
    type Message = Msg;
    type Properties = OrderFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        OrderFormComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
