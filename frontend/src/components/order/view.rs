//! View rendering for the order form.
//!
//! Inputs are controlled: every edit is forwarded as `Msg::UpdateField` and the
//! rendered values always come from the session's `OrderRequest`.

use common::model::catalog;
use common::model::order::OrderField;
use common::model::submission::SubmissionState;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::input_class;
use super::messages::Msg;
use super::state::OrderFormComponent;

pub fn view(component: &OrderFormComponent, ctx: &Context<OrderFormComponent>) -> Html {
    let link = ctx.link();
    let submitting = component.session.is_submitting();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-3xl font-bold text-wood-dark mb-6">{"Formulaire de commande"}</h2>

            { success_banner(component.session.state()) }

            <form {onsubmit} class="space-y-6">
                { text_input(component, link, OrderField::Name, "text", "Votre nom") }
                { text_input(component, link, OrderField::Email, "email", "votre@email.com") }
                { text_input(component, link, OrderField::Phone, "tel", &component.config.contact_phone_display) }
                { product_select(component, link) }
                { quantity_input(component, link) }
                { message_area(component, link) }

                <button
                    type="submit"
                    disabled={submitting}
                    class="w-full px-6 py-4 bg-wood-dark text-white rounded-lg font-semibold hover:bg-wood-dark/90 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    { if submitting { "Envoi en cours..." } else { "Envoyer la demande" } }
                </button>
            </form>
        </div>
    }
}

/// Shown once a handoff has settled. It only says the mail client should
/// open; there is no way to know that a mail was sent.
fn success_banner(state: SubmissionState) -> Html {
    if state != SubmissionState::Succeeded {
        return html! {};
    }
    html! {
        <div class="mb-6 p-4 bg-green-50 border border-green-200 rounded-lg text-green-800" role="status">
            <p class="font-semibold">{"Demande envoyée !"}</p>
            <p class="text-sm mt-1">{"Votre client mail s'ouvrira avec votre demande pré-remplie."}</p>
        </div>
    }
}

fn field_label(field: OrderField) -> Html {
    let text = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    html! {
        <label for={field.html_name()} class="block text-sm font-semibold text-wood-dark mb-2">
            { text }
        </label>
    }
}

fn text_input(
    component: &OrderFormComponent,
    link: &Scope<OrderFormComponent>,
    field: OrderField,
    input_type: &'static str,
    placeholder: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });

    html! {
        <div>
            { field_label(field) }
            <input
                type={input_type}
                id={field.html_name()}
                name={field.html_name()}
                required={field.is_required()}
                value={component.session.request().get(field).to_string()}
                {oninput}
                class={input_class(component.is_invalid(field))}
                placeholder={placeholder.to_string()}
            />
        </div>
    }
}

fn product_select(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let field = OrderField::Product;
    let selected = component.session.request().get(field).to_string();
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateField(field, select.value())
    });

    html! {
        <div>
            { field_label(field) }
            <select
                id={field.html_name()}
                name={field.html_name()}
                required=true
                {onchange}
                class={input_class(component.is_invalid(field))}
            >
                <option value="" selected={selected.is_empty()}>{"Sélectionnez un modèle"}</option>
                { for catalog::catalog().iter().map(|entry| html! {
                    <option value={entry.name} selected={selected == entry.name}>
                        { entry.option_label() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn quantity_input(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let field = OrderField::Quantity;
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });

    html! {
        <div>
            { field_label(field) }
            <input
                type="number"
                id={field.html_name()}
                name={field.html_name()}
                min="1"
                value={component.session.request().get(field).to_string()}
                {oninput}
                class={input_class(component.is_invalid(field))}
                placeholder="1"
            />
        </div>
    }
}

fn message_area(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let field = OrderField::Message;
    let oninput = link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::UpdateField(field, area.value())
    });

    html! {
        <div>
            { field_label(field) }
            <textarea
                id={field.html_name()}
                name={field.html_name()}
                rows="5"
                value={component.session.request().get(field).to_string()}
                {oninput}
                class={format!("{} resize-none", input_class(component.is_invalid(field)))}
                placeholder="Vos questions ou demandes particulières..."
            />
        </div>
    }
}
