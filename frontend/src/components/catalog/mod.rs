//! Product panel next to the order form: the two boards with their
//! dimensions, and the characteristics they share.

use common::config::SiteConfig;
use common::model::catalog::{self, CatalogEntry, COMMON_FEATURES};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CatalogPanelProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

pub struct CatalogPanel;

impl Component for CatalogPanel {
    type Message = ();
    type Properties = CatalogPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        html! {
            <div class="bg-white rounded-lg shadow-lg p-8">
                <h2 class="text-3xl font-bold text-wood-dark mb-6">{"Nos modèles disponibles"}</h2>
                <p class="text-gray-700 mb-6">
                    <strong>{format!("{} modèles de planches", catalog::catalog().len())}</strong>
                    {" sont commercialisés en boutique et sont disponibles en nous envoyant une demande à : "}
                    <a href={config.contact_mailto()} class="text-wood-dark underline font-semibold hover:text-wood-dark/80">
                        { config.contact_email.clone() }
                    </a>
                </p>
                <div class="space-y-6">
                    { for catalog::catalog().iter().map(|entry| entry_card(config, entry)) }
                </div>
            </div>
        }
    }
}

fn entry_card(config: &SiteConfig, entry: &CatalogEntry) -> Html {
    // Missing pictures are hidden instead of showing a broken image.
    let onerror = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            img.style().set_property("display", "none").ok();
        }
    });

    html! {
        <div key={entry.id} class="border border-gray-200 rounded-lg p-6 hover:shadow-md transition-shadow">
            <div class="flex items-start gap-4">
                <div class="relative w-24 h-24 flex-shrink-0 rounded-lg overflow-hidden bg-accent-beige/20">
                    <img
                        src={config.image_path(entry.image)}
                        alt={entry.name}
                        class="object-contain p-2 w-full h-full"
                        {onerror}
                    />
                </div>
                <div class="flex-1">
                    <h3 class="text-xl font-bold text-wood-dark mb-2">{ entry.name }</h3>
                    <div class="space-y-1 text-sm text-gray-700">
                        <p><strong>{"Dimensions:"}</strong>{" "}{ entry.dimensions }</p>
                        <p><strong>{"Poignées:"}</strong>{" "}{ entry.handles }</p>
                        <p><strong>{"Épaisseur:"}</strong>{" "}{ entry.thickness }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub struct CommonFeatures;

impl Component for CommonFeatures {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CommonFeatures
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="bg-accent-beige/30 rounded-lg p-6">
                <h3 class="text-xl font-bold text-wood-dark mb-4">{"Caractéristiques communes"}</h3>
                <ul class="space-y-2 text-gray-700">
                    { for COMMON_FEATURES.iter().map(|feature| html! {
                        <li class="flex items-start">
                            <span class="text-accent-green mr-2 mt-1">{"✓"}</span>
                            <span>{ *feature }</span>
                        </li>
                    }) }
                </ul>
            </div>
        }
    }
}
