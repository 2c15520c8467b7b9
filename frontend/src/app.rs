use common::config::SiteConfig;
use yew::{html, Component, Context, Html};

use crate::components::catalog::{CatalogPanel, CommonFeatures};
use crate::components::contact::ContactHelp;
use crate::components::order::OrderFormComponent;
use crate::section::Section;

pub struct App {
    config: SiteConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: SiteConfig::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Section class="bg-gradient-to-br from-accent-beige via-white to-wood-light/10 pt-32">
                    <div class="container mx-auto px-4">
                        <div class="text-center mb-16">
                            <h1 class="text-5xl md:text-6xl font-bold text-wood-dark mb-6">
                                {"Commandez votre planche"}
                            </h1>
                            <p class="text-xl text-gray-700 max-w-3xl mx-auto">
                                {"Nos planches sont disponibles en boutique et sur commande. \
                                  Remplissez le formulaire ci-dessous pour nous faire part de votre demande."}
                            </p>
                        </div>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                            <OrderFormComponent config={self.config.clone()} />
                            <div class="space-y-6">
                                <CatalogPanel config={self.config.clone()} />
                                <CommonFeatures />
                            </div>
                        </div>
                    </div>
                </Section>
                <Section class="bg-white">
                    <ContactHelp config={self.config.clone()} />
                </Section>
            </>
        }
    }
}
