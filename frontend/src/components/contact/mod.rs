use common::config::SiteConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactHelpProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

/// "Besoin d'aide ?" block with direct mail and phone links.
pub struct ContactHelp;

impl Component for ContactHelp {
    type Message = ();
    type Properties = ContactHelpProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactHelp
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        html! {
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl font-bold text-wood-dark mb-6">{"Besoin d'aide ?"}</h2>
                    <p class="text-lg text-gray-700 mb-6">
                        {"Pour toute question concernant votre commande, n'hésitez pas à nous contacter directement."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href={config.contact_mailto()}
                            class="px-6 py-3 bg-wood-dark text-white rounded-lg font-semibold hover:bg-wood-dark/90 transition-colors"
                        >
                            { config.contact_email.clone() }
                        </a>
                        <a
                            href={config.contact_phone_uri.clone()}
                            class="px-6 py-3 bg-white text-wood-dark border-2 border-wood-dark rounded-lg font-semibold hover:bg-wood-dark hover:text-white transition-colors"
                        >
                            { config.contact_phone_display.clone() }
                        </a>
                    </div>
                </div>
            </div>
        }
    }
}
