use common::config::SiteConfig;
use yew::prelude::*;

/// Properties for the `OrderFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    /// Recipient address and pacing delay. Read once, when the form is created.
    #[prop_or_default]
    pub config: SiteConfig,
}
