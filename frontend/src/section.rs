use yew::{classes, html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub class: String,
    pub children: Children,
}

/// Full-width page band with vertical padding.
pub struct Section;

impl Component for Section {
    type Message = ();
    type Properties = SectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Section
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <section class={classes!("py-16", "md:py-24", props.class.clone())}>
                { for props.children.iter() }
            </section>
        }
    }
}
