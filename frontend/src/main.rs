use crate::app::App;

mod app;
mod components;
mod mail_composer;
mod section;

fn main() {
    yew::Renderer::<App>::new().render();
}
