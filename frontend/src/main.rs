use crate::app::App;

mod app;
mod components;
mod pages;
mod store;
mod supabase;

fn main() {
    yew::Renderer::<App>::new().render();
}
