use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod pages;

fn main() {
    yew::Renderer::<App>::new().render();
}
