//! Gamification page: progress of the demo user and the badge catalog.
//!
//! The page never edits progress locally. Awarding a badge posts to the API,
//! shows the server's message, then loads the whole record again
//! (see `flow::award_then_refresh`).

mod flow;
mod messages;
mod state;
mod update;
mod view;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::DEMO_USER_ID;
use crate::helpers::log_failure;

pub use messages::Msg;
pub use state::GamificationPage;

impl Component for GamificationPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GamificationPage::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::user_progress(DEMO_USER_ID).await {
                    Ok(progress) => link.send_message(Msg::ProgressLoaded(progress)),
                    Err(err) => log_failure("Progress fetch", &err),
                }
            });
        }
    }
}
