//! Upload page: digitize a manuscript through OCR or register a folk-song
//! recording for transcription.
//!
//! Split like the other stateful pages:
//! - `state`: the form (`UploadForm`) and submit rules.
//! - `messages`: the `Msg` enum.
//! - `update`: message handling and request spawning.
//! - `view`: rendering, including the result panel.

mod messages;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use state::UploadPage;

impl Component for UploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadPage::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
