use std::rc::Rc;

use common::model::document::Document;
use common::model::folk_song::FolkSong;
use common::model::search::SearchResponse;
use wasm_bindgen_futures::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::navigation::Navigation;
use crate::helpers::log_failure;
use crate::pages::search::SearchState;
use crate::pages::{Page, PageOutlet};

pub enum Msg {
    Navigate(Page),
    DocumentsLoaded(Vec<Document>),
    FolkSongsLoaded(Vec<FolkSong>),
    SearchChanged(SearchState),
    SearchResults(SearchResponse),
}

/// Root of the application. Owns the active page, the archive listings
/// shared by several pages, and the search form so it outlives page switches.
pub struct App {
    page: Page,
    documents: Rc<Vec<Document>>,
    folk_songs: Rc<Vec<FolkSong>>,
    search: SearchState,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::default(),
            documents: Rc::new(Vec::new()),
            folk_songs: Rc::new(Vec::new()),
            search: SearchState::default(),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
            Msg::DocumentsLoaded(documents) => {
                self.documents = Rc::new(documents);
                true
            }
            Msg::FolkSongsLoaded(songs) => {
                self.folk_songs = Rc::new(songs);
                true
            }
            Msg::SearchChanged(search) => {
                self.search = search;
                true
            }
            Msg::SearchResults(response) => {
                self.search.apply_response(response);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <Navigation current={self.page} on_select={link.callback(Msg::Navigate)} />
                <main class="content">
                    <PageOutlet
                        page={self.page}
                        documents={self.documents.clone()}
                        folk_songs={self.folk_songs.clone()}
                        search={self.search.clone()}
                        on_navigate={link.callback(Msg::Navigate)}
                        on_search_change={link.callback(Msg::SearchChanged)}
                        on_search_results={link.callback(Msg::SearchResults)}
                    />
                </main>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            // Both listings load independently; one failing leaves the other intact.
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::documents().await {
                    Ok(documents) => link.send_message(Msg::DocumentsLoaded(documents)),
                    Err(err) => log_failure("Document fetch", &err),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::folk_songs().await {
                    Ok(songs) => link.send_message(Msg::FolkSongsLoaded(songs)),
                    Err(err) => log_failure("Folk song fetch", &err),
                }
            });
        }
    }
}
