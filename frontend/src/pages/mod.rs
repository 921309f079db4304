//! The seven page views and the outlet that picks one of them.

pub mod gamification;
pub mod home;
pub mod restoration;
pub mod search;
pub mod storytelling;
pub mod translation;
pub mod upload;

use std::rc::Rc;

use common::model::document::Document;
use common::model::folk_song::FolkSong;
use common::model::search::SearchResponse;
use yew::prelude::*;

use gamification::GamificationPage;
use home::HomePage;
use restoration::RestorationPage;
use search::{SearchPage, SearchState};
use storytelling::StorytellingPage;
use translation::TranslationPage;
use upload::UploadPage;

/// Identity of a page. The active value lives in the root component only;
/// it is not reflected in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Upload,
    Restoration,
    Translation,
    Storytelling,
    Search,
    Gamification,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Upload,
        Page::Restoration,
        Page::Translation,
        Page::Storytelling,
        Page::Search,
        Page::Gamification,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Upload => "upload",
            Page::Restoration => "restore",
            Page::Translation => "translate",
            Page::Storytelling => "story",
            Page::Search => "search",
            Page::Gamification => "gamification",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Upload => "Digitize",
            Page::Restoration => "Restore",
            Page::Translation => "Translate",
            Page::Storytelling => "Stories",
            Page::Search => "Discover",
            Page::Gamification => "Progress",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Upload => "📤",
            Page::Restoration => "✨",
            Page::Translation => "🌐",
            Page::Storytelling => "📖",
            Page::Search => "🔍",
            Page::Gamification => "🏆",
        }
    }

    /// One-line pitch shown on the home page feature cards.
    pub fn blurb(&self) -> &'static str {
        match self {
            Page::Home => "Overview of the archive.",
            Page::Upload => "Scan manuscripts with OCR for Indian scripts or record folk songs.",
            Page::Restoration => "Repair damaged or incomplete texts with AI.",
            Page::Translation => "Translate while keeping cultural nuance intact.",
            Page::Storytelling => "Turn documents into summaries, interactive stories and quizzes.",
            Page::Search => "Find manuscripts and songs by meaning or keyword.",
            Page::Gamification => "Earn badges as you preserve heritage.",
        }
    }

    /// CSS class put on the root element of the page view.
    pub fn css_class(&self) -> String {
        format!("page page-{}", self.key())
    }
}

#[derive(Properties, PartialEq)]
pub struct PageOutletProps {
    pub page: Page,
    pub documents: Rc<Vec<Document>>,
    pub folk_songs: Rc<Vec<FolkSong>>,
    pub search: SearchState,
    pub on_navigate: Callback<Page>,
    pub on_search_change: Callback<SearchState>,
    pub on_search_results: Callback<SearchResponse>,
}

/// Renders the view of the active page and nothing else.
pub struct PageOutlet;

impl Component for PageOutlet {
    type Message = ();
    type Properties = PageOutletProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageOutlet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match props.page {
            Page::Home => html! {
                <HomePage
                    documents={props.documents.clone()}
                    folk_songs={props.folk_songs.clone()}
                    on_navigate={props.on_navigate.clone()}
                />
            },
            Page::Upload => html! { <UploadPage /> },
            Page::Restoration => html! { <RestorationPage /> },
            Page::Translation => html! { <TranslationPage /> },
            Page::Storytelling => html! { <StorytellingPage documents={props.documents.clone()} /> },
            Page::Search => html! {
                <SearchPage
                    state={props.search.clone()}
                    on_change={props.on_search_change.clone()}
                    on_results={props.on_search_results.clone()}
                />
            },
            Page::Gamification => html! { <GamificationPage /> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(page: Page) -> String {
        ServerRenderer::<PageOutlet>::with_props(move || PageOutletProps {
            page,
            documents: Rc::new(Vec::new()),
            folk_songs: Rc::new(Vec::new()),
            search: SearchState::default(),
            on_navigate: Callback::noop(),
            on_search_change: Callback::noop(),
            on_search_results: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn each_page_renders_exactly_its_own_view() {
        for page in Page::ALL {
            let html = render(page).await;
            let own = format!("class=\"{}\"", page.css_class());
            assert_eq!(html.matches(&own).count(), 1, "{:?} view missing", page);

            for other in Page::ALL.iter().filter(|p| **p != page) {
                let marker = format!("class=\"{}\"", other.css_class());
                assert!(!html.contains(&marker), "{:?} leaked into {:?}", other, page);
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = Page::ALL.iter().map(|p| p.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }
}
