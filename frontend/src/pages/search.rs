//! Semantic and keyword search across documents and folk songs.
//!
//! The form and the last response live in the root component (`SearchState`)
//! so they survive switching to another page and back. Only the in-flight
//! flag is local.

use common::catalog::{Language, SearchType};
use common::model::search::{SearchHit, SearchResponse};
use common::requests::{SearchRequest, SEARCH_LIMIT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{input_value, report_failure, select_value};
use crate::pages::Page;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub search_type: SearchType,
    pub language: Option<Language>,
    pub response: Option<SearchResponse>,
}

impl SearchState {
    pub fn request(&self) -> Option<SearchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        Some(SearchRequest {
            query: query.to_string(),
            search_type: self.search_type.as_str().to_string(),
            language: self.language.map(|lang| lang.as_str().to_string()),
            limit: SEARCH_LIMIT,
        })
    }

    /// The new response replaces the previous result set entirely.
    pub fn apply_response(&mut self, response: SearchResponse) {
        self.response = Some(response);
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub state: SearchState,
    pub on_change: Callback<SearchState>,
    pub on_results: Callback<SearchResponse>,
}

pub enum Msg {
    SetQuery(String),
    SetSearchType(SearchType),
    SetLanguage(String),
    Submit,
    Finished,
}

pub struct SearchPage {
    loading: bool,
}

impl Component for SearchPage {
    type Message = Msg;
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { loading: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            Msg::SetQuery(query) => {
                props.on_change.emit(SearchState {
                    query,
                    ..props.state.clone()
                });
                false
            }
            Msg::SetSearchType(search_type) => {
                props.on_change.emit(SearchState {
                    search_type,
                    ..props.state.clone()
                });
                false
            }
            Msg::SetLanguage(value) => {
                props.on_change.emit(SearchState {
                    language: value.parse().ok(),
                    ..props.state.clone()
                });
                false
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                let Some(request) = props.state.request() else {
                    return false;
                };
                self.loading = true;

                // Results go straight to the root so a response that lands
                // after the user left this page is still kept.
                let on_results = props.on_results.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::search(&request).await {
                        Ok(response) => on_results.emit(response),
                        Err(err) => report_failure("Search", &err),
                    }
                    link.send_message(Msg::Finished);
                });
                true
            }
            Msg::Finished => {
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &ctx.props().state;

        html! {
            <div class={Page::Search.css_class()}>
                <h1>{"Discover Heritage"}</h1>
                <form class="card search-form" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search manuscripts, songs, themes..."
                        value={state.query.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetQuery(input_value(&e)))}
                    />
                    <div class="field-row">
                        <div class="mode-toggle">
                            { for SearchType::ALL.iter().map(|kind| {
                                let kind = *kind;
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("toggle-btn", (kind == state.search_type).then_some("active"))}
                                        onclick={link.callback(move |_| Msg::SetSearchType(kind))}
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            }) }
                        </div>
                        <select onchange={link.callback(|e: Event| Msg::SetLanguage(select_value(&e)))}>
                            <option value="" selected={state.language.is_none()}>{"All languages"}</option>
                            { for Language::ALL.iter().map(|lang| html! {
                                <option value={lang.as_str()} selected={Some(*lang) == state.language}>{lang.label()}</option>
                            }) }
                        </select>
                        <button type="submit" class="primary-btn" disabled={self.loading}>
                            { if self.loading { "Searching..." } else { "Search" } }
                        </button>
                    </div>
                </form>

                {
                    state.response.as_ref().map(|response| html! {
                        <SearchResults response={response.clone()} />
                    }).unwrap_or_default()
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub response: SearchResponse,
}

#[function_component(SearchResults)]
pub fn search_results(props: &SearchResultsProps) -> Html {
    let response = &props.response;

    if response.results.is_empty() {
        return html! {
            <div class="card no-results">
                {format!("No results found for \"{}\"", response.query)}
            </div>
        };
    }

    html! {
        <div class="search-results">
            <p class="result-count">{format!("{} results for \"{}\"", response.total_found, response.query)}</p>
            { for response.results.iter().map(search_hit) }
        </div>
    }
}

fn search_hit(hit: &SearchHit) -> Html {
    html! {
        <div class="card search-hit">
            <div class="hit-header">
                <h3 class="hit-title">{hit.title.clone()}</h3>
                <span class="type-badge">{hit.kind.label()}</span>
            </div>
            <p class="hit-content">{hit.content.clone()}</p>
            <div class="hit-meta">
                { hit.language.as_ref().map(|lang| html! { <span class="hit-language">{lang.clone()}</span> }).unwrap_or_default() }
                { hit.region.as_ref().filter(|r| !r.is_empty()).map(|r| html! { <span class="hit-region">{r.clone()}</span> }).unwrap_or_default() }
                { hit.performer.as_ref().filter(|p| !p.is_empty()).map(|p| html! { <span class="hit-performer">{p.clone()}</span> }).unwrap_or_default() }
                {
                    hit.score.map(|score| html! {
                        <span class="hit-score">{format!("Relevance: {:.0}%", score * 100.0)}</span>
                    }).unwrap_or_default()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::search::ContentKind;
    use yew::ServerRenderer;

    async fn render(response: SearchResponse) -> String {
        ServerRenderer::<SearchResults>::with_props(move || SearchResultsProps { response })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn empty_result_echoes_query() {
        let html = render(SearchResponse {
            query: "kolam".to_string(),
            search_type: None,
            total_found: 0,
            results: Vec::new(),
        })
        .await;

        assert!(html.contains("no-results"));
        assert!(html.contains("No results found for"));
        assert!(html.contains("kolam"));
    }

    #[tokio::test]
    async fn hit_without_score_omits_score_element() {
        let html = render(SearchResponse {
            query: "raga".to_string(),
            search_type: Some("keyword".to_string()),
            total_found: 1,
            results: vec![SearchHit {
                id: Some("d1".to_string()),
                title: "Raga Bhairavi".to_string(),
                content: "Morning raga".to_string(),
                kind: ContentKind::Document,
                language: Some("hindi".to_string()),
                region: None,
                performer: None,
                score: None,
            }],
        })
        .await;

        assert!(html.contains("Raga Bhairavi"));
        assert!(html.contains("<span class=\"type-badge\">Document</span>"));
        assert!(html.contains("<span class=\"hit-language\">hindi</span>"));
        assert!(!html.contains("hit-score"));
    }

    #[test]
    fn request_uses_fixed_limit_and_optional_language() {
        let mut state = SearchState {
            query: "  bhakti  ".to_string(),
            ..SearchState::default()
        };
        let request = state.request().unwrap();
        assert_eq!(request.query, "bhakti");
        assert_eq!(request.limit, 20);
        assert_eq!(request.language, None);

        state.language = Some(Language::Tamil);
        state.search_type = SearchType::Keyword;
        let request = state.request().unwrap();
        assert_eq!(request.language.as_deref(), Some("tamil"));
        assert_eq!(request.search_type, "keyword");
    }

    #[test]
    fn blank_query_issues_no_request() {
        let state = SearchState {
            query: "   ".to_string(),
            ..SearchState::default()
        };
        assert!(state.request().is_none());
    }

    #[test]
    fn new_response_replaces_old_set() {
        let mut state = SearchState::default();
        state.apply_response(SearchResponse {
            query: "a".to_string(),
            search_type: None,
            total_found: 2,
            results: Vec::new(),
        });
        state.apply_response(SearchResponse {
            query: "b".to_string(),
            search_type: None,
            total_found: 0,
            results: Vec::new(),
        });
        let response = state.response.unwrap();
        assert_eq!(response.query, "b");
        assert_eq!(response.total_found, 0);
    }
}
