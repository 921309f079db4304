//! Landing page: archive counts, feature shortcuts, a preview of the first
//! documents and the backend health panel.

use std::rc::Rc;

use common::display::truncate_chars;
use common::model::document::Document;
use common::model::folk_song::FolkSong;
use common::model::health::HealthStatus;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::feature_card::FeatureCard;
use crate::helpers::{log_failure, report_failure, show_alert};
use crate::pages::Page;

/// Number of documents previewed on the landing page.
const PREVIEW_COUNT: usize = 4;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub documents: Rc<Vec<Document>>,
    pub folk_songs: Rc<Vec<FolkSong>>,
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    HealthLoaded(HealthStatus),
    WelcomeLoaded(String),
    PreviewVr(String),
}

pub struct HomePage {
    health: Option<HealthStatus>,
    welcome: Option<String>,
    loaded: bool,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            health: None,
            welcome: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HealthLoaded(health) => {
                self.health = Some(health);
                true
            }
            Msg::WelcomeLoaded(message) => {
                self.welcome = Some(message);
                true
            }
            Msg::PreviewVr(document_id) => {
                spawn_local(async move {
                    match api::vr_preview(&document_id).await {
                        Ok(preview) => show_alert(&preview.summary()),
                        Err(err) => report_failure("3D preview", &err),
                    }
                });
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::health().await {
                    Ok(health) => link.send_message(Msg::HealthLoaded(health)),
                    Err(err) => log_failure("Health check", &err),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::welcome().await {
                    Ok(welcome) => link.send_message(Msg::WelcomeLoaded(welcome.message)),
                    Err(err) => log_failure("Welcome message", &err),
                }
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class={Page::Home.css_class()}>
                <section class="hero">
                    <h1>{"Preserving India's Cultural Heritage"}</h1>
                    {
                        if let Some(welcome) = &self.welcome {
                            html! { <p class="hero-subtitle">{welcome.clone()}</p> }
                        } else {
                            html! { <p class="hero-subtitle">{"Digitize, restore, translate and rediscover manuscripts and folk songs."}</p> }
                        }
                    }
                </section>

                { stats(props) }
                { feature_grid(&props.on_navigate) }
                { document_preview(&props.documents, ctx) }
                { self.health.as_ref().map(health_panel).unwrap_or_default() }
            </div>
        }
    }
}

fn stats(props: &HomeProps) -> Html {
    html! {
        <section class="stats-row">
            <div class="stat-tile">
                <span class="stat-value">{props.documents.len().to_string()}</span>
                <span class="stat-label">{"Documents"}</span>
            </div>
            <div class="stat-tile">
                <span class="stat-value">{props.folk_songs.len().to_string()}</span>
                <span class="stat-label">{"Folk Songs"}</span>
            </div>
        </section>
    }
}

fn feature_grid(on_navigate: &Callback<Page>) -> Html {
    html! {
        <section class="feature-grid">
            { for Page::ALL.iter().filter(|page| **page != Page::Home).map(|page| {
                let page = *page;
                html! {
                    <FeatureCard
                        icon={page.icon()}
                        title={page.label()}
                        description={page.blurb()}
                        onclick={on_navigate.reform(move |_: MouseEvent| page)}
                    />
                }
            }) }
        </section>
    }
}

fn document_preview(documents: &[Document], ctx: &Context<HomePage>) -> Html {
    if documents.is_empty() {
        return html! {
            <section class="document-preview">
                <h2>{"Recent Documents"}</h2>
                <p class="empty-note">{"No documents yet. Upload a manuscript to get started."}</p>
            </section>
        };
    }

    html! {
        <section class="document-preview">
            <h2>{"Recent Documents"}</h2>
            <div class="document-grid">
                { for documents.iter().take(PREVIEW_COUNT).map(|doc| {
                    let id = doc.id.clone();
                    html! {
                        <div class="document-card" key={doc.id.clone()}>
                            <h3>{doc.title.clone()}</h3>
                            <div class="document-meta">
                                <span class="tag">{doc.language.clone()}</span>
                                { doc.script_type.as_ref().map(|s| html! { <span class="tag">{s.clone()}</span> }).unwrap_or_default() }
                                { doc.region.as_ref().map(|r| html! { <span class="tag">{r.clone()}</span> }).unwrap_or_default() }
                            </div>
                            {
                                doc.extracted_text.as_ref().map(|text| html! {
                                    <p class="document-excerpt">{truncate_chars(text, 120)}</p>
                                }).unwrap_or_default()
                            }
                            <button class="link-btn" onclick={ctx.link().callback(move |_| Msg::PreviewVr(id.clone()))}>
                                {"🥽 3D preview"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

fn health_panel(health: &HealthStatus) -> Html {
    html! {
        <section class="health-panel">
            <h2>{"System Status"}</h2>
            <ul>
                { for health.services.iter().map(|(name, status)| {
                    let class = if HealthStatus::is_service_healthy(status) { "status-dot ok" } else { "status-dot degraded" };
                    html! {
                        <li key={name.clone()}>
                            <span class={class}></span>
                            <span class="service-name">{name.clone()}</span>
                            <span class="service-status">{status.clone()}</span>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn document(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: format!("Manuscript {}", id),
            language: "sanskrit".to_string(),
            script_type: Some("devanagari".to_string()),
            region: None,
            extracted_text: None,
            description: None,
            time_period: None,
            restored_text: None,
            restoration_confidence: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn previews_only_first_four_documents() {
        let html = ServerRenderer::<HomePage>::with_props(|| HomeProps {
            documents: Rc::new((1..=6).map(|i| document(&i.to_string())).collect()),
            folk_songs: Rc::new(Vec::new()),
            on_navigate: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("class=\"document-card\"").count(), 4);
        assert!(html.contains("Manuscript 4"));
        assert!(!html.contains("Manuscript 5"));
        assert!(!html.contains("health-panel"));
    }
}
