//! Story, summary and quiz generation from an archived document.

use std::rc::Rc;

use common::catalog::{Language, StoryType};
use common::display::title_case;
use common::model::document::Document;
use common::model::story::StoryResult;
use common::requests::StoryRequest;
use pulldown_cmark::{html, Event as MdEvent, Parser};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::api::{self, ApiError};
use crate::helpers::{report_failure, select_value};
use crate::pages::Page;

pub struct StoryForm {
    pub document_id: Option<String>,
    pub story_type: StoryType,
    pub target_language: Language,
    pub loading: bool,
    pub result: Option<StoryResult>,
}

impl Default for StoryForm {
    fn default() -> Self {
        Self {
            document_id: None,
            story_type: StoryType::default(),
            target_language: Language::English,
            loading: false,
            result: None,
        }
    }
}

impl StoryForm {
    /// A document must be picked before anything is sent.
    pub fn request(&self) -> Option<StoryRequest> {
        if self.loading {
            return None;
        }
        let document_id = self.document_id.as_ref().filter(|id| !id.is_empty())?;
        Some(StoryRequest {
            document_id: document_id.clone(),
            story_type: self.story_type.as_str().to_string(),
            target_language: self.target_language.as_str().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<StoryResult, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.result = Some(result?);
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct StorytellingProps {
    pub documents: Rc<Vec<Document>>,
}

pub enum Msg {
    SelectDocument(String),
    SetStoryType(String),
    SetLanguage(String),
    Submit,
    Generated(Result<StoryResult, ApiError>),
}

pub struct StorytellingPage {
    form: StoryForm,
}

impl Component for StorytellingPage {
    type Message = Msg;
    type Properties = StorytellingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: StoryForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectDocument(id) => {
                self.form.document_id = (!id.is_empty()).then_some(id);
                true
            }
            Msg::SetStoryType(value) => {
                if let Ok(story_type) = value.parse() {
                    self.form.story_type = story_type;
                }
                true
            }
            Msg::SetLanguage(value) => {
                if let Ok(language) = value.parse() {
                    self.form.target_language = language;
                }
                true
            }
            Msg::Submit => {
                let Some(request) = self.form.request() else {
                    return false;
                };
                self.form.loading = true;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::generate_story(&request).await;
                    link.send_message(Msg::Generated(result));
                });
                true
            }
            Msg::Generated(result) => {
                if let Err(err) = self.form.finish(result) {
                    report_failure("Story generation", &err);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let documents = &ctx.props().documents;
        let selected = form.document_id.as_deref().unwrap_or("");

        html! {
            <div class={Page::Storytelling.css_class()}>
                <h1>{"Interactive Storytelling"}</h1>
                <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label class="field">
                        <span>{"Source document"}</span>
                        <select required={true} onchange={link.callback(|e: Event| Msg::SelectDocument(select_value(&e)))}>
                            <option value="" selected={selected.is_empty()}>{"Select a document"}</option>
                            { for documents.iter().map(|doc| html! {
                                <option value={doc.id.clone()} selected={doc.id == selected}>
                                    {format!("{} ({})", doc.title, doc.language)}
                                </option>
                            }) }
                        </select>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span>{"Format"}</span>
                            <select onchange={link.callback(|e: Event| Msg::SetStoryType(select_value(&e)))}>
                                { for StoryType::ALL.iter().map(|kind| html! {
                                    <option value={kind.as_str()} selected={*kind == form.story_type}>{kind.label()}</option>
                                }) }
                            </select>
                        </label>
                        <label class="field">
                            <span>{"Language"}</span>
                            <select onchange={link.callback(|e: Event| Msg::SetLanguage(select_value(&e)))}>
                                { for Language::ALL.iter().map(|lang| html! {
                                    <option value={lang.as_str()} selected={*lang == form.target_language}>{lang.label()}</option>
                                }) }
                            </select>
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled={form.loading}>
                        { if form.loading { "Generating..." } else { "Generate" } }
                    </button>
                </form>

                {
                    form.result.as_ref().map(|story| html! {
                        <StoryResultPanel story={story.clone()} />
                    }).unwrap_or_default()
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StoryResultProps {
    pub story: StoryResult,
}

#[function_component(StoryResultPanel)]
pub fn story_result_panel(props: &StoryResultProps) -> Html {
    let story = &props.story;

    html! {
        <div class="card result-panel story-result">
            <h2 class="story-type">{title_case(&story.story_type)}</h2>
            <div class="story-content">{ Html::from_html_unchecked(render_markdown(&story.content)) }</div>
            <p class="story-source">{format!("Based on: {}", story.source_document)}</p>
        </div>
    }
}

/// Markdown to HTML with raw HTML in the input shown as text, never injected.
fn render_markdown(input: &str) -> AttrValue {
    let parser = Parser::new(input).map(|event| match event {
        MdEvent::Html(raw) | MdEvent::InlineHtml(raw) => MdEvent::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    AttrValue::from(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn no_document_selected_means_no_request() {
        let mut form = StoryForm::default();
        assert!(form.request().is_none());

        form.document_id = Some(String::new());
        assert!(form.request().is_none());

        form.document_id = Some("d1".to_string());
        form.story_type = StoryType::Quiz;
        let request = form.request().unwrap();
        assert_eq!(request.document_id, "d1");
        assert_eq!(request.story_type, "quiz");
        assert_eq!(request.target_language, "english");
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = render_markdown("## Question 1\n<script>alert(1)</script>");
        assert!(html.contains("<h2>Question 1</h2>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn result_shows_normalized_type_and_source() {
        let html = ServerRenderer::<StoryResultPanel>::with_props(|| StoryResultProps {
            story: StoryResult {
                story_id: None,
                story_type: "interactive".to_string(),
                content: "Once upon a time".to_string(),
                source_document: "Panchatantra.pdf".to_string(),
            },
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("<h2 class=\"story-type\">Interactive</h2>"));
        assert!(html.contains("Once upon a time"));
        assert!(html.contains("Based on: Panchatantra.pdf"));
    }
}
