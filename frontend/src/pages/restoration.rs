//! AI restoration of damaged or incomplete texts.

use common::catalog::Language;
use common::display::{confidence_bar_width, confidence_percent};
use common::model::restoration::RestorationResult;
use common::requests::RestoreRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::{input_value, report_failure, select_value, textarea_value};
use crate::pages::Page;

#[derive(Default)]
pub struct RestorationState {
    pub text: String,
    pub language: Language,
    pub context: String,
    pub loading: bool,
    pub result: Option<RestorationResult>,
}

impl RestorationState {
    /// Request for the current form, or `None` when the text is blank or a
    /// request is already running.
    pub fn request(&self) -> Option<RestoreRequest> {
        if self.loading || self.text.trim().is_empty() {
            return None;
        }
        Some(RestoreRequest {
            text: self.text.clone(),
            language: self.language.as_str().to_string(),
            context: self.context.clone(),
        })
    }

    pub fn finish(&mut self, result: Result<RestorationResult, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.result = Some(result?);
        Ok(())
    }
}

pub enum Msg {
    SetText(String),
    SetLanguage(String),
    SetContext(String),
    Submit,
    Restored(Result<RestorationResult, ApiError>),
}

pub struct RestorationPage {
    state: RestorationState,
}

impl Component for RestorationPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: RestorationState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetText(text) => {
                self.state.text = text;
                true
            }
            Msg::SetLanguage(value) => {
                if let Ok(language) = value.parse() {
                    self.state.language = language;
                }
                true
            }
            Msg::SetContext(context) => {
                self.state.context = context;
                false
            }
            Msg::Submit => {
                let Some(request) = self.state.request() else {
                    return false;
                };
                self.state.loading = true;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::restore(&request).await;
                    link.send_message(Msg::Restored(result));
                });
                true
            }
            Msg::Restored(result) => {
                if let Err(err) = self.state.finish(result) {
                    report_failure("Restoration", &err);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;

        html! {
            <div class={Page::Restoration.css_class()}>
                <h1>{"AI Text Restoration"}</h1>
                <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label class="field">
                        <span>{"Damaged text"}</span>
                        <textarea
                            rows="8"
                            placeholder="Paste the damaged or incomplete text. Mark missing parts with [...]"
                            value={state.text.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetText(textarea_value(&e)))}
                        />
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span>{"Language"}</span>
                            <select onchange={link.callback(|e: Event| Msg::SetLanguage(select_value(&e)))}>
                                { for Language::ALL.iter().map(|lang| html! {
                                    <option value={lang.as_str()} selected={*lang == state.language}>{lang.label()}</option>
                                }) }
                            </select>
                        </label>
                        <label class="field">
                            <span>{"Context"}</span>
                            <input
                                type="text"
                                placeholder="e.g. 12th century temple inscription"
                                value={state.context.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::SetContext(input_value(&e)))}
                            />
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled={state.loading}>
                        { if state.loading { "Restoring..." } else { "Restore Text" } }
                    </button>
                </form>

                {
                    state.result.as_ref().map(|result| html! {
                        <RestorationResultPanel result={result.clone()} />
                    }).unwrap_or_default()
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RestorationResultProps {
    pub result: RestorationResult,
}

/// Each section renders only when the backend supplied it; confidence is
/// always drawn, as zero when missing.
#[function_component(RestorationResultPanel)]
pub fn restoration_result_panel(props: &RestorationResultProps) -> Html {
    let result = &props.result;
    let confidence = result.confidence_or_zero();
    let label = confidence_percent(confidence);

    html! {
        <div class="card result-panel restoration-result">
            <h2>{"Restoration Result"}</h2>
            {
                result.restored_text.as_ref().map(|text| html! {
                    <section>
                        <h3>{"Restored text"}</h3>
                        <pre class="result-text">{text.clone()}</pre>
                    </section>
                }).unwrap_or_default()
            }
            <section class="confidence">
                <h3>{"Confidence"}</h3>
                <div class="confidence-track">
                    <div class="confidence-fill" style={format!("width: {}", confidence_bar_width(confidence))}></div>
                </div>
                <span class="confidence-label">{label}</span>
            </section>
            {
                result.explanation.as_ref().map(|explanation| html! {
                    <section>
                        <h3>{"Explanation"}</h3>
                        <p class="explanation">{explanation.clone()}</p>
                    </section>
                }).unwrap_or_default()
            }
            {
                if result.changes_made.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section>
                            <h3>{"Changes made"}</h3>
                            <ul class="changes">
                                { for result.changes_made.iter().map(|change| html! { <li>{change.clone()}</li> }) }
                            </ul>
                        </section>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(result: RestorationResult) -> String {
        ServerRenderer::<RestorationResultPanel>::with_props(move || RestorationResultProps { result })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn confidence_bar_and_label_show_percentage() {
        let html = render(RestorationResult {
            restored_text: Some("धर्मक्षेत्रे कुरुक्षेत्रे".to_string()),
            confidence: Some(0.73),
            explanation: None,
            changes_made: vec!["Filled missing akshara".to_string()],
        })
        .await;

        assert!(html.contains("width: 73.0%"));
        assert!(html.contains("<span class=\"confidence-label\">73.0%</span>"));
        assert!(html.contains("Filled missing akshara"));
        assert!(!html.contains("class=\"explanation\""));
    }

    #[tokio::test]
    async fn missing_fields_are_omitted() {
        let html = render(RestorationResult::default()).await;
        assert!(!html.contains("result-text"));
        assert!(!html.contains("class=\"changes\""));
        assert!(html.contains("0.0%"));
    }

    #[test]
    fn blank_text_issues_no_request() {
        let mut state = RestorationState::default();
        state.text = "   \n".to_string();
        assert!(state.request().is_none());

        state.text = "ॐ".to_string();
        let request = state.request().unwrap();
        assert_eq!(request.language, "hindi");
    }
}
