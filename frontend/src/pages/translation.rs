//! Culturally aware translation between the catalog languages.

use common::catalog::Language;
use common::model::translation::TranslationResult;
use common::requests::TranslateRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::{select_value, textarea_value, AlertReporter, FailureReporter};
use crate::pages::Page;

pub struct TranslationState {
    pub text: String,
    pub source: Language,
    pub target: Language,
    pub loading: bool,
    /// Last successful translation. Survives failed attempts.
    pub result: Option<TranslationResult>,
}

impl Default for TranslationState {
    fn default() -> Self {
        Self {
            text: String::new(),
            source: Language::Hindi,
            target: Language::English,
            loading: false,
            result: None,
        }
    }
}

impl TranslationState {
    /// Source and target may be equal; the backend decides what that means.
    pub fn request(&self) -> Option<TranslateRequest> {
        if self.loading || self.text.trim().is_empty() {
            return None;
        }
        Some(TranslateRequest {
            text: self.text.clone(),
            source_language: self.source.as_str().to_string(),
            target_language: self.target.as_str().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<TranslationResult, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.result = Some(result?);
        Ok(())
    }

    /// Applies a response and reports a failure exactly once.
    pub fn settle(&mut self, result: Result<TranslationResult, ApiError>, reporter: &impl FailureReporter) {
        if let Err(err) = self.finish(result) {
            reporter.report("Translation", &err);
        }
    }
}

pub enum Msg {
    SetText(String),
    SetSource(String),
    SetTarget(String),
    Submit,
    Translated(Result<TranslationResult, ApiError>),
}

pub struct TranslationPage {
    state: TranslationState,
}

impl Component for TranslationPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: TranslationState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetText(text) => {
                self.state.text = text;
                true
            }
            Msg::SetSource(value) => {
                if let Ok(language) = value.parse() {
                    self.state.source = language;
                }
                true
            }
            Msg::SetTarget(value) => {
                if let Ok(language) = value.parse() {
                    self.state.target = language;
                }
                true
            }
            Msg::Submit => {
                let Some(request) = self.state.request() else {
                    return false;
                };
                self.state.loading = true;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::translate(&request).await;
                    link.send_message(Msg::Translated(result));
                });
                true
            }
            Msg::Translated(result) => {
                self.state.settle(result, &AlertReporter);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;

        html! {
            <div class={Page::Translation.css_class()}>
                <h1>{"Cultural Translation"}</h1>
                <form class="card" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="field-row">
                        { language_select("From", state.source, link.callback(|e: Event| Msg::SetSource(select_value(&e)))) }
                        { language_select("To", state.target, link.callback(|e: Event| Msg::SetTarget(select_value(&e)))) }
                    </div>
                    <label class="field">
                        <span>{"Text"}</span>
                        <textarea
                            rows="6"
                            placeholder="Enter the text to translate"
                            value={state.text.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetText(textarea_value(&e)))}
                        />
                    </label>
                    <button type="submit" class="primary-btn" disabled={state.loading}>
                        { if state.loading { "Translating..." } else { "Translate" } }
                    </button>
                </form>

                {
                    state.result.as_ref().map(|result| html! {
                        <div class="card result-panel translation-result">
                            <h2>{"Translation"}</h2>
                            <p class="result-text">{result.translated_text.clone()}</p>
                            {
                                result.cultural_notes.as_ref().map(|notes| html! {
                                    <aside class="cultural-notes">
                                        <h3>{"Cultural notes"}</h3>
                                        <p>{notes.clone()}</p>
                                    </aside>
                                }).unwrap_or_default()
                            }
                        </div>
                    }).unwrap_or_default()
                }
            </div>
        }
    }
}

fn language_select(label: &'static str, selected: Language, onchange: Callback<Event>) -> Html {
    html! {
        <label class="field">
            <span>{label}</span>
            <select {onchange}>
                { for Language::ALL.iter().map(|lang| html! {
                    <option value={lang.as_str()} selected={*lang == selected}>{lang.label()}</option>
                }) }
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        reports: RefCell<Vec<String>>,
    }

    impl FailureReporter for RecordingReporter {
        fn report(&self, operation: &str, err: &ApiError) {
            self.reports.borrow_mut().push(format!("{} failed: {}", operation, err));
        }
    }

    fn translated(text: &str) -> TranslationResult {
        TranslationResult {
            translated_text: text.to_string(),
            cultural_notes: Some("Dharma has no exact English equivalent.".to_string()),
            confidence: None,
        }
    }

    #[test]
    fn failed_translation_keeps_previous_result() {
        let mut state = TranslationState::default();
        state.text = "धर्म".to_string();
        state.finish(Ok(translated("righteous duty"))).unwrap();

        state.loading = true;
        let outcome = state.finish(Err(ApiError::Decode("unexpected end of input".to_string())));

        assert!(outcome.is_err());
        assert!(!state.loading);
        assert_eq!(state.result, Some(translated("righteous duty")));
    }

    #[test]
    fn same_source_and_target_is_allowed() {
        let mut state = TranslationState::default();
        state.text = "வணக்கம்".to_string();
        state.source = Language::Tamil;
        state.target = Language::Tamil;

        let request = state.request().unwrap();
        assert_eq!(request.source_language, request.target_language);
    }

    #[test]
    fn successful_translation_replaces_result() {
        let mut state = TranslationState::default();
        state.finish(Ok(translated("first"))).unwrap();
        state.finish(Ok(translated("second"))).unwrap();
        assert_eq!(state.result.unwrap().translated_text, "second");
    }

    #[test]
    fn failed_translation_reports_once() {
        let reporter = RecordingReporter::default();
        let mut state = TranslationState::default();
        state.settle(Ok(translated("welcome")), &reporter);
        assert!(reporter.reports.borrow().is_empty());

        state.loading = true;
        state.settle(
            Err(ApiError::Status {
                status: 503,
                body: "translator offline".to_string(),
            }),
            &reporter,
        );

        assert_eq!(
            *reporter.reports.borrow(),
            vec!["Translation failed: Request failed with status code 503: translator offline"]
        );
        assert!(!state.loading);
        assert_eq!(state.result, Some(translated("welcome")));
    }
}
