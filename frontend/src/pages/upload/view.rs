//! View rendering for the upload page: mode toggle, the shared file picker,
//! the per-mode fields and the result of the last successful upload.

use common::catalog::{Language, ScriptType};
use common::display::format_file_size;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{chosen_file, input_value, select_value};
use crate::pages::Page;

use super::messages::Msg;
use super::state::{UploadMode, UploadOutcome, UploadPage};

pub fn view(page: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    let form = &page.form;

    html! {
        <div class={Page::Upload.css_class()}>
            <h1>{"Digitize Heritage"}</h1>
            { mode_toggle(form.mode, link) }

            <form class="card upload-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <label class="field">
                    <span>{"File"}</span>
                    <input
                        type="file"
                        accept={form.mode.accept()}
                        onchange={link.callback(|e: Event| Msg::FileChosen(chosen_file(&e)))}
                    />
                </label>
                {
                    form.file.as_ref().map(|file| html! {
                        <p class="file-info">
                            {format!("{} ({})", file.name(), format_file_size(file.size()))}
                        </p>
                    }).unwrap_or_default()
                }

                {
                    match form.mode {
                        UploadMode::Document => document_fields(page, link),
                        UploadMode::Audio => audio_fields(page, link),
                    }
                }

                <label class="field">
                    <span>{"Language"}</span>
                    <select onchange={link.callback(|e: Event| Msg::SetLanguage(select_value(&e)))}>
                        { for Language::ALL.iter().map(|lang| html! {
                            <option value={lang.as_str()} selected={*lang == form.language}>{lang.label()}</option>
                        }) }
                    </select>
                </label>

                <button type="submit" class="primary-btn" disabled={form.submit_disabled()}>
                    { if form.loading { "Processing..." } else { "Upload & Process" } }
                </button>
            </form>

            {
                form.outcome.as_ref().map(|outcome| html! {
                    <UploadResultPanel outcome={outcome.clone()} />
                }).unwrap_or_default()
            }
        </div>
    }
}

fn mode_toggle(current: UploadMode, link: &Scope<UploadPage>) -> Html {
    html! {
        <div class="mode-toggle">
            { for [UploadMode::Document, UploadMode::Audio].into_iter().map(|mode| html! {
                <button
                    type="button"
                    class={classes!("toggle-btn", (mode == current).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetMode(mode))}
                >
                    {mode.label()}
                </button>
            }) }
        </div>
    }
}

fn document_fields(page: &UploadPage, link: &Scope<UploadPage>) -> Html {
    html! {
        <label class="field">
            <span>{"Script"}</span>
            <select onchange={link.callback(|e: Event| Msg::SetScriptType(select_value(&e)))}>
                { for ScriptType::ALL.iter().map(|script| html! {
                    <option value={script.as_str()} selected={*script == page.form.script_type}>{script.label()}</option>
                }) }
            </select>
        </label>
    }
}

fn audio_fields(page: &UploadPage, link: &Scope<UploadPage>) -> Html {
    html! {
        <>
            <label class="field">
                <span>{"Performer"}</span>
                <input
                    type="text"
                    placeholder="Name of the singer or troupe"
                    value={page.form.performer.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetPerformer(input_value(&e)))}
                />
            </label>
            <label class="field">
                <span>{"Region"}</span>
                <input
                    type="text"
                    placeholder="e.g. Rajasthan"
                    value={page.form.region.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetRegion(input_value(&e)))}
                />
            </label>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct UploadResultProps {
    pub outcome: UploadOutcome,
}

/// Result card of the last successful upload.
#[function_component(UploadResultPanel)]
pub fn upload_result_panel(props: &UploadResultProps) -> Html {
    let (heading, id_label, id, text) = match &props.outcome {
        UploadOutcome::Document(doc) => (
            "Document processed",
            "Document ID",
            doc.document_id.clone(),
            doc.extracted_text.clone(),
        ),
        UploadOutcome::Song(song) => (
            "Folk song transcribed",
            "Song ID",
            song.song_id.clone(),
            song.transcription.clone(),
        ),
    };

    html! {
        <div class="card result-panel upload-result">
            <h2>{heading}</h2>
            <p><strong>{format!("{}: ", id_label)}</strong><code class="result-id">{id}</code></p>
            {
                text.map(|text| html! {
                    <pre class="result-text">{text}</pre>
                }).unwrap_or_default()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::upload::{OcrUploadResponse, SpeechUploadResponse};
    use yew::ServerRenderer;

    async fn render(outcome: UploadOutcome) -> String {
        ServerRenderer::<UploadResultPanel>::with_props(move || UploadResultProps { outcome })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn ocr_result_shows_id_and_text() {
        let html = render(UploadOutcome::Document(OcrUploadResponse {
            document_id: "d1".to_string(),
            extracted_text: Some("X".to_string()),
            script_type: None,
            language: None,
            status: None,
        }))
        .await;

        assert!(html.contains("<code class=\"result-id\">d1</code>"));
        assert!(html.contains("<pre class=\"result-text\">X</pre>"));
    }

    #[tokio::test]
    async fn song_without_transcription_omits_text() {
        let html = render(UploadOutcome::Song(SpeechUploadResponse {
            song_id: "s1".to_string(),
            transcription: None,
            performer: None,
            region: None,
            status: None,
        }))
        .await;

        assert!(html.contains("s1"));
        assert!(!html.contains("result-text"));
    }
}
