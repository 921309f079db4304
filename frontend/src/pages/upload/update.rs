//! Update function for the upload page.
//!
//! Form edits mutate `UploadForm` in place. `Submit` builds the multipart body
//! for the current mode and spawns exactly one request; its result comes back
//! as `Msg::Finished`.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{log_info, report_failure};

use super::messages::Msg;
use super::state::{UploadMode, UploadOutcome, UploadPage};

pub fn update(page: &mut UploadPage, ctx: &Context<UploadPage>, msg: Msg) -> bool {
    let form = &mut page.form;

    match msg {
        Msg::SetMode(mode) => {
            form.mode = mode;
            true
        }
        Msg::FileChosen(file) => {
            form.file = file;
            true
        }
        Msg::SetScriptType(value) => {
            if let Ok(script_type) = value.parse() {
                form.script_type = script_type;
            }
            true
        }
        Msg::SetLanguage(value) => {
            if let Ok(language) = value.parse() {
                form.language = language;
            }
            true
        }
        Msg::SetPerformer(value) => {
            form.performer = value;
            false
        }
        Msg::SetRegion(value) => {
            form.region = value;
            false
        }
        Msg::Submit => {
            if !form.begin() {
                return false;
            }
            let Some(file) = form.file.clone() else {
                return false;
            };

            let link = ctx.link().clone();
            let language = form.language.as_str();
            match form.mode {
                UploadMode::Document => {
                    let script_type = form.script_type.as_str();
                    spawn_local(async move {
                        let result = api::upload_document(&file, script_type, language)
                            .await
                            .map(UploadOutcome::Document);
                        link.send_message(Msg::Finished(result));
                    });
                }
                UploadMode::Audio => {
                    let performer = form.performer.clone();
                    let region = form.region.clone();
                    spawn_local(async move {
                        let result = api::upload_folk_song(&file, &performer, &region, language)
                            .await
                            .map(UploadOutcome::Song);
                        link.send_message(Msg::Finished(result));
                    });
                }
            }
            true
        }
        Msg::Finished(result) => {
            match form.finish(result) {
                Ok(()) => log_info("Upload completed"),
                Err(err) => report_failure("Upload", &err),
            }
            true
        }
    }
}
