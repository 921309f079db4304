use super::state::{UploadMode, UploadOutcome};
use crate::api::ApiError;

pub enum Msg {
    SetMode(UploadMode),
    FileChosen(Option<web_sys::File>),
    SetScriptType(String),
    SetLanguage(String),
    SetPerformer(String),
    SetRegion(String),
    Submit,
    Finished(Result<UploadOutcome, ApiError>),
}
