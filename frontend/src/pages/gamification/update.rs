//! Update function for the gamification page.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::DEMO_USER_ID;
use crate::helpers::{log_failure, report_failure, show_alert};

use super::flow::{award_then_refresh, AwardOutcome, HttpProgressService};
use super::messages::Msg;
use super::state::GamificationPage;

pub fn update(page: &mut GamificationPage, ctx: &Context<GamificationPage>, msg: Msg) -> bool {
    match msg {
        Msg::ProgressLoaded(progress) => {
            page.progress = Some(progress);
            true
        }
        Msg::Earn(badge) => {
            if page.awarding.is_some() {
                return false;
            }
            page.awarding = Some(badge);

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome =
                    award_then_refresh(&HttpProgressService, DEMO_USER_ID, badge, show_alert).await;
                link.send_message(Msg::AwardSettled(outcome));
            });
            true
        }
        Msg::AwardSettled(outcome) => {
            page.awarding = None;
            match outcome {
                AwardOutcome::Refreshed(progress) => page.progress = Some(progress),
                AwardOutcome::AwardFailed(err) => report_failure("Badge award", &err),
                AwardOutcome::RefreshFailed(err) => log_failure("Progress refresh", &err),
            }
            true
        }
    }
}
