use common::model::progress::UserProgress;

use super::flow::AwardOutcome;

pub enum Msg {
    ProgressLoaded(UserProgress),
    Earn(&'static str),
    AwardSettled(AwardOutcome),
}
