use common::model::progress::UserProgress;

/// Component state for the gamification page.
#[derive(Default)]
pub struct GamificationPage {
    /// `None` until the first fetch succeeds; stat tiles stay hidden until then.
    pub progress: Option<UserProgress>,
    /// Badge whose award request is in flight.
    pub awarding: Option<&'static str>,
    pub loaded: bool,
}
