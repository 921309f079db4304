//! View rendering for the gamification page: stat tiles and the badge grid.

use std::collections::BTreeSet;

use common::catalog::BADGES;
use common::model::progress::UserProgress;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

use crate::pages::Page;

use super::messages::Msg;
use super::state::GamificationPage;

pub fn view(page: &GamificationPage, ctx: &Context<GamificationPage>) -> Html {
    let earned = page
        .progress
        .as_ref()
        .map(|progress| progress.badges.clone())
        .unwrap_or_default();

    html! {
        <div class={Page::Gamification.css_class()}>
            <h1>{"Your Heritage Journey"}</h1>
            {
                page.progress.as_ref().map(|progress| html! {
                    <ProgressTiles progress={progress.clone()} />
                }).unwrap_or_default()
            }
            <h2>{"Badges"}</h2>
            <BadgeGrid
                {earned}
                awarding={page.awarding}
                on_earn={ctx.link().callback(Msg::Earn)}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressTilesProps {
    pub progress: UserProgress,
}

#[function_component(ProgressTiles)]
pub fn progress_tiles(props: &ProgressTilesProps) -> Html {
    let progress = &props.progress;
    let tiles = [
        ("⭐", "Points", progress.points.to_formatted_string(&Locale::en)),
        ("🏅", "Badges", progress.badges.len().to_formatted_string(&Locale::en)),
        ("📚", "Documents explored", progress.documents_explored.len().to_formatted_string(&Locale::en)),
        ("🌐", "Translations", progress.translations_contributed.to_formatted_string(&Locale::en)),
    ];

    html! {
        <section class="stats-row progress-stats">
            { for tiles.into_iter().map(|(icon, label, value)| html! {
                <div class="stat-tile">
                    <span class="stat-icon">{icon}</span>
                    <span class="stat-value">{value}</span>
                    <span class="stat-label">{label}</span>
                </div>
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeGridProps {
    pub earned: BTreeSet<String>,
    #[prop_or_default]
    pub awarding: Option<&'static str>,
    pub on_earn: Callback<&'static str>,
}

/// The fixed badge catalog. Earned badges carry no action.
#[function_component(BadgeGrid)]
pub fn badge_grid(props: &BadgeGridProps) -> Html {
    html! {
        <div class="badge-grid">
            { for BADGES.iter().map(|badge| {
                let earned = props.earned.contains(badge.name);
                let name = badge.name;
                html! {
                    <div class={classes!("badge-card", earned.then_some("earned"))} key={name}>
                        <div class="badge-icon">{badge.icon}</div>
                        <h3>{badge.title}</h3>
                        <p>{badge.description}</p>
                        {
                            if earned {
                                html! { <span class="badge-earned">{"✓ Earned"}</span> }
                            } else {
                                html! {
                                    <button
                                        class="earn-btn"
                                        disabled={props.awarding.is_some()}
                                        onclick={props.on_earn.reform(move |_: MouseEvent| name)}
                                    >
                                        { if props.awarding == Some(name) { "Awarding..." } else { "Earn" } }
                                    </button>
                                }
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}
