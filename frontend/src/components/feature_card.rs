use yew::{html, AttrValue, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Presentational card: icon, title and a short description. Clickable only
/// when the parent passes `onclick`.
pub struct FeatureCard;

impl Component for FeatureCard {
    type Message = ();
    type Properties = FeatureCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FeatureCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.onclick.is_some() {
            "feature-card clickable"
        } else {
            "feature-card"
        };

        html! {
            <div class={class} onclick={props.onclick.clone()}>
                <div class="feature-icon">{props.icon.clone()}</div>
                <h3 class="feature-title">{props.title.clone()}</h3>
                <p class="feature-description">{props.description.clone()}</p>
            </div>
        }
    }
}
