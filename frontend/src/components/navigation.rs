use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub current: Page,
    pub on_select: Callback<Page>,
}

/// Top bar listing every page. Selecting an entry switches immediately, even
/// when the current page has a half-filled form.
pub struct Navigation;

impl Component for Navigation {
    type Message = ();
    type Properties = NavigationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navigation
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <nav class="nav-shell">
                <div class="nav-brand">
                    <span class="nav-logo">{"🪔"}</span>
                    <span class="nav-title">{"ParamparaSmriti"}</span>
                </div>
                <ul class="nav-items">
                    { for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let onclick = props.on_select.reform(move |_| page);
                        html! {
                            <li>
                                <button
                                    class={classes!("nav-item", (page == props.current).then_some("active"))}
                                    data-page={page.key()}
                                    {onclick}
                                >
                                    <span class="nav-icon">{page.icon()}</span>
                                    <span class="nav-label">{page.label()}</span>
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn lists_all_pages_and_marks_current() {
        let html = ServerRenderer::<Navigation>::with_props(|| NavigationProps {
            current: Page::Search,
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        for page in Page::ALL {
            assert!(html.contains(page.label()));
        }
        assert_eq!(html.matches("nav-item active").count(), 1);
        assert!(html.contains("data-page=\"search\""));
    }
}
