//! Landing page: hero plus a short strip of the best-rated firms.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::firm::PropFirm;
use common::state::CollectionState;
use common::views::top_firms;

use crate::app::Route;
use crate::components::firms::card::FirmCard;
use crate::components::hero::Hero;
use crate::store;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
}

pub struct HomePage {
    firms: CollectionState<PropFirm>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            firms: CollectionState::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(outcome) => {
                if let Err(message) = &outcome {
                    error!("failed to load firms:", message.clone());
                }
                self.firms.finish_load(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_detail = {
            let cb = props.on_navigate.clone();
            Callback::from(move |id: String| cb.emit(Route::FirmDetail(id)))
        };
        let on_reviews = on_detail.clone();
        let browse_all = {
            let cb = props.on_navigate.clone();
            Callback::from(move |_| cb.emit(Route::AllFirms))
        };

        let featured = top_firms(&self.firms.items, 4);

        html! {
            <main class="home-page">
                <Hero />
                <section class="featured-firms">
                    <h2>{"Top Rated Firms"}</h2>
                    {
                        if self.firms.loading {
                            html! { <div class="list-status">{"Loading firms..."}</div> }
                        } else if featured.is_empty() {
                            html! { <div class="list-status">{"No firms listed yet."}</div> }
                        } else {
                            html! {
                                <div class="firm-grid">
                                    { for featured.into_iter().map(|firm| html! {
                                        <FirmCard
                                            key={firm.id.clone()}
                                            firm={firm.clone()}
                                            on_detail={on_detail.clone()}
                                            on_reviews={on_reviews.clone()}
                                        />
                                    }) }
                                </div>
                            }
                        }
                    }
                    <button class="primary" onclick={browse_all}>
                        {"Browse All Firms"}
                    </button>
                </section>
            </main>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = store::firms::fetch(None)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Loaded(outcome));
            });
        }
    }
}
