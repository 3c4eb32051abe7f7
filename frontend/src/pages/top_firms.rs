//! Editorial shortlist: the five best firms by combined review score and
//! trust rating, shown with their rank.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::firm::PropFirm;
use common::state::CollectionState;
use common::views::top_firms;

use crate::app::Route;
use crate::components::firms::card::FirmCard;
use crate::store;

const SHOWN: usize = 5;

#[derive(Properties, PartialEq)]
pub struct TopFirmsProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
}

pub struct TopFirmsPage {
    firms: CollectionState<PropFirm>,
}

impl Component for TopFirmsPage {
    type Message = Msg;
    type Properties = TopFirmsProps;

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
        let on_detail = {
            let cb = ctx.props().on_navigate.clone();
            Callback::from(move |id: String| cb.emit(Route::FirmDetail(id)))
        };
        let on_reviews = on_detail.clone();

        let ranked = top_firms(&self.firms.items, SHOWN);

        html! {
            <main class="top-firms-page">
                <header class="page-header">
                    <h1>{"Top Rated Prop Firms"}</h1>
                    <p>{"Ranked by review score and trust rating."}</p>
                </header>
                {
                    if self.firms.loading {
                        html! { <div class="list-status">{"Loading firms..."}</div> }
                    } else if ranked.is_empty() {
                        html! { <div class="list-status">{"No firms listed yet."}</div> }
                    } else {
                        html! {
                            <ol class="ranked-firms">
                                { for ranked.into_iter().enumerate().map(|(index, firm)| html! {
                                    <li key={firm.id.clone()} class="ranked-firm">
                                        <span class="rank">{ format!("#{}", index + 1) }</span>
                                        <FirmCard
                                            firm={firm.clone()}
                                            on_detail={on_detail.clone()}
                                            on_reviews={on_reviews.clone()}
                                        />
                                    </li>
                                }) }
                            </ol>
                        }
                    }
                }
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
