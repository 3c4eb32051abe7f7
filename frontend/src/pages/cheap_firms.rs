//! Budget picks: the ten cheapest firms in the catalog.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::firm::PropFirm;
use common::state::CollectionState;
use common::views::cheapest_firms;

use crate::app::Route;
use crate::components::firms::card::FirmCard;
use crate::store;

const SHOWN: usize = 10;

#[derive(Properties, PartialEq)]
pub struct CheapFirmsProps {
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
}

pub struct CheapFirmsPage {
    firms: CollectionState<PropFirm>,
}

impl Component for CheapFirmsPage {
    type Message = Msg;
    type Properties = CheapFirmsProps;

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

        let cheapest = cheapest_firms(&self.firms.items, SHOWN);

        html! {
            <main class="cheap-firms-page">
                <header class="page-header">
                    <h1>{"Cheapest Prop Firms"}</h1>
                    <p>{"Start trading funded capital with the lowest entry fees."}</p>
                </header>
                {
                    if self.firms.loading {
                        html! { <div class="list-status">{"Loading firms..."}</div> }
                    } else if cheapest.is_empty() {
                        html! { <div class="list-status">{"No firms listed yet."}</div> }
                    } else {
                        html! {
                            <div class="firm-grid">
                                { for cheapest.into_iter().map(|firm| html! {
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
