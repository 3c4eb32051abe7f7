//! One firm's full profile: pricing, metrics, feature and pros/cons lists,
//! and the firm's reviews with the submission form underneath.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::firm::PropFirm;
use common::model::review::Review;
use common::state::DetailState;
use common::views::discount_percentage;

use crate::app::Route;
use crate::components::helpers::format_usd;
use crate::components::reviews::form::ReviewForm;
use crate::components::reviews::list::ReviewList;
use crate::store;
use crate::supabase::auth::Session;

#[derive(Properties, PartialEq)]
pub struct FirmDetailProps {
    pub firm_id: String,
    #[prop_or_default]
    pub session: Option<Session>,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<Option<PropFirm>, String>),
    ReviewSaved(Review),
}

pub struct FirmDetailPage {
    firm: DetailState<PropFirm>,
}

impl Component for FirmDetailPage {
    type Message = Msg;
    type Properties = FirmDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            firm: DetailState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(outcome) => {
                self.firm = DetailState::finish(outcome);
                true
            }
            Msg::ReviewSaved(_) => {
                if let DetailState::Loaded(firm) = &mut self.firm {
                    firm.user_review_count += 1;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let back = {
            let cb = props.on_navigate.clone();
            Callback::from(move |_| cb.emit(Route::AllFirms))
        };

        match &self.firm {
            DetailState::Loading => html! { <div class="list-status">{"Loading firm..."}</div> },
            DetailState::Failed(message) => html! {
                <main class="firm-detail-page">
                    <div class="load-error">
                        { format!("Could not load this firm: {message}") }
                    </div>
                    <button onclick={back}>{"Back to all firms"}</button>
                </main>
            },
            DetailState::Missing => html! {
                <main class="firm-detail-page">
                    <div class="list-status">{"This firm no longer exists."}</div>
                    <button onclick={back}>{"Back to all firms"}</button>
                </main>
            },
            DetailState::Loaded(firm) => self.detail(ctx, firm, back),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().firm_id != old_props.firm_id {
            self.firm = DetailState::Loading;
            load(ctx);
        }
        true
    }
}

impl FirmDetailPage {
    fn detail(&self, ctx: &Context<Self>, firm: &PropFirm, back: Callback<MouseEvent>) -> Html {
        let props = ctx.props();
        let discount = discount_percentage(firm.price, firm.original_price);
        let on_get_started = {
            let url = firm.affiliate_url.clone();
            Callback::from(move |_| {
                if let (Some(window), Some(url)) = (web_sys::window(), url.as_deref()) {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
            })
        };
        let on_review_saved = ctx.link().callback(Msg::ReviewSaved);

        html! {
            <main class="firm-detail-page">
                <button class="back-link" onclick={back}>{"← All firms"}</button>

                <header class="detail-header">
                    {
                        if let Some(logo) = &firm.logo_url {
                            html! { <img class="firm-logo" src={logo.clone()} alt={firm.name.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                    <div>
                        <h1>{ &firm.name }</h1>
                        {
                            if !firm.brand.is_empty() {
                                html! { <span class="brand-tag">{ &firm.brand }</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="pricing">
                        <span class="price">{ format_usd(firm.price) }</span>
                        {
                            if firm.original_price > firm.price {
                                html! {
                                    <>
                                        <span class="original-price">{ format_usd(firm.original_price) }</span>
                                        <span class="discount-badge">{ format!("-{discount}%") }</span>
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </header>

                <p class="description">{ &firm.description }</p>

                <dl class="metrics">
                    <dt>{"Review Score"}</dt>
                    <dd>{ format!("★ {:.1} ({} reviews)", firm.review_score, firm.user_review_count) }</dd>
                    <dt>{"Trust Rating"}</dt>
                    <dd>{ format!("{:.1}/10", firm.trust_rating) }</dd>
                    <dt>{"Profit Split"}</dt>
                    <dd>{ format!("{}%", firm.profit_split) }</dd>
                    <dt>{"Payout Rate"}</dt>
                    <dd>{ format!("{}%", firm.payout_rate) }</dd>
                    <dt>{"Funding"}</dt>
                    <dd>{ &firm.funding_amount }</dd>
                    <dt>{"Starting Fee"}</dt>
                    <dd>{ format_usd(firm.starting_fee) }</dd>
                </dl>

                {
                    if let Some(code) = &firm.coupon_code {
                        html! {
                            <div class="coupon">
                                <span class="coupon-label">{"Coupon Code"}</span>
                                <span class="coupon-code">{ code }</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="detail-columns">
                    { list_section("Features", &firm.features) }
                    { list_section("Pros", &firm.pros) }
                    { list_section("Cons", &firm.cons) }
                </div>

                <button class="primary" onclick={on_get_started}>{"Get Started"}</button>

                <section class="firm-reviews">
                    <h2>{ format!("Reviews for {}", firm.name) }</h2>
                    <ReviewForm
                        firm_id={firm.id.clone()}
                        firm_name={firm.name.clone()}
                        user_id={props.session.as_ref().map(|session| session.user_id.clone())}
                        on_saved={on_review_saved}
                    />
                    <ReviewList
                        firm_id={Some(firm.id.clone())}
                        can_delete={props.session.is_some()}
                    />
                </section>
            </main>
        }
    }
}

fn list_section(title: &str, entries: &[String]) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <div class="list-section">
            <h3>{ title }</h3>
            <ul>
                { for entries.iter().map(|entry| html! { <li>{ entry }</li> }) }
            </ul>
        </div>
    }
}

fn load(ctx: &Context<FirmDetailPage>) {
    let id = ctx.props().firm_id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = store::firms::fetch_one(&id)
            .await
            .map_err(|err| err.to_string());
        link.send_message(Msg::Loaded(outcome));
    });
}
