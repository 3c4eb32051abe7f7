//! Catalog card for one firm: pricing with the discount badge, coupon code,
//! the rating rows, and the first few features.

use yew::{Callback, Component, Context, Html, html};
use yew::Properties;

use common::model::firm::PropFirm;
use common::views::discount_percentage;

use crate::components::helpers::format_usd;

#[derive(Properties, PartialEq)]
pub struct FirmCardProps {
    pub firm: PropFirm,
    pub on_detail: Callback<String>,
    pub on_reviews: Callback<String>,
}

pub struct FirmCard;

impl Component for FirmCard {
    type Message = ();
    type Properties = FirmCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FirmCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let firm = &props.firm;
        let discount = discount_percentage(firm.price, firm.original_price);

        let on_detail = {
            let cb = props.on_detail.clone();
            let id = firm.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let on_reviews = {
            let cb = props.on_reviews.clone();
            let id = firm.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let on_get_started = {
            let url = firm.affiliate_url.clone();
            Callback::from(move |_| {
                if let (Some(window), Some(url)) = (web_sys::window(), url.as_deref()) {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
            })
        };

        html! {
            <div class="firm-card">
                <div class="card-header">
                    <h3>{ &firm.name }</h3>
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

                <p class="description">{ &firm.description }</p>

                <dl class="metrics">
                    <dt>{"Review Score"}</dt>
                    <dd>{ format!("★ {:.1}", firm.review_score) }</dd>
                    <dt>{"Trust Rating"}</dt>
                    <dd>{ format!("{:.1}/10", firm.trust_rating) }</dd>
                    <dt>{"Profit Split"}</dt>
                    <dd>{ format!("{}%", firm.profit_split) }</dd>
                    <dt>{"Payout Rate"}</dt>
                    <dd>{ format!("{}%", firm.payout_rate) }</dd>
                    <dt>{"Funding"}</dt>
                    <dd>{ &firm.funding_amount }</dd>
                </dl>

                {
                    if firm.features.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="features">
                                { for firm.features.iter().take(3).map(|feature| html! {
                                    <li>{ feature }</li>
                                }) }
                            </ul>
                        }
                    }
                }

                <div class="card-actions">
                    <button class="primary" onclick={on_get_started}>{"Get Started"}</button>
                    <button onclick={on_detail}>{"Learn More"}</button>
                    <button onclick={on_reviews}>
                        { format!("Reviews ({})", firm.user_review_count) }
                    </button>
                </div>
            </div>
        }
    }
}
