//! Side-by-side comparison of two firms picked from the catalog.

use gloo_console::error;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::firm::PropFirm;
use common::state::CollectionState;
use common::views::discount_percentage;

use crate::components::helpers::format_usd;
use crate::store;

pub enum Msg {
    Loaded(Result<Vec<PropFirm>, String>),
    SelectLeft(String),
    SelectRight(String),
}

pub struct ComparisonPage {
    firms: CollectionState<PropFirm>,
    left: Option<String>,
    right: Option<String>,
}

impl Component for ComparisonPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            firms: CollectionState::new(),
            left: None,
            right: None,
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
            Msg::SelectLeft(id) => {
                self.left = if id.is_empty() { None } else { Some(id) };
                true
            }
            Msg::SelectRight(id) => {
                self.right = if id.is_empty() { None } else { Some(id) };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let left = self.left.as_deref().and_then(|id| self.firms.get(id));
        let right = self.right.as_deref().and_then(|id| self.firms.get(id));

        html! {
            <main class="comparison-page">
                <header class="page-header">
                    <h1>{"Compare Prop Firms"}</h1>
                    <p>{"Pick two firms and see their numbers side by side."}</p>
                </header>
                {
                    if self.firms.loading {
                        html! { <div class="list-status">{"Loading firms..."}</div> }
                    } else {
                        html! {
                            <>
                                <div class="comparison-pickers">
                                    { self.picker(ctx, self.left.as_deref(), Msg::SelectLeft as fn(String) -> Msg) }
                                    { self.picker(ctx, self.right.as_deref(), Msg::SelectRight as fn(String) -> Msg) }
                                </div>
                                {
                                    match (left, right) {
                                        (Some(a), Some(b)) => comparison_table(a, b),
                                        _ => html! {
                                            <div class="list-status">
                                                {"Select a firm on each side to compare."}
                                            </div>
                                        },
                                    }
                                }
                            </>
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

impl ComparisonPage {
    fn picker(
        &self,
        ctx: &Context<Self>,
        selected: Option<&str>,
        to_msg: fn(String) -> Msg,
    ) -> Html {
        let onchange = ctx.link().callback(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            to_msg(select.value())
        });

        html! {
            <select {onchange}>
                <option value="" selected={selected.is_none()}>{"Select a firm"}</option>
                { for self.firms.items.iter().map(|firm| html! {
                    <option
                        value={firm.id.clone()}
                        selected={selected == Some(firm.id.as_str())}
                    >
                        { &firm.name }
                    </option>
                }) }
            </select>
        }
    }
}

fn comparison_table(a: &PropFirm, b: &PropFirm) -> Html {
    let rows = [
        ("Price", format_usd(a.price), format_usd(b.price)),
        (
            "Original price",
            format_usd(a.original_price),
            format_usd(b.original_price),
        ),
        (
            "Discount",
            format!("{}%", discount_percentage(a.price, a.original_price)),
            format!("{}%", discount_percentage(b.price, b.original_price)),
        ),
        (
            "Review score",
            format!("{:.1} / 5", a.review_score),
            format!("{:.1} / 5", b.review_score),
        ),
        (
            "Trust rating",
            format!("{:.1} / 10", a.trust_rating),
            format!("{:.1} / 10", b.trust_rating),
        ),
        (
            "Profit split",
            format!("{}%", a.profit_split),
            format!("{}%", b.profit_split),
        ),
        (
            "Payout rate",
            format!("{}%", a.payout_rate),
            format!("{}%", b.payout_rate),
        ),
        (
            "Funding amount",
            a.funding_amount.clone(),
            b.funding_amount.clone(),
        ),
        (
            "Starting fee",
            format_usd(a.starting_fee),
            format_usd(b.starting_fee),
        ),
        (
            "Coupon",
            a.coupon_code.clone().unwrap_or_else(|| "-".to_string()),
            b.coupon_code.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];

    html! {
        <table class="comparison-table">
            <thead>
                <tr>
                    <th></th>
                    <th>{ &a.name }</th>
                    <th>{ &b.name }</th>
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().map(|(label, left, right)| html! {
                    <tr key={label}>
                        <th>{ label }</th>
                        <td>{ left }</td>
                        <td>{ right }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
