//! Sorted card grid with the sort selector. Purely presentational: the
//! owning page holds the collection and the sort key.

use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::{Callback, Component, Context, Html, Properties, html};

use common::model::firm::PropFirm;
use common::views::{SortKey, sort_firms};

use crate::components::firms::card::FirmCard;

#[derive(Properties, PartialEq)]
pub struct FirmListProps {
    pub firms: Vec<PropFirm>,
    pub sort_by: SortKey,
    pub on_sort: Callback<SortKey>,
    pub loading: bool,
    pub on_detail: Callback<String>,
    pub on_reviews: Callback<String>,
}

pub struct FirmList;

impl Component for FirmList {
    type Message = ();
    type Properties = FirmListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FirmList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.loading {
            return html! { <div class="list-status">{"Loading firms..."}</div> };
        }

        let mut sorted = props.firms.clone();
        sort_firms(&mut sorted, props.sort_by);

        let on_sort = {
            let cb = props.on_sort.clone();
            Callback::from(move |event: web_sys::Event| {
                if let Some(select) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                {
                    cb.emit(parse_sort(&select.value()));
                }
            })
        };

        html! {
            <div class="firm-list">
                <div class="list-header">
                    <h2>{ format!("{} Firms Found", sorted.len()) }</h2>
                    <label>
                        {"Sort by:"}
                        <select onchange={on_sort} value={sort_value(props.sort_by)}>
                            { for [SortKey::Price, SortKey::Review, SortKey::Trust, SortKey::Payout]
                                .iter()
                                .map(|key| html! {
                                    <option
                                        value={sort_value(*key)}
                                        selected={*key == props.sort_by}
                                    >
                                        { key.label() }
                                    </option>
                                }) }
                        </select>
                    </label>
                </div>
                {
                    if sorted.is_empty() {
                        html! {
                            <div class="list-status">
                                {"No firms found matching your criteria."}
                            </div>
                        }
                    } else {
                        html! {
                            <div class="firm-grid">
                                { for sorted.into_iter().map(|firm| {
                                    let key = firm.id.clone();
                                    html! {
                                        <FirmCard
                                            {key}
                                            {firm}
                                            on_detail={props.on_detail.clone()}
                                            on_reviews={props.on_reviews.clone()}
                                        />
                                    }
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}

fn sort_value(key: SortKey) -> &'static str {
    match key {
        SortKey::Price => "price",
        SortKey::Review => "review",
        SortKey::Trust => "trust",
        SortKey::Payout => "payout",
    }
}

fn parse_sort(value: &str) -> SortKey {
    match value {
        "price" => SortKey::Price,
        "trust" => SortKey::Trust,
        "payout" => SortKey::Payout,
        _ => SortKey::Review,
    }
}
