//! Sidebar controls for the catalog filters. Emits a whole `FirmFilters` on
//! every change; the owning page applies it.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::events::InputEvent;
use yew::{Callback, Component, Context, Html, Properties, html};

use common::views::FirmFilters;

#[derive(Properties, PartialEq)]
pub struct FilterSidebarProps {
    pub filters: FirmFilters,
    pub on_change: Callback<FirmFilters>,
}

pub struct FilterSidebar;

#[derive(Clone, Copy)]
enum Bound {
    MinPrice,
    MaxPrice,
    MinReview,
    MaxReview,
    MinTrust,
    MaxTrust,
}

impl Component for FilterSidebar {
    type Message = ();
    type Properties = FilterSidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilterSidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let filters = &props.filters;

        let on_search = {
            let filters = filters.clone();
            let cb = props.on_change.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = input_of(&event) {
                    let mut next = filters.clone();
                    next.search_term = input.value();
                    cb.emit(next);
                }
            })
        };

        html! {
            <aside class="filter-sidebar">
                <section>
                    <h3>{"Search"}</h3>
                    <input
                        type="text"
                        placeholder="Search prop firms..."
                        value={filters.search_term.clone()}
                        oninput={on_search}
                    />
                </section>
                <section>
                    <h3>{"Price Range"}</h3>
                    <div class="range-inputs">
                        { bound_input(props, Bound::MinPrice, "Min", filters.min_price) }
                        { bound_input(props, Bound::MaxPrice, "Max", filters.max_price) }
                    </div>
                </section>
                <section>
                    <h3>{"Review Score Range"}</h3>
                    <div class="range-inputs">
                        { bound_input(props, Bound::MinReview, "Min", filters.min_review_score) }
                        { bound_input(props, Bound::MaxReview, "Max", filters.max_review_score) }
                    </div>
                </section>
                <section>
                    <h3>{"Trust Rating Range"}</h3>
                    <div class="range-inputs">
                        { bound_input(props, Bound::MinTrust, "Min", filters.min_trust_rating) }
                        { bound_input(props, Bound::MaxTrust, "Max", filters.max_trust_rating) }
                    </div>
                </section>
            </aside>
        }
    }
}

fn bound_input(props: &FilterSidebarProps, bound: Bound, placeholder: &str, current: f64) -> Html {
    let filters = props.filters.clone();
    let cb = props.on_change.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(input) = input_of(&event) {
            let mut next = filters.clone();
            let raw = input.value();
            let parsed = raw.trim().parse::<f64>().ok();
            // an emptied max field falls back to unbounded, an emptied min to zero
            match bound {
                Bound::MinPrice => next.min_price = parsed.unwrap_or(0.0),
                Bound::MaxPrice => next.max_price = parsed.unwrap_or(f64::INFINITY),
                Bound::MinReview => next.min_review_score = parsed.unwrap_or(0.0),
                Bound::MaxReview => next.max_review_score = parsed.unwrap_or(f64::INFINITY),
                Bound::MinTrust => next.min_trust_rating = parsed.unwrap_or(0.0),
                Bound::MaxTrust => next.max_trust_rating = parsed.unwrap_or(f64::INFINITY),
            }
            cb.emit(next);
        }
    });

    html! {
        <input
            type="number"
            placeholder={placeholder.to_string()}
            value={bound_value(current)}
            {oninput}
        />
    }
}

fn bound_value(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn input_of(event: &InputEvent) -> Option<HtmlInputElement> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
}
