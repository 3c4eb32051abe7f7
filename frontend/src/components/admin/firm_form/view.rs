use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::messages::{Field, Msg};
use super::state::FirmForm;

pub fn view(component: &FirmForm, ctx: &Context<FirmForm>) -> Html {
    let draft = &component.draft;
    let editing = ctx.props().editing.is_some();

    let onsubmit = ctx.link().callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="admin-firm-form" {onsubmit}>
            <h3>{ if editing { "Edit firm" } else { "Add a new firm" } }</h3>

            <div class="form-grid">
                { text_input(ctx, component, "Name", Field::Name, "name", draft.name.clone()) }
                { text_input(ctx, component, "Brand", Field::Brand, "brand", draft.brand.clone()) }
                { category_select(ctx, component) }
                { number_input(ctx, component, "Price (USD)", Field::Price, "price", draft.price) }
                { number_input(ctx, component, "Original price (USD)", Field::OriginalPrice, "original_price", draft.original_price) }
                { text_input(ctx, component, "Coupon code", Field::CouponCode, "coupon_code", draft.coupon_code.clone()) }
                { number_input(ctx, component, "Review score (0-5)", Field::ReviewScore, "review_score", draft.review_score) }
                { number_input(ctx, component, "Trust rating (0-10)", Field::TrustRating, "trust_rating", draft.trust_rating) }
                { number_input(ctx, component, "Profit split (%)", Field::ProfitSplit, "profit_split", draft.profit_split) }
                { number_input(ctx, component, "Payout rate (%)", Field::PayoutRate, "payout_rate", draft.payout_rate) }
                { text_input(ctx, component, "Funding amount", Field::FundingAmount, "funding_amount", draft.funding_amount.clone()) }
                { number_input(ctx, component, "Starting fee (USD)", Field::StartingFee, "starting_fee", draft.starting_fee) }
                { text_input(ctx, component, "Logo URL", Field::LogoUrl, "logo_url", draft.logo_url.clone()) }
                { text_input(ctx, component, "Affiliate URL", Field::AffiliateUrl, "affiliate_url", draft.affiliate_url.clone()) }
            </div>

            { textarea_input(ctx, component, "Description", Field::Description, "description", draft.description.clone()) }
            { textarea_input(ctx, component, "Features (comma separated)", Field::Features, "features", component.features_input.clone()) }
            { textarea_input(ctx, component, "Pros (comma separated)", Field::Pros, "pros", component.pros_input.clone()) }
            { textarea_input(ctx, component, "Cons (comma separated)", Field::Cons, "cons", component.cons_input.clone()) }

            <div class="form-actions">
                <button type="submit" disabled={component.submitting}>
                    {
                        if component.submitting {
                            "Saving..."
                        } else if editing {
                            "Save changes"
                        } else {
                            "Add firm"
                        }
                    }
                </button>
                {
                    if editing {
                        let oncancel = ctx.link().callback(|_| Msg::Cancel);
                        html! { <button type="button" class="secondary" onclick={oncancel}>{"Cancel"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}

fn field_error(component: &FirmForm, key: &str) -> Html {
    match component.errors.get(key) {
        Some(message) => html! { <span class="field-error">{ message }</span> },
        None => html! {},
    }
}

fn text_input(
    ctx: &Context<FirmForm>,
    component: &FirmForm,
    label: &str,
    field: Field,
    key: &'static str,
    value: String,
) -> Html {
    let oninput = ctx.link().callback(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::Edit(field, input.value())
    });

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input type="text" {value} {oninput} />
            { field_error(component, key) }
        </label>
    }
}

fn number_input(
    ctx: &Context<FirmForm>,
    component: &FirmForm,
    label: &str,
    field: Field,
    key: &'static str,
    value: f64,
) -> Html {
    let oninput = ctx.link().callback(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::Edit(field, input.value())
    });

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input type="number" step="any" value={value.to_string()} {oninput} />
            { field_error(component, key) }
        </label>
    }
}

fn textarea_input(
    ctx: &Context<FirmForm>,
    component: &FirmForm,
    label: &str,
    field: Field,
    key: &'static str,
    value: String,
) -> Html {
    let oninput = ctx.link().callback(move |event: InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        Msg::Edit(field, area.value())
    });

    html! {
        <label class="form-field form-field-wide">
            <span>{ label }</span>
            <textarea rows="3" {value} {oninput}></textarea>
            { field_error(component, key) }
        </label>
    }
}

fn category_select(ctx: &Context<FirmForm>, component: &FirmForm) -> Html {
    let onchange = ctx.link().callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::Edit(Field::Category, select.value())
    });
    let selected = component.draft.category_id.clone().unwrap_or_default();

    html! {
        <label class="form-field">
            <span>{"Category"}</span>
            <select {onchange} value={selected.clone()}>
                <option value="" selected={selected.is_empty()}>{"Uncategorized"}</option>
                {
                    for ctx.props().categories.iter().map(|category| {
                        html! {
                            <option
                                value={category.id.clone()}
                                selected={category.id == selected}
                            >
                                { &category.name }
                            </option>
                        }
                    })
                }
            </select>
            { field_error(component, "category_id") }
        </label>
    }
}
