use yew::platform::spawn_local;
use yew::prelude::*;

use common::validation::validate_firm;

use crate::components::helpers::show_toast;
use crate::store;

use super::messages::{Field, FirmSaved, Msg};
use super::state::FirmForm;

pub fn update(component: &mut FirmForm, ctx: &Context<FirmForm>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            edit(component, field, value);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            component.sync_lists();
            component.errors = validate_firm(&component.draft);
            if !component.errors.is_empty() {
                return true;
            }
            component.submitting = true;
            submit(component, ctx);
            true
        }
        Msg::Saved(Ok(saved)) => {
            component.submitting = false;
            match &saved {
                FirmSaved::Created(_) => {
                    *component = FirmForm::from_editing(None);
                    show_toast("Prop firm added successfully");
                }
                FirmSaved::Updated(_) => {
                    component.errors.clear();
                    show_toast("Prop firm updated successfully");
                }
            }
            ctx.props().on_saved.emit(saved);
            true
        }
        Msg::Saved(Err(err)) => {
            component.submitting = false;
            show_toast(&format!("Could not save firm: {err}"));
            true
        }
        Msg::Cancel => {
            ctx.props().on_cancel.emit(());
            false
        }
    }
}

fn edit(component: &mut FirmForm, field: Field, value: String) {
    let draft = &mut component.draft;
    match field {
        Field::Name => draft.name = value,
        Field::Brand => draft.brand = value,
        Field::Category => {
            draft.category_id = if value.is_empty() { None } else { Some(value) };
        }
        Field::Price => draft.price = parse_f64(&value),
        Field::OriginalPrice => draft.original_price = parse_f64(&value),
        Field::CouponCode => draft.coupon_code = value,
        Field::ReviewScore => draft.review_score = parse_f64(&value),
        Field::TrustRating => draft.trust_rating = parse_f64(&value),
        Field::Description => draft.description = value,
        Field::Features => component.features_input = value,
        Field::Pros => component.pros_input = value,
        Field::Cons => component.cons_input = value,
        Field::LogoUrl => draft.logo_url = value,
        Field::ProfitSplit => draft.profit_split = parse_f64(&value),
        Field::PayoutRate => draft.payout_rate = parse_f64(&value),
        Field::FundingAmount => draft.funding_amount = value,
        Field::StartingFee => draft.starting_fee = parse_f64(&value),
        Field::UserReviewCount => {
            draft.user_review_count = value.trim().parse().unwrap_or(0);
        }
        Field::AffiliateUrl => draft.affiliate_url = value,
    }
}

fn parse_f64(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

fn submit(component: &FirmForm, ctx: &Context<FirmForm>) {
    let link = ctx.link().clone();
    match ctx.props().editing.clone() {
        Some(firm) => {
            let patch = component.draft.to_patch();
            spawn_local(async move {
                let result = store::firms::update(&firm.id, &patch)
                    .await
                    .map(FirmSaved::Updated)
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Saved(result));
            });
        }
        None => {
            let payload = component.draft.to_new_firm();
            spawn_local(async move {
                let result = store::firms::add(&payload)
                    .await
                    .map(FirmSaved::Created)
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Saved(result));
            });
        }
    }
}
