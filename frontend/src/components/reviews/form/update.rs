use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::validation::{ReviewDraft, ValidationErrors, validate_review};

use crate::components::helpers::show_toast;
use crate::store;

use super::messages::Msg;
use super::state::ReviewForm;

pub fn update(component: &mut ReviewForm, ctx: &Context<ReviewForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetName(value) => {
            component.draft.user_name = value;
            true
        }
        Msg::SetTitle(value) => {
            component.draft.title = value;
            true
        }
        Msg::SetContent(value) => {
            component.draft.content = value;
            true
        }
        Msg::SetRating(stars) => {
            component.draft.rating = stars;
            true
        }
        Msg::HoverRating(stars) => {
            component.hovered = stars;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            component.errors = validate_review(&component.draft);
            if !component.errors.is_empty() {
                return true;
            }
            component.submitting = true;
            let review = component
                .draft
                .to_new_review(&ctx.props().firm_id, ctx.props().user_id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = store::reviews::add(&review)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Saved(outcome));
            });
            true
        }
        Msg::Saved(outcome) => {
            component.submitting = false;
            match outcome {
                Ok(review) => {
                    component.draft = ReviewDraft::default();
                    component.errors = ValidationErrors::new();
                    show_toast("Your review has been submitted");
                    ctx.props().on_saved.emit(review);
                }
                Err(message) => {
                    error!("failed to submit review:", message);
                    show_toast("Failed to submit review. Please try again.");
                }
            }
            true
        }
    }
}
