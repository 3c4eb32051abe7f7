use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReviewForm;

pub fn view(component: &ReviewForm, ctx: &Context<ReviewForm>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    let on_name = link.callback(|event: InputEvent| Msg::SetName(input_value(&event)));
    let on_title = link.callback(|event: InputEvent| Msg::SetTitle(input_value(&event)));
    let on_content = link.callback(|event: InputEvent| Msg::SetContent(textarea_value(&event)));
    let on_submit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="review-form">
            <h3>{ format!("Write a Review for {}", props.firm_name) }</h3>
            <p class="hint">
                {"Share your experience to help other traders make informed decisions."}
            </p>
            <form onsubmit={on_submit}>
                <div class="form-field">
                    <label>{"Your Name"}</label>
                    <input
                        type="text"
                        placeholder="Enter your name"
                        value={component.draft.user_name.clone()}
                        oninput={on_name}
                        disabled={component.submitting}
                    />
                    { field_error(component, "user_name") }
                </div>

                <div class="form-field">
                    <label>{"Rating"}</label>
                    { star_picker(component, ctx) }
                    { field_error(component, "rating") }
                </div>

                <div class="form-field">
                    <label>{"Title (optional)"}</label>
                    <input
                        type="text"
                        placeholder="Sum up your experience"
                        value={component.draft.title.clone()}
                        oninput={on_title}
                        disabled={component.submitting}
                    />
                    { field_error(component, "title") }
                </div>

                <div class="form-field">
                    <label>{"Your Review"}</label>
                    <textarea
                        placeholder="What was trading with this firm like?"
                        value={component.draft.content.clone()}
                        oninput={on_content}
                        disabled={component.submitting}
                    />
                    { field_error(component, "content") }
                </div>

                <button type="submit" class="primary" disabled={component.submitting}>
                    { if component.submitting { "Submitting..." } else { "Submit Review" } }
                </button>
            </form>
        </div>
    }
}

fn star_picker(component: &ReviewForm, ctx: &Context<ReviewForm>) -> Html {
    let link = ctx.link();
    let shown = if component.hovered > 0 {
        component.hovered
    } else {
        component.draft.rating
    };

    html! {
        <div class="star-picker" onmouseleave={link.callback(|_| Msg::HoverRating(0))}>
            { for (1..=5u8).map(|star| {
                let filled = shown >= star;
                html! {
                    <button
                        type="button"
                        class={classes!("star", filled.then_some("filled"))}
                        onclick={link.callback(move |_| Msg::SetRating(star))}
                        onmouseenter={link.callback(move |_| Msg::HoverRating(star))}
                    >
                        { if filled { "★" } else { "☆" } }
                    </button>
                }
            }) }
            {
                if component.draft.rating > 0 {
                    let plural = if component.draft.rating > 1 { "s" } else { "" };
                    html! {
                        <span class="star-count">
                            { format!("{} star{plural}", component.draft.rating) }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn field_error(component: &ReviewForm, field: &str) -> Html {
    match component.errors.get(field) {
        Some(message) => html! { <span class="field-error">{ message }</span> },
        None => html! {},
    }
}

fn input_value(event: &InputEvent) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(event: &InputEvent) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}
