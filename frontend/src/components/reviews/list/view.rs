use yew::prelude::*;

use crate::components::reviews::card::ReviewCard;

use super::messages::Msg;
use super::state::ReviewList;

pub fn view(component: &ReviewList, ctx: &Context<ReviewList>) -> Html {
    let props = ctx.props();

    if component.reviews.loading && component.reviews.items.is_empty() {
        return html! { <div class="list-status">{"Loading reviews..."}</div> };
    }

    if component.reviews.items.is_empty() {
        return html! {
            <div class="list-status">{"No reviews yet. Be the first to write one."}</div>
        };
    }

    let on_delete = ctx.link().callback(Msg::Delete);

    html! {
        <div class="review-list">
            { for component.reviews.items.iter().map(|review| html! {
                <ReviewCard
                    key={review.id.clone()}
                    review={review.clone()}
                    can_delete={props.can_delete}
                    on_delete={on_delete.clone()}
                    deleting={component.deleting.as_deref() == Some(review.id.as_str())}
                />
            }) }
        </div>
    }
}
