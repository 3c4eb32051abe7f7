use yew::{Callback, Component, Context, Html, Properties, html};

use common::model::review::Review;

use crate::components::helpers::{format_date, star_row};

#[derive(Properties, PartialEq)]
pub struct ReviewCardProps {
    pub review: Review,
    /// Admin sessions get a delete control; everyone else just reads.
    pub can_delete: bool,
    pub on_delete: Callback<String>,
    pub deleting: bool,
}

pub struct ReviewCard;

impl Component for ReviewCard {
    type Message = ();
    type Properties = ReviewCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let review = &props.review;

        let on_delete = {
            let cb = props.on_delete.clone();
            let id = review.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };

        html! {
            <div class="review-card">
                <div class="review-header">
                    <span class="stars">{ star_row(review.rating) }</span>
                    <span class="reviewer">{ &review.user_name }</span>
                    {
                        if review.verified {
                            html! { <span class="verified-badge">{"Verified"}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <span class="date">{ format_date(&review.created_at) }</span>
                </div>
                {
                    if let Some(title) = &review.title {
                        html! { <h4>{ title }</h4> }
                    } else {
                        html! {}
                    }
                }
                <p>{ &review.content }</p>
                <div class="review-footer">
                    <span class="helpful">
                        { format!("{} found this helpful", review.helpful_count) }
                    </span>
                    {
                        if props.can_delete {
                            html! {
                                <button
                                    class="danger"
                                    onclick={on_delete}
                                    disabled={props.deleting}
                                >
                                    { if props.deleting { "Deleting..." } else { "Delete" } }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        }
    }
}
