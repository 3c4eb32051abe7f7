//! Community reviews across every firm. Admins (any active session) can
//! delete entries.

use yew::prelude::*;

use crate::components::reviews::list::ReviewList;
use crate::supabase::auth::Session;

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    #[prop_or_default]
    pub session: Option<Session>,
}

pub struct ReviewsPage;

impl Component for ReviewsPage {
    type Message = ();
    type Properties = ReviewsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewsPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class="reviews-page">
                <header class="page-header">
                    <h1>{"Trader Reviews"}</h1>
                    <p>{"What the community says about each firm."}</p>
                </header>
                <ReviewList can_delete={ctx.props().session.is_some()} />
            </main>
        }
    }
}
