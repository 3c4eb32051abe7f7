//! Review list with a live subscription.
//!
//! On first render it fetches the collection and opens exactly one realtime
//! subscription (scoped to the firm filter when present). Any change event
//! triggers a refetch. The subscription is closed on unmount and whenever
//! the firm filter prop changes, then reopened for the new filter.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReviewListProps;
pub use state::ReviewList;

impl Component for ReviewList {
    type Message = Msg;
    type Properties = ReviewListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewList::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::load(self, ctx);
            update::resubscribe(self, ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().firm_id != old_props.firm_id {
            self.reviews.begin_load();
            update::load(self, ctx);
            update::resubscribe(self, ctx);
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(channel) = self.channel.take() {
            channel.close();
        }
    }
}
