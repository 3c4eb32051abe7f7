//! Admin management panel for one catalog section.
//!
//! Owns the firm collection for the selected section, the edit target, and a
//! realtime channel on the firms table. Saves and deletes patch the collection
//! optimistically; remote change notifications trigger a refetch.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ManageFirmsProps;
pub use state::ManageFirms;

impl Component for ManageFirms {
    type Message = Msg;
    type Properties = ManageFirmsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ManageFirms::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::load(ctx);
            update::resubscribe(self, ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().category_id != old_props.category_id {
            self.editing = None;
            self.firms.begin_load();
            update::load(ctx);
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
