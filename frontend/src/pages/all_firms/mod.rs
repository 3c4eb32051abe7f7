//! Full catalog page: filter sidebar plus the sorted card grid, kept fresh by
//! a realtime subscription on the firms table.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AllFirmsProps;
pub use state::AllFirmsPage;

impl Component for AllFirmsPage {
    type Message = Msg;
    type Properties = AllFirmsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AllFirmsPage::new()
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
            update::subscribe(self, ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(channel) = self.channel.take() {
            channel.close();
        }
    }
}
