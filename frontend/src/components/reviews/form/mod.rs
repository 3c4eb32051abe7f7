//! Public review form: star picker, inline field validation, submit via the
//! reviews store. Resets to defaults after a successful submission.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReviewFormProps;
pub use state::ReviewForm;

impl Component for ReviewForm {
    type Message = Msg;
    type Properties = ReviewFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
