//! Admin firm form.
//!
//! Holds a `FirmDraft` plus raw comma-separated list inputs; validation gates
//! submission and renders one message under each failing field. The draft is
//! seeded from the `editing` prop whenever it changes: a populated form for
//! updates, empty defaults for a new record (and again after a successful
//! create).

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Field, FirmSaved, Msg};
pub use props::FirmFormProps;
pub use state::FirmForm;

impl Component for FirmForm {
    type Message = Msg;
    type Properties = FirmFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        FirmForm::from_editing(ctx.props().editing.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().editing != old_props.editing {
            *self = FirmForm::from_editing(ctx.props().editing.as_ref());
        }
        true
    }
}
