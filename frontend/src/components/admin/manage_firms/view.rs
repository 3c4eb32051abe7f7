use yew::prelude::*;

use crate::components::admin::firm_form::FirmForm;
use crate::components::admin::firms_table::FirmsTable;

use super::messages::Msg;
use super::state::ManageFirms;

pub fn view(component: &ManageFirms, ctx: &Context<ManageFirms>) -> Html {
    let on_saved = ctx.link().callback(Msg::Saved);
    let on_cancel = ctx.link().callback(|_| Msg::CancelEdit);
    let on_edit = ctx.link().callback(Msg::Edit);
    let on_delete = ctx.link().callback(Msg::Delete);

    html! {
        <div class="manage-firms">
            <FirmForm
                editing={component.editing.clone()}
                categories={ctx.props().categories.clone()}
                {on_saved}
                {on_cancel}
            />

            {
                if component.firms.loading && component.firms.items.is_empty() {
                    html! { <div class="list-status">{"Loading firms..."}</div> }
                } else {
                    html! {
                        <FirmsTable
                            firms={component.firms.items.clone()}
                            categories={ctx.props().categories.clone()}
                            {on_edit}
                            {on_delete}
                            deleting={component.deleting.clone()}
                        />
                    }
                }
            }
        </div>
    }
}
