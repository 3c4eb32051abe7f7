use yew::prelude::*;

use common::model::category::Category;
use common::model::firm::PropFirm;

use crate::components::helpers::format_usd;

#[derive(Properties, PartialEq)]
pub struct FirmsTableProps {
    pub firms: Vec<PropFirm>,
    #[prop_or_default]
    pub categories: Vec<Category>,
    pub on_edit: Callback<PropFirm>,
    pub on_delete: Callback<String>,
    /// Id of the firm currently being deleted, if any.
    #[prop_or_default]
    pub deleting: Option<String>,
}

pub struct FirmsTable;

impl Component for FirmsTable {
    type Message = ();
    type Properties = FirmsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FirmsTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.firms.is_empty() {
            return html! { <div class="list-status">{"No firms in this section yet."}</div> };
        }

        html! {
            <table class="admin-firms-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Price"}</th>
                        <th>{"Review"}</th>
                        <th>{"Trust"}</th>
                        <th>{"Category"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.firms.iter().map(|firm| row(props, firm)) }
                </tbody>
            </table>
        }
    }
}

// falls back to the raw id for a category that was deleted meanwhile
fn category_label(props: &FirmsTableProps, firm: &PropFirm) -> String {
    match firm.category_id.as_deref() {
        Some(id) => Category::name_of(&props.categories, id)
            .unwrap_or(id)
            .to_string(),
        None => String::new(),
    }
}

fn row(props: &FirmsTableProps, firm: &PropFirm) -> Html {
    let on_edit = {
        let cb = props.on_edit.clone();
        let firm = firm.clone();
        Callback::from(move |_| cb.emit(firm.clone()))
    };
    let on_delete = {
        let cb = props.on_delete.clone();
        let id = firm.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let deleting = props.deleting.as_deref() == Some(firm.id.as_str());

    html! {
        <tr key={firm.id.clone()}>
            <td>{ &firm.name }</td>
            <td>{ format_usd(firm.price) }</td>
            <td>{ format!("{:.1}", firm.review_score) }</td>
            <td>{ format!("{:.1}", firm.trust_rating) }</td>
            <td>{ category_label(props, firm) }</td>
            <td class="row-actions">
                <button onclick={on_edit}>{"Edit"}</button>
                <button class="danger" onclick={on_delete} disabled={deleting}>
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </td>
        </tr>
    }
}
