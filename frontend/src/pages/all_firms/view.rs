use yew::prelude::*;

use common::views::filter_firms;

use crate::app::Route;
use crate::components::firms::filter_sidebar::FilterSidebar;
use crate::components::firms::list::FirmList;

use super::messages::Msg;
use super::state::AllFirmsPage;

pub fn view(component: &AllFirmsPage, ctx: &Context<AllFirmsPage>) -> Html {
    let on_change = ctx.link().callback(Msg::SetFilters);
    let on_sort = ctx.link().callback(Msg::SetSort);
    let on_detail = {
        let cb = ctx.props().on_navigate.clone();
        Callback::from(move |id: String| cb.emit(Route::FirmDetail(id)))
    };
    let on_reviews = on_detail.clone();

    let visible = filter_firms(&component.firms.items, &component.filters);

    html! {
        <main class="all-firms-page">
            <header class="page-header">
                <h1>{"All Prop Trading Firms"}</h1>
                {
                    if let Some(message) = &component.firms.error {
                        html! { <div class="load-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
            </header>
            <div class="catalog-layout">
                <FilterSidebar filters={component.filters.clone()} {on_change} />
                <FirmList
                    firms={visible}
                    sort_by={component.sort_by}
                    {on_sort}
                    loading={component.firms.loading && component.firms.items.is_empty()}
                    {on_detail}
                    {on_reviews}
                />
            </div>
        </main>
    }
}
