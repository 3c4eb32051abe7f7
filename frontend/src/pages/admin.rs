//! Admin dashboard. Without a session it shows the sign-in form; with one it
//! shows the section sidebar next to the selected management panel.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::category::Category;

use crate::components::admin::login::AdminLogin;
use crate::components::admin::manage_firms::ManageFirms;
use crate::components::admin::sidebar::{AdminSection, AdminSidebar};
use crate::components::reviews::list::ReviewList;
use crate::store;
use crate::supabase::auth::Session;

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    #[prop_or_default]
    pub session: Option<Session>,
    pub on_signed_in: Callback<Session>,
    pub on_sign_out: Callback<()>,
}

pub enum Msg {
    Select(AdminSection),
    Categories(Result<Vec<Category>, String>),
}

pub struct AdminPage {
    section: AdminSection,
    categories: Vec<Category>,
}

impl Component for AdminPage {
    type Message = Msg;
    type Properties = AdminPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            section: AdminSection::AllFirms,
            categories: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(section) => {
                self.section = section;
                true
            }
            Msg::Categories(Ok(categories)) => {
                self.categories = categories;
                true
            }
            Msg::Categories(Err(message)) => {
                error!("failed to load categories:", message);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let Some(_session) = &props.session else {
            return html! {
                <main class="admin-page">
                    <AdminLogin on_signed_in={props.on_signed_in.clone()} />
                </main>
            };
        };

        let on_select = ctx.link().callback(Msg::Select);
        let content = match self.section {
            AdminSection::Reviews => html! {
                <ReviewList can_delete=true />
            },
            section => html! {
                <ManageFirms
                    category_id={section.category_id().map(String::from)}
                    categories={self.categories.clone()}
                />
            },
        };

        html! {
            <main class="admin-page">
                <div class="admin-layout">
                    <AdminSidebar
                        active={self.section}
                        {on_select}
                        on_sign_out={props.on_sign_out.clone()}
                    />
                    <section class="admin-content">
                        { content }
                    </section>
                </div>
            </main>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = store::categories::fetch()
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Categories(outcome));
            });
        }
    }
}
