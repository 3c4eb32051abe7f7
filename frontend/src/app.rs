//! Root component: holds the active route and the admin session, and hands
//! both down to the pages. Page switching is a plain state change; proper
//! URL routing is outside this application's scope.

use yew::{Component, Context, Html, html};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::admin::AdminPage;
use crate::pages::all_firms::AllFirmsPage;
use crate::pages::cheap_firms::CheapFirmsPage;
use crate::pages::comparison::ComparisonPage;
use crate::pages::firm_detail::FirmDetailPage;
use crate::pages::home::HomePage;
use crate::pages::reviews::ReviewsPage;
use crate::pages::top_firms::TopFirmsPage;
use crate::supabase::auth::{self, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    AllFirms,
    CheapFirms,
    TopFirms,
    Comparison,
    Reviews,
    FirmDetail(String),
    Admin,
}

pub enum Msg {
    Navigate(Route),
    SignedIn(Session),
    SignOut,
}

pub struct App {
    route: Route,
    session: Option<Session>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::Home,
            session: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
            Msg::SignedIn(session) => {
                self.session = Some(session);
                true
            }
            Msg::SignOut => {
                self.session = None;
                auth::cache_admin_hint(false);
                self.route = Route::Home;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(Msg::Navigate);
        let show_admin_link = self.session.is_some() || auth::admin_hint();

        let page = match &self.route {
            Route::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
            Route::AllFirms => html! { <AllFirmsPage on_navigate={on_navigate.clone()} /> },
            Route::CheapFirms => html! { <CheapFirmsPage on_navigate={on_navigate.clone()} /> },
            Route::TopFirms => html! { <TopFirmsPage on_navigate={on_navigate.clone()} /> },
            Route::Comparison => html! { <ComparisonPage /> },
            Route::Reviews => html! {
                <ReviewsPage session={self.session.clone()} />
            },
            Route::FirmDetail(id) => html! {
                <FirmDetailPage
                    firm_id={id.clone()}
                    session={self.session.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::Admin => html! {
                <AdminPage
                    session={self.session.clone()}
                    on_signed_in={link.callback(Msg::SignedIn)}
                    on_sign_out={link.callback(|_| Msg::SignOut)}
                />
            },
        };

        html! {
            <div class="app-root">
                <Navbar
                    route={self.route.clone()}
                    show_admin={show_admin_link}
                    on_navigate={on_navigate}
                />
                { page }
                <Footer />
            </div>
        }
    }
}
