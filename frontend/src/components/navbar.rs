use yew::{Callback, Component, Context, Html, Properties, classes, html};

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub route: Route,
    pub show_admin: bool,
    pub on_navigate: Callback<Route>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="navbar">
                <button class="brand" onclick={nav(props, Route::Home)}>
                    {"PropFirmHub"}
                </button>
                <div class="nav-links">
                    { link(props, Route::AllFirms, "All Firms") }
                    { link(props, Route::CheapFirms, "Cheap Firms") }
                    { link(props, Route::TopFirms, "Top Firms") }
                    { link(props, Route::Comparison, "Compare") }
                    { link(props, Route::Reviews, "Reviews") }
                    {
                        if props.show_admin {
                            link(props, Route::Admin, "Admin")
                        } else {
                            html! {}
                        }
                    }
                </div>
            </nav>
        }
    }
}

fn link(props: &NavbarProps, route: Route, label: &str) -> Html {
    let active = props.route == route;
    html! {
        <button
            class={classes!("nav-link", active.then_some("active"))}
            onclick={nav(props, route)}
        >
            { label }
        </button>
    }
}

fn nav(props: &NavbarProps, route: Route) -> Callback<web_sys::MouseEvent> {
    let on_navigate = props.on_navigate.clone();
    Callback::from(move |_| on_navigate.emit(route.clone()))
}
