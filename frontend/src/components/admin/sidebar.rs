//! Admin dashboard sidebar, driven by a fixed table of section descriptors
//! rendered by one loop.

use yew::prelude::*;

/// Dashboard sections. Category sections carry the fixed category id their
/// firm list is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    AllFirms,
    ExploreFirms,
    CheapFirms,
    TopFirms,
    Reviews,
}

impl AdminSection {
    /// Category filter applied to the firms list in this section.
    pub fn category_id(&self) -> Option<&'static str> {
        match self {
            AdminSection::ExploreFirms => Some("explore"),
            AdminSection::CheapFirms => Some("cheap"),
            AdminSection::TopFirms => Some("top"),
            AdminSection::AllFirms | AdminSection::Reviews => None,
        }
    }
}

pub struct SectionDescriptor {
    pub section: AdminSection,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor {
        section: AdminSection::AllFirms,
        label: "All Firms",
        icon: "storage",
    },
    SectionDescriptor {
        section: AdminSection::ExploreFirms,
        label: "Explore Firms",
        icon: "explore",
    },
    SectionDescriptor {
        section: AdminSection::CheapFirms,
        label: "Cheap Firms",
        icon: "attach_money",
    },
    SectionDescriptor {
        section: AdminSection::TopFirms,
        label: "Top Firms",
        icon: "star",
    },
    SectionDescriptor {
        section: AdminSection::Reviews,
        label: "Reviews",
        icon: "rate_review",
    },
];

#[derive(Properties, PartialEq)]
pub struct AdminSidebarProps {
    pub active: AdminSection,
    pub on_select: Callback<AdminSection>,
    pub on_sign_out: Callback<()>,
}

pub struct AdminSidebar;

impl Component for AdminSidebar {
    type Message = ();
    type Properties = AdminSidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminSidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_sign_out = {
            let cb = props.on_sign_out.clone();
            Callback::from(move |_| cb.emit(()))
        };

        html! {
            <aside class="admin-sidebar">
                { for SECTIONS.iter().map(|descriptor| {
                    let active = descriptor.section == props.active;
                    let onclick = {
                        let cb = props.on_select.clone();
                        let section = descriptor.section;
                        Callback::from(move |_| cb.emit(section))
                    };
                    html! {
                        <button
                            class={classes!("sidebar-item", active.then_some("active"))}
                            {onclick}
                        >
                            <i class="material-icons">{ descriptor.icon }</i>
                            <span>{ descriptor.label }</span>
                        </button>
                    }
                }) }
                <button class="sidebar-item sign-out" onclick={on_sign_out}>
                    <i class="material-icons">{"logout"}</i>
                    <span>{"Sign Out"}</span>
                </button>
            </aside>
        }
    }
}
