use yew::{Component, Context, Html, html};

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="footer">
                <span>{"PropFirmHub — independent prop firm listings and reviews."}</span>
                <span class="disclaimer">
                    {"Listings may contain affiliate links. Trading involves risk."}
                </span>
            </footer>
        }
    }
}
