use yew::{Component, Context, Html, html};

pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Hero
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="hero">
                <h1>{"Find Your Perfect Prop Trading Firm"}</h1>
                <p>
                    {"Compare prices, reviews and trust ratings across the \
                      leading proprietary trading firms."}
                </p>
            </header>
        }
    }
}
