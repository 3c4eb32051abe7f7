use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct AllFirmsProps {
    pub on_navigate: Callback<Route>,
}
