use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::store;
use crate::supabase::realtime::RealtimeChannel;

use super::messages::Msg;
use super::state::AllFirmsPage;

pub fn update(component: &mut AllFirmsPage, ctx: &Context<AllFirmsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(outcome) => {
            if let Err(message) = &outcome {
                error!("failed to load firms:", message.clone());
            }
            component.firms.finish_load(outcome);
            true
        }
        Msg::RemoteChange => {
            component.firms.begin_load();
            load(ctx);
            true
        }
        Msg::SetFilters(filters) => {
            component.filters = filters;
            true
        }
        Msg::SetSort(key) => {
            component.sort_by = key;
            true
        }
    }
}

pub fn load(ctx: &Context<AllFirmsPage>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = store::firms::fetch(None)
            .await
            .map_err(|err| err.to_string());
        link.send_message(Msg::Loaded(outcome));
    });
}

pub fn subscribe(component: &mut AllFirmsPage, ctx: &Context<AllFirmsPage>) {
    let on_change = ctx.link().callback(|_| Msg::RemoteChange);
    component.channel = RealtimeChannel::subscribe("prop_firms", None, on_change);
}
