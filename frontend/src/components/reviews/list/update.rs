use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::show_toast;
use crate::store;
use crate::supabase::realtime::RealtimeChannel;

use super::messages::Msg;
use super::state::ReviewList;

pub fn update(component: &mut ReviewList, ctx: &Context<ReviewList>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(outcome) => {
            if let Err(message) = &outcome {
                error!("failed to load reviews:", message.clone());
                show_toast("Failed to load reviews");
            }
            component.reviews.finish_load(outcome);
            true
        }
        Msg::RemoteChange => {
            component.reviews.begin_load();
            load(component, ctx);
            true
        }
        Msg::Delete(id) => {
            if component.deleting.is_some() {
                return false;
            }
            component.deleting = Some(id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = store::reviews::delete(&id)
                    .await
                    .map_err(|err| err.to_string());
                link.send_message(Msg::Deleted(id, outcome));
            });
            true
        }
        Msg::Deleted(id, outcome) => {
            component.deleting = None;
            match outcome {
                Ok(()) => {
                    component.reviews.remove(&id);
                    show_toast("Review deleted");
                }
                Err(message) => {
                    error!("failed to delete review:", message);
                    show_toast("Failed to delete review");
                }
            }
            true
        }
    }
}

/// Kicks off a (re)fetch for the current firm filter.
pub fn load(_component: &ReviewList, ctx: &Context<ReviewList>) {
    let firm_id = ctx.props().firm_id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = store::reviews::fetch(firm_id.as_deref())
            .await
            .map_err(|err| err.to_string());
        link.send_message(Msg::Loaded(outcome));
    });
}

/// Replaces the live subscription with one matching the current filter.
pub fn resubscribe(component: &mut ReviewList, ctx: &Context<ReviewList>) {
    if let Some(channel) = component.channel.take() {
        channel.close();
    }
    let filter = ctx
        .props()
        .firm_id
        .as_ref()
        .map(|id| format!("firm_id=eq.{id}"));
    let on_change = ctx.link().callback(|_| Msg::RemoteChange);
    component.channel = RealtimeChannel::subscribe("reviews", filter, on_change);
}
