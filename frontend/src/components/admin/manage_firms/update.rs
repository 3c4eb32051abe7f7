use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::admin::firm_form::FirmSaved;
use crate::components::helpers::show_toast;
use crate::store;
use crate::supabase::realtime::RealtimeChannel;

use super::messages::Msg;
use super::state::ManageFirms;

pub fn update(component: &mut ManageFirms, ctx: &Context<ManageFirms>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(outcome) => {
            if let Err(message) = &outcome {
                error!("failed to load firms:", message.clone());
                show_toast("Failed to load firms");
            }
            component.firms.finish_load(outcome);
            true
        }
        Msg::RemoteChange => {
            component.firms.begin_load();
            load(ctx);
            true
        }
        Msg::Edit(firm) => {
            component.editing = Some(firm);
            true
        }
        Msg::CancelEdit => {
            component.editing = None;
            true
        }
        Msg::Saved(saved) => {
            match saved {
                FirmSaved::Created(firm) => component.firms.insert_front(firm),
                FirmSaved::Updated(firm) => {
                    component.editing = None;
                    component.firms.replace(firm);
                }
            }
            true
        }
        Msg::Delete(id) => {
            if component.deleting.is_some() {
                return false;
            }
            component.deleting = Some(id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = store::firms::delete(&id)
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
                    if component.editing.as_ref().is_some_and(|firm| firm.id == id) {
                        component.editing = None;
                    }
                    component.firms.remove(&id);
                    show_toast("Prop firm deleted");
                }
                Err(message) => {
                    error!("failed to delete firm:", message);
                    show_toast("Failed to delete firm");
                }
            }
            true
        }
    }
}

/// Kicks off a (re)fetch for the current section.
pub fn load(ctx: &Context<ManageFirms>) {
    let category_id = ctx.props().category_id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = store::firms::fetch(category_id.as_deref())
            .await
            .map_err(|err| err.to_string());
        link.send_message(Msg::Loaded(outcome));
    });
}

/// Replaces the live subscription with one matching the current section.
pub fn resubscribe(component: &mut ManageFirms, ctx: &Context<ManageFirms>) {
    if let Some(channel) = component.channel.take() {
        channel.close();
    }
    let filter = ctx
        .props()
        .category_id
        .as_ref()
        .map(|id| format!("category_id=eq.{id}"));
    let on_change = ctx.link().callback(|_| Msg::RemoteChange);
    component.channel = RealtimeChannel::subscribe("prop_firms", filter, on_change);
}
