//! Update function for the persons component.
//!
//! Requests run in `spawn_local` and come back as messages; the display
//! controller only changes when a response arrives, so a failed request
//! leaves the page and the navigation state as they were.

use std::future::Future;

use common::gateway::{save_and_reload, Gateway, GatewayError};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::gateway::HttpGateway;
use super::helpers::{read_edited_fields, report_gateway_failure, show_notice, Notice};
use super::messages::Msg;
use super::state::PersonasComponent;

/// Runs `request` and delivers its outcome to the component.
fn request<T, F>(ctx: &Context<PersonasComponent>, future: F, on_success: fn(T) -> Msg)
where
    T: 'static,
    F: Future<Output = Result<T, GatewayError>> + 'static,
{
    let link = ctx.link().clone();
    spawn_local(async move {
        match future.await {
            Ok(value) => link.send_message(on_success(value)),
            Err(e) => link.send_message(Msg::Failed(e)),
        }
    });
}

fn show_one(ctx: &Context<PersonasComponent>, id: String) {
    log!("Mostrando la persona", id.clone());
    request(
        ctx,
        async move { HttpGateway.fetch_one(&id).await },
        Msg::OneLoaded,
    );
}

pub fn update(
    component: &mut PersonasComponent,
    ctx: &Context<PersonasComponent>,
    msg: Msg,
) -> bool {
    let PersonasComponent {
        controller,
        article,
        ..
    } = component;

    match msg {
        Msg::Home => {
            request(ctx, async { HttpGateway.fetch_home().await }, Msg::HomeLoaded);
            false
        }
        Msg::About => {
            request(ctx, async { HttpGateway.fetch_about().await }, Msg::AboutLoaded);
            false
        }
        Msg::ListAll => {
            request(ctx, async { HttpGateway.fetch_many().await }, Msg::ManyLoaded);
            false
        }
        Msg::ShowOne(id) => {
            show_one(ctx, id);
            false
        }
        Msg::Previous => {
            if let Some(id) = controller.previous() {
                show_one(ctx, id.to_string());
            }
            false
        }
        Msg::Next => {
            if let Some(id) = controller.next() {
                show_one(ctx, id.to_string());
            }
            false
        }
        Msg::Edit => report(controller.edit(article)),
        Msg::Cancel => report(controller.cancel(article)),
        Msg::Save => {
            match controller.save(read_edited_fields()) {
                Ok(update) => request(
                    ctx,
                    async move { save_and_reload(&HttpGateway, &update).await },
                    Msg::OneLoaded,
                ),
                Err(e) => {
                    error!(e.to_string());
                    show_notice(Notice::Warning, &e.to_string());
                }
            }
            false
        }
        Msg::HomeLoaded(raw) => {
            controller.show_home(Some(&raw), article);
            true
        }
        Msg::AboutLoaded(raw) => {
            controller.show_about(Some(&raw), article);
            true
        }
        Msg::ManyLoaded(people) => {
            controller.show_many(&people, article);
            true
        }
        Msg::OneLoaded(person) => {
            controller.show_one(person, article);
            true
        }
        Msg::Failed(e) => {
            report_gateway_failure(&e);
            false
        }
    }
}

fn report<E: ToString>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!(e.to_string());
            false
        }
    }
}
