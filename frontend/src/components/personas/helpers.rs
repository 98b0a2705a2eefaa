//! DOM helpers for the persons component.
//!
//! - **Click dispatch**: links inside the rendered HTML carry `data-accion`
//!   and, when they point at a record, `data-id`. A single listener on the
//!   article body turns a click on any of them into a [`Msg`].
//! - **Form reading**: collects the input values of the edited record.
//! - **User feedback**: short-lived notices for failed requests and for
//!   edits the controller rejects.

use common::display::EditedFields;
use common::gateway::GatewayError;
use common::template::form_ids;
use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, MouseEvent};

use super::messages::Msg;

/// Maps a click inside the article to the action of the nearest
/// `[data-accion]` ancestor. Clicks elsewhere produce no message.
pub fn action_from_click(event: &MouseEvent) -> Option<Msg> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let link = target.closest("[data-accion]").ok()??;
    event.prevent_default();

    let action = link.get_attribute("data-accion")?;
    let msg = match action.as_str() {
        "mostrar" => Msg::ShowOne(link.get_attribute("data-id")?),
        "anterior" => Msg::Previous,
        "siguiente" => Msg::Next,
        "editar" => Msg::Edit,
        "cancelar" => Msg::Cancel,
        "guardar" => Msg::Save,
        _ => return None,
    };
    Some(msg)
}

fn input_value(id: &str) -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current values of the form inputs.
pub fn read_edited_fields() -> EditedFields {
    EditedFields {
        id: input_value(form_ids::ID),
        name: input_value(form_ids::NAME),
        surname: input_value(form_ids::SURNAME),
        country: input_value(form_ids::COUNTRY),
        gold_medals: input_value(form_ids::GOLD_MEDALS),
    }
}

/// How long a notice stays on screen, in milliseconds.
const NOTICE_MS: u32 = 3000;

/// Kind of notice; selects the CSS class in `index.html`.
#[derive(Debug, Clone, Copy)]
pub enum Notice {
    Error,
    Warning,
}

impl Notice {
    fn class(self) -> &'static str {
        match self {
            Notice::Error => "aviso aviso-error",
            Notice::Warning => "aviso aviso-advertencia",
        }
    }
}

/// Appends a notice to the page body and removes it after [`NOTICE_MS`].
pub fn show_notice(kind: Notice, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(notice), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    notice.set_class_name(kind.class());
    notice.set_text_content(Some(message));

    if body.append_child(&notice).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            notice.remove();
        });
    }
}

/// Logs a failed round trip and shows the gateway alert.
pub fn report_gateway_failure(failure: &GatewayError) {
    error!(failure.to_string());
    show_notice(Notice::Error, failure.alert_message());
}
