//! Menu plus the article section. The article body is the HTML produced by
//! the display controller, inserted as-is.

use yew::html::Scope;
use yew::prelude::*;

use super::helpers::action_from_click;
use super::messages::Msg;
use super::state::PersonasComponent;

pub fn view(component: &PersonasComponent, ctx: &Context<PersonasComponent>) -> Html {
    let link = ctx.link();
    let body = Html::from_html_unchecked(AttrValue::from(component.article.body.clone()));

    html! {
        <>
            { build_menu(link) }
            <article>
                <h1>{ component.article.title.clone() }</h1>
                <div class="contenido" onclick={link.batch_callback(|e: MouseEvent| action_from_click(&e))}>
                    { body }
                </div>
            </article>
        </>
    }
}

fn build_menu(link: &Scope<PersonasComponent>) -> Html {
    html! {
        <nav class="menu">
            { menu_option("Home", link.callback(|_| Msg::Home)) }
            { menu_option("Acerca de", link.callback(|_| Msg::About)) }
            { menu_option("Listar personas", link.callback(|_| Msg::ListAll)) }
        </nav>
    }
}

fn menu_option(label: &str, onclick: Callback<()>) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        onclick.emit(());
    });
    html! {
        <a href="#" {onclick}>{ label.to_string() }</a>
    }
}
