use shared::Screen;
use yew::prelude::*;

use crate::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Screen,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

/// In-app anchor. Clicks are routed through the root navigator instead of
/// reloading the page; a disabled link swallows them.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigate = use_navigator();
    let onclick = {
        let to = props.to.clone();
        let disabled = props.disabled;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !disabled {
                navigate.emit(to.clone());
            }
        })
    };

    html! {
        <a
            href={props.to.path()}
            class={classes!("link", props.class.clone(), props.disabled.then_some("disabled"))}
            aria-disabled={props.disabled.to_string()}
            {onclick}
        >
            { props.children.clone() }
        </a>
    }
}

/// Renders a screen header with an optional back link and trailing action.
pub fn render_header(title: &str, back: Option<Screen>, action: Html) -> Html {
    html! {
        <header class="screen-header">
            {
                match back {
                    Some(target) => html! {
                        <Link to={target} class="icon-button">
                            <i class="fa-solid fa-chevron-left"></i>
                        </Link>
                    },
                    None => html! { <span class="icon-button placeholder"></span> },
                }
            }
            <h1>{ title }</h1>
            <div class="header-action">{ action }</div>
        </header>
    }
}
