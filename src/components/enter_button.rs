use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::styles::{Interaction, ENTER_BUTTON};

#[derive(Properties, PartialEq)]
pub struct EnterButtonProps {
    pub label: AttrValue,
    pub on_enter: Callback<()>,
}

#[function_component(EnterButton)]
pub fn enter_button(props: &EnterButtonProps) -> Html {
    let interaction = use_state(Interaction::default);

    let on_mouse_enter = {
        let interaction = interaction.clone();
        Callback::from(move |_: web_sys::MouseEvent| interaction.set(Interaction::Hovered))
    };

    let on_mouse_leave = {
        let interaction = interaction.clone();
        Callback::from(move |_: web_sys::MouseEvent| interaction.set(Interaction::Idle))
    };

    let onclick = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |_: web_sys::MouseEvent| on_enter.emit(()))
    };

    html! {
        <button
            class="enter-btn"
            type="button"
            style={ENTER_BUTTON.select(*interaction)}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            {onclick}
        >
            <Icon icon_id={IconId::LucideLibrary} width={"20"} height={"20"} />
            { props.label.clone() }
        </button>
    }
}
