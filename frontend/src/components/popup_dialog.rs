use yew::prelude::*;

const POPUP_IMAGE: &str = "https://www.miempresa.online/wp-content/uploads/2025/02/audifonos-invisible.jpg";

#[derive(Properties, PartialEq)]
pub struct PopupDialogProps {
    /// Fade-out running; the overlay stays mounted until it ends.
    pub closing: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(PopupDialog)]
pub fn popup_dialog(props: &PopupDialogProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("popup-overlay", props.closing.then(|| "closing"))}>
            <div class={classes!("popup-content", props.closing.then(|| "closing"))}>
                <button class="popup-close" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
                <div class="popup-grid">
                    <div class="popup-image">
                        <img src={POPUP_IMAGE} alt="Audifonos" />
                    </div>
                    <div class="popup-body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}
