use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config;
use crate::lead::models::{FormField, SubmissionState};
use crate::lead::pipeline::LeadPipeline;

/// Where the form is rendered. Only styling differs between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Hero,
    Popup,
}

impl FormVariant {
    fn class(self) -> &'static str {
        match self {
            FormVariant::Hero => "lead-form hero-form",
            FormVariant::Popup => "lead-form popup-form",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: FormVariant,
    pub pipeline: LeadPipeline,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_dismiss_notice: Callback<()>,
    /// "Cerrar" on the thank-you message.
    pub on_close: Callback<()>,
}

#[function_component(LeadFormView)]
pub fn lead_form_view(props: &LeadFormProps) -> Html {
    let LeadFormProps { variant, pipeline, on_input, on_submit, on_dismiss_notice, on_close } = props;

    if pipeline.state() == SubmissionState::Submitted {
        let name = pipeline.thank_you_name().unwrap_or_default().to_string();
        let on_close = on_close.clone();
        return html! {
            <div class="thank-you animate-fade-in">
                <h3>{format!("¡Gracias {}!", name)}</h3>
                <p>{"Hemos recibido tu solicitud correctamente. En breve nos pondremos en contacto contigo."}</p>
                <button class="primary-button" onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}>
                    {"Cerrar"}
                </button>
            </div>
        };
    }

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let submitting = pipeline.is_submitting();
    let fields = FormField::ALL.into_iter().map(|field| {
        let value = pipeline.form().get(field).to_string();
        let on_input = on_input.clone();
        if field == FormField::Comments {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            });
            html! {
                <textarea
                    name={field.input_name()}
                    placeholder={field.placeholder()}
                    value={value}
                    {oninput}
                />
            }
        } else {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            });
            html! {
                <input
                    type={field.input_type()}
                    name={field.input_name()}
                    placeholder={field.placeholder()}
                    value={value}
                    required={field.is_required()}
                    {oninput}
                />
            }
        }
    });

    html! {
        <form class={variant.class()} {onsubmit}>
            {
                if let Some(notice) = pipeline.notice() {
                    let on_dismiss_notice = on_dismiss_notice.clone();
                    html! {
                        <div class="form-notice" role="alert">
                            <span>{notice.user_message()}</span>
                            <button type="button" onclick={Callback::from(move |_: MouseEvent| on_dismiss_notice.emit(()))}>
                                {"✕"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for fields }
            <button
                type="submit"
                class={classes!("primary-button", submitting.then(|| "is-submitting"))}
                disabled={submitting}
            >
                { if submitting { "Enviando..." } else { "Solicitar Información" } }
            </button>
            <p class="privacy-note">
                {"Al hacer clic en enviar declaras haber leído y aceptado la "}
                <a href={config::PRIVACY_POLICY_URL} target="_blank" rel="noopener noreferrer">
                    {"política de privacidad"}
                </a>
            </p>
        </form>
    }
}
