use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::lead_form::{FormVariant, LeadFormView};
use crate::components::popup_dialog::PopupDialog;
use crate::config;
use crate::lead::challenge::Recaptcha;
use crate::lead::models::{FormField, SubmissionState, SubmitError};
use crate::lead::pipeline::{deliver_lead, LeadPipeline};
use crate::lead::webhook::Webhook;
use crate::popup::controller::{CloseStep, PopupController};
use crate::popup::triggers::{PageTriggers, PopupTrigger};

const LOGO: &str = "https://www.audifonosgranviabilbao.com/uploads/logos/audifonosgranviabilbao.png";
const HERO_IMAGE: &str = "https://www.miempresa.online/wp-content/uploads/2025/02/audifonos-al-mejor-precio.jpg";
const BANNER_IMAGE: &str = "https://www.miempresa.online/wp-content/uploads/2025/02/audifonos.jpg";
const OFFER_IMAGE: &str = "https://www.audifonosgranviabilbao.com/uploads/casas/rd/audifonosgranviabilbao/webs/WhatsApp_Image_2020_11_12_at_11.14.45.jpg";

const BRANDS: [(&str, &str); 6] = [
    ("Signia", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosSignia?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/signia.png"),
    ("Phonak", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosPhonak?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/phonak.png"),
    ("Oticon", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosOticon?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/oticon.png"),
    ("ReSound", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosResound?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/resound.png"),
    ("Widex", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosWidex?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/widex.png"),
    ("Starkey", "https://www.guiadelaudifono.com/cacheimgwebp/AudifonosStarkey?zc=2&w=500&h=500&src=/uploads/casas/eu/guiadelaudifono/tablas/starkey.png"),
];

const BENEFITS: [(&str, &str); 3] = [
    ("Revisión auditiva gratis", "Evaluamos tu audición sin compromiso para detectar problemas y ofrecerte la mejor solución personalizada."),
    ("Prueba gratuita de audífonos", "Prueba nuestros audífonos sin coste durante un mes y experimenta una mejor calidad de sonido."),
    ("Entregamos los audífonos", "Recibe tus audífonos en el menor tiempo posible, ajustados a tus necesidades auditivas específicas."),
];

const MODELS: [(&str, &str, &str, &str); 3] = [
    ("https://www.miempresa.online/wp-content/uploads/2025/02/Silk-Charge-Go-IX_black_pair_shadow_1000x1000.jpg", "Alain Afflelou Incognito IC16", "Mejores precios", "Consigue audífonos al mejor precio y con 1 mes de prueba gratis sin compromiso."),
    ("https://www.miempresa.online/wp-content/uploads/2025/02/Styletto-IX_black_silver_double_1000x1000.jpg", "Resound ONE a medida", "Modernos", "Representa una generación nueva de audífonos. Son audífonos recargables para disfrutar de lo mejor de los audífonos y de los auriculares."),
    ("https://www.miempresa.online/wp-content/uploads/2025/02/Pure-Charge-Go-IX_graphite_pair_1000x1000.jpg", "Phonak Virto Paradise", "Discretos", "Audífonos con un diseño discreto y personalizado para cada usuario. Ofrecen una brillante comprensión de la palabra y sonido natural."),
];

const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Aviso legal", "https://www.audifonosgranviabilbao.com/aviso-legal"),
    ("Términos y Condiciones", "https://www.audifonosgranviabilbao.com/terminos-y-condiciones"),
    ("Política de Privacidad", config::PRIVACY_POLICY_URL),
];

/// Which of the two independent lead forms a message is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSlot {
    Hero,
    Popup,
}

/// Scroll targets offered by the navigation and the CTA buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Form,
    Benefits,
    Brands,
    Offers,
}

pub enum Msg {
    Trigger(PopupTrigger),
    ClosePopup,
    CloseTransitionElapsed,
    Field(FormSlot, FormField, String),
    Submit(FormSlot),
    Delivered(FormSlot, u64, Result<(), SubmitError>),
    DismissNotice(FormSlot),
    CloseThankYou(FormSlot),
    HeroResetElapsed,
    ScrollTo(Section),
}

pub struct Landing {
    popup: PopupController,
    hero_lead: LeadPipeline,
    popup_lead: LeadPipeline,
    triggers: PageTriggers,
    close_timer: Option<Timeout>,
    hero_reset_timer: Option<Timeout>,
    form_ref: NodeRef,
    benefits_ref: NodeRef,
    brands_ref: NodeRef,
    offers_ref: NodeRef,
}

impl Landing {
    fn lead_mut(&mut self, slot: FormSlot) -> &mut LeadPipeline {
        match slot {
            FormSlot::Hero => &mut self.hero_lead,
            FormSlot::Popup => &mut self.popup_lead,
        }
    }

    fn section_ref(&self, section: Section) -> &NodeRef {
        match section {
            Section::Form => &self.form_ref,
            Section::Benefits => &self.benefits_ref,
            Section::Brands => &self.brands_ref,
            Section::Offers => &self.offers_ref,
        }
    }

    fn schedule_close(&mut self, ctx: &Context<Self>, delay_ms: u32) {
        let link = ctx.link().clone();
        self.close_timer = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::CloseTransitionElapsed);
        }));
    }

    fn close_popup(&mut self, ctx: &Context<Self>) -> bool {
        if !self.popup.close(Utc::now()) {
            return false;
        }
        self.schedule_close(ctx, config::CLOSE_TRANSITION_MS);
        true
    }

    fn handle_submit(&mut self, ctx: &Context<Self>, slot: FormSlot) -> bool {
        let Some(ticket) = self.lead_mut(slot).begin_submit() else {
            return false;
        };
        info!("Submitting {:?} lead form (attempt {})", slot, ticket.attempt);
        ctx.link().send_future(async move {
            let result = deliver_lead(&Recaptcha::default(), &Webhook::default(), ticket.form).await;
            Msg::Delivered(slot, ticket.attempt, result)
        });
        true
    }

    fn lead_form(&self, ctx: &Context<Self>, slot: FormSlot) -> Html {
        let (variant, pipeline) = match slot {
            FormSlot::Hero => (FormVariant::Hero, &self.hero_lead),
            FormSlot::Popup => (FormVariant::Popup, &self.popup_lead),
        };
        let link = ctx.link();
        html! {
            <LeadFormView
                {variant}
                pipeline={pipeline.clone()}
                on_input={link.callback(move |(field, value): (FormField, String)| Msg::Field(slot, field, value))}
                on_submit={link.callback(move |_: ()| Msg::Submit(slot))}
                on_dismiss_notice={link.callback(move |_: ()| Msg::DismissNotice(slot))}
                on_close={link.callback(move |_: ()| Msg::CloseThankYou(slot))}
            />
        }
    }

    fn view_popup(&self, ctx: &Context<Self>) -> Html {
        if !self.popup.is_visible() {
            return html! {};
        }
        let submitted = self.popup_lead.state() == SubmissionState::Submitted;
        html! {
            <PopupDialog closing={self.popup.is_closing()} on_close={ctx.link().callback(|_: ()| Msg::ClosePopup)}>
                if !submitted {
                    <h2 class="popup-title">
                        {"Te ayudamos a "}
                        <span class="block">{"encontrar el "}<span class="accent">{"mejor precio"}</span></span>
                        <span class="block">{"para tus audífonos"}</span>
                    </h2>
                }
                { self.lead_form(ctx, FormSlot::Popup) }
            </PopupDialog>
        }
    }
}

impl Component for Landing {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            popup: PopupController::new(),
            hero_lead: LeadPipeline::new(),
            popup_lead: LeadPipeline::new(),
            triggers: PageTriggers::new(),
            close_timer: None,
            hero_reset_timer: None,
            form_ref: NodeRef::default(),
            benefits_ref: NodeRef::default(),
            brands_ref: NodeRef::default(),
            offers_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Trigger(trigger) => {
                let opened = self.popup.open();
                if opened {
                    info!("Popup opened by {:?}", trigger);
                }
                opened
            }
            Msg::ClosePopup => self.close_popup(ctx),
            Msg::CloseTransitionElapsed => match self.popup.advance_close(Utc::now()) {
                CloseStep::Closed => {
                    self.close_timer = None;
                    self.popup_lead.reset();
                    true
                }
                CloseStep::Wait(left) => {
                    self.schedule_close(ctx, left);
                    false
                }
                CloseStep::Idle => false,
            },
            Msg::Field(slot, field, value) => self.lead_mut(slot).update_field(field, value),
            Msg::Submit(slot) => self.handle_submit(ctx, slot),
            Msg::Delivered(slot, attempt, result) => {
                if let Err(e) = &result {
                    warn!("{:?} lead form failed: {}", slot, e);
                }
                self.lead_mut(slot).finish(attempt, result)
            }
            Msg::DismissNotice(slot) => {
                self.lead_mut(slot).dismiss_notice();
                true
            }
            Msg::CloseThankYou(FormSlot::Popup) => self.close_popup(ctx),
            Msg::CloseThankYou(FormSlot::Hero) => {
                let link = ctx.link().clone();
                self.hero_reset_timer = Some(Timeout::new(config::CLOSE_TRANSITION_MS, move || {
                    link.send_message(Msg::HeroResetElapsed);
                }));
                false
            }
            Msg::HeroResetElapsed => {
                self.hero_reset_timer = None;
                self.hero_lead.reset();
                true
            }
            Msg::ScrollTo(section) => {
                match self.section_ref(section).cast::<Element>() {
                    Some(element) => {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                    None => debug!("Section {:?} not mounted", section),
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.triggers.start(ctx.link().callback(Msg::Trigger));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.triggers.stop();
        self.close_timer = None;
        self.hero_reset_timer = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let go = |section: Section| link.callback(move |_: MouseEvent| Msg::ScrollTo(section));

        html! {
            <div class="landing-page">
                <style>{LANDING_CSS}</style>

                <div class="mobile-bar">
                    <a href="tel:944987951" class="mobile-call">{"📞 Llamar"}</a>
                    <a href="https://wa.me/34688696427" target="_blank" rel="noopener noreferrer" class="mobile-whatsapp">
                        {"WhatsApp"}
                    </a>
                </div>

                { self.view_popup(ctx) }

                <section ref={self.form_ref.clone()} class="hero-section">
                    <div class="container hero-grid">
                        <div class="hero-promo animate-fade-in-left">
                            <img src={HERO_IMAGE} alt="Persona usando audífonos" />
                            <div class="hero-promo-shade"></div>
                            <div class="hero-promo-text">
                                <div class="promo-limited">{"Por tiempo limitado"}</div>
                                <div class="promo-trial">
                                    <span class="block">{"¡1 MES DE PRUEBA GRATIS!"}</span>
                                    <span class="promo-small">{"Sin compromiso"}</span>
                                </div>
                                <div class="promo-price">
                                    <span class="block strike">{"Antes: 2500€"}</span>
                                    <span class="block accent">{"Ahora: 995€ (-60%)"}</span>
                                </div>
                            </div>
                        </div>
                        <div class="hero-form-card animate-fade-in-right">
                            <h2>
                                {"Te ayudamos a encontrar el "}
                                <span class="accent">{"mejor precio"}</span>
                                {" para tus audífonos"}
                            </h2>
                            <p class="muted">{"Completa el formulario y te contactaremos con la mejor oferta"}</p>
                            { self.lead_form(ctx, FormSlot::Hero) }
                        </div>
                    </div>
                </section>

                <header class="banner" style={format!("background-image: url({});", BANNER_IMAGE)}>
                    <div class="banner-shade"></div>
                    <nav class="top-nav">
                        <div class="container nav-content">
                            <img class="nav-logo" src={LOGO} alt="Gran Vía Clínicas Audiológicas" />
                            <div class="nav-links">
                                <button onclick={go(Section::Form)}>{"Solicitar información"}</button>
                                <button onclick={go(Section::Benefits)}>{"Beneficios"}</button>
                                <button onclick={go(Section::Brands)}>{"Marcas"}</button>
                                <button onclick={go(Section::Offers)}>{"Ofertas"}</button>
                            </div>
                        </div>
                    </nav>
                    <div class="banner-content animate-on-scroll">
                        <h1>{"-60% DESCUENTO"}</h1>
                        <p>{"¡1 més de prueba gratis!"}</p>
                        <button class="cta-button" onclick={go(Section::Form)}>{"Solicitar oferta"}</button>
                    </div>
                </header>

                <section ref={self.benefits_ref.clone()} class="benefits">
                    <div class="container three-cols">
                        { for BENEFITS.iter().map(|(title, text)| html! {
                            <div class="benefit animate-on-scroll">
                                <h3>{*title}</h3>
                                <p class="muted">{*text}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={self.brands_ref.clone()} class="brands">
                    <div class="container">
                        <h2>{"Trabajamos con las mejores marcas"}</h2>
                        <div class="logos-slider-container">
                            // Rendered twice so the marquee loops without a gap
                            <div class="logos-slider">
                                { for BRANDS.iter().chain(BRANDS.iter()).map(|(name, src)| html! {
                                    <div class="logo-item"><img src={*src} alt={*name} /></div>
                                }) }
                            </div>
                        </div>
                        <p>{"Trabajamos con las marcas líderes en el mercado para ofrecerte la mejor calidad y tecnología en audífonos"}</p>
                        <button class="primary-button inline" onclick={go(Section::Form)}>{"Solicitar información"}</button>
                    </div>
                </section>

                <section class="models">
                    <div class="container">
                        <h2>{"Nuestros Modelos de Audífonos"}</h2>
                        <div class="three-cols">
                            { for MODELS.iter().map(|(src, alt, title, text)| html! {
                                <div class="model-card">
                                    <img src={*src} alt={*alt} />
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                    <button class="primary-button" onclick={go(Section::Form)}>{"Conseguir descuento"}</button>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section ref={self.offers_ref.clone()} class="offers">
                    <div class="container two-cols">
                        <div>
                            <img class="offer-image" src={OFFER_IMAGE} alt="Studio Pro" />
                            <div class="price-strip">
                                <div class="price offer"><div class="label">{"PRECIO OFERTA"}</div><div class="amount">{"995€"}</div></div>
                                <div class="price original"><div class="label">{"PRECIO ORIGINAL"}</div><div class="amount strike">{"2490€"}</div></div>
                                <div class="price discount"><div class="label">{"DESCUENTO"}</div><div class="amount">{"60%"}</div></div>
                            </div>
                        </div>
                        <div>
                            <h2>{"Audífonos recargable sin pilas"}</h2>
                            <p class="muted">
                                {"incluido el cargador, rehabilitación auditiva valorada en 500€, seguro a todo riesgo incluido, revisiones gratuitas de por vida, por sólo 995€ en lugar de 2.499€ (60% de descuento)."}
                            </p>
                            <button class="primary-button inline" onclick={go(Section::Form)}>{"¡Lo quiero! ›"}</button>
                        </div>
                    </div>
                </section>

                <section class="final-cta">
                    <h2>{"SOLICITA INFORMACIÓN"}</h2>
                    <p>{"Sin compromiso"}</p>
                    <button class="dark-button" onclick={go(Section::Form)}>{"Solicitar"}</button>
                </section>

                <footer class="footer">
                    <div class="container four-cols">
                        <a href="#">{"Copyright © Clinica Gran via Bilbao"}</a>
                        { for FOOTER_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                        }) }
                    </div>
                </footer>
            </div>
        }
    }
}

const LANDING_CSS: &str = r#"
    .landing-page { min-height: 100vh; background: #000; color: #fff; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; padding-bottom: 60px; }
    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
    .block { display: block; }
    .accent { color: #9c0720; }
    .muted { color: #9ca3af; }
    .strike { text-decoration: line-through; }
    .three-cols { display: grid; grid-template-columns: 1fr; gap: 3rem; }
    .two-cols { display: grid; grid-template-columns: 1fr; gap: 3rem; align-items: center; }
    .four-cols { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
    @media (min-width: 768px) {
        .three-cols { grid-template-columns: repeat(3, 1fr); }
        .two-cols, .hero-grid, .popup-grid { grid-template-columns: 1fr 1fr; }
        .four-cols { grid-template-columns: repeat(4, 1fr); }
        .popup-image { display: block !important; }
    }
    @media (min-width: 640px) {
        .landing-page { padding-bottom: 0; }
        .mobile-bar { display: none !important; }
    }

    .mobile-bar { position: fixed; bottom: 0; left: 0; right: 0; height: 60px; background: #fff; z-index: 50; display: flex; align-items: center; justify-content: space-around; font-weight: 600; }
    .mobile-call { color: #9c0720; text-decoration: none; }
    .mobile-whatsapp { color: #25D366; text-decoration: none; }

    .hero-section { background: linear-gradient(to right, #111827, #000); padding: 8rem 0 5rem; }
    .hero-grid { display: grid; gap: 3rem; align-items: center; }
    .hero-promo { position: relative; }
    .hero-promo img { width: 100%; height: 600px; object-fit: cover; border-radius: 0.5rem; }
    .hero-promo-shade { position: absolute; inset: 0; border-radius: 0.5rem; background: linear-gradient(to right, rgba(0,0,0,0.8), rgba(0,0,0,0.4)); }
    .hero-promo-text { position: absolute; inset: 0; display: flex; flex-direction: column; gap: 1.5rem; align-items: center; justify-content: center; text-align: center; padding: 1.5rem; }
    .promo-limited { font-size: 2.25rem; font-weight: 700; }
    .promo-trial { background: #9c0720; padding: 1rem 2rem; border-radius: 0.5rem; font-size: 1.5rem; font-weight: 700; }
    .promo-small { font-size: 1.1rem; font-weight: 400; opacity: 0.9; }
    .promo-price { background: rgba(0,0,0,0.8); padding: 1rem 2rem; border-radius: 0.5rem; font-size: 1.5rem; font-weight: 700; }
    .promo-price .strike { color: #9ca3af; }
    .hero-form-card { background: rgba(255,255,255,0.1); backdrop-filter: blur(4px); padding: 2rem; border-radius: 1rem; }
    .hero-form-card h2 { font-size: 1.9rem; margin: 0 0 0.5rem; }

    .lead-form { display: flex; flex-direction: column; gap: 1rem; }
    .lead-form input, .lead-form textarea { width: 100%; box-sizing: border-box; padding: 0.75rem 1rem; border-radius: 0.5rem; font-size: 1rem; }
    .lead-form textarea { height: 6rem; }
    .hero-form input, .hero-form textarea { background: rgba(255,255,255,0.05); border: 1px solid #374151; color: #fff; }
    .popup-form input, .popup-form textarea { background: #f9fafb; border: 1px solid #d1d5db; color: #111827; }
    .form-notice { display: flex; justify-content: space-between; gap: 1rem; padding: 0.75rem 1rem; border-radius: 0.5rem; background: rgba(156,7,32,0.15); border: 1px solid #9c0720; color: #9c0720; }
    .hero-form .form-notice { color: #fecaca; }
    .form-notice button { background: none; border: none; color: inherit; cursor: pointer; }
    .privacy-note { font-size: 0.75rem; color: #9ca3af; text-align: center; }
    .privacy-note a { color: #9c0720; }

    .primary-button { width: 100%; background: #9c0720; color: #fff; font-weight: 600; padding: 0.85rem 1.5rem; border: none; border-radius: 0.5rem; cursor: pointer; transition: background 0.3s; }
    .primary-button:hover { background: #666; }
    .primary-button.inline { width: auto; }
    .primary-button.is-submitting { opacity: 0.75; cursor: not-allowed; }
    .dark-button { background: #000; color: #fff; padding: 0.75rem 2rem; border: none; border-radius: 9999px; font-weight: 600; cursor: pointer; }
    .cta-button { background: #fff; color: #000; padding: 0.75rem 2rem; border: none; border-radius: 9999px; font-weight: 600; cursor: pointer; }

    .thank-you { text-align: center; padding: 2rem; }
    .thank-you h3 { font-size: 1.5rem; }

    .banner { position: relative; height: 70vh; overflow: hidden; background-size: cover; background-position: center; background-attachment: fixed; }
    .banner-shade { position: absolute; inset: 0; background: rgba(0,0,0,0.5); }
    .banner-content { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; }
    .banner-content h1 { font-size: 3.75rem; margin: 0 0 1.5rem; }
    .top-nav { position: fixed; top: 0; width: 100%; padding: 1.5rem 0; background: #fff; box-shadow: 0 2px 6px rgba(0,0,0,0.1); z-index: 40; }
    .nav-content { display: flex; justify-content: space-between; align-items: center; }
    .nav-logo { height: 3rem; }
    .nav-links { display: flex; gap: 3rem; }
    .nav-links button { background: none; border: none; color: #1f2937; font-size: 1rem; cursor: pointer; transition: color 0.3s; }
    .nav-links button:hover { color: #9c0720; }
    @media (max-width: 639px) { .nav-links { display: none; } .nav-content { justify-content: center; } .nav-logo { height: 1.5rem; } }

    .benefits { padding: 5rem 1.5rem; }
    .benefit { text-align: center; }
    .brands { padding: 5rem 0; background: #fff; color: #000; text-align: center; }
    .brands h2, .models h2 { font-size: 2.25rem; margin-bottom: 3rem; }
    .logos-slider-container { overflow: hidden; position: relative; }
    .logos-slider { display: flex; width: max-content; animation: marquee 30s linear infinite; }
    .logo-item { flex-shrink: 0; padding: 0 2rem; }
    .logo-item img { height: 4rem; object-fit: contain; filter: grayscale(1); transition: filter 0.3s; }
    .logo-item img:hover { filter: none; }
    @keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }

    .models { padding: 5rem 0; background: #111827; }
    .model-card { background: #fff; color: #111827; border-radius: 0.5rem; padding: 1.5rem; transition: transform 0.3s; }
    .model-card:hover { transform: scale(1.05); }
    .model-card img { width: 100%; height: 12rem; object-fit: contain; }
    .model-card p { color: #4b5563; }
    .offers { padding: 5rem 0; background: #111827; }
    .offers h2 { font-size: 2.25rem; }
    .offer-image { width: 100%; border-radius: 0.5rem; }
    .price-strip { display: flex; margin-top: 1.5rem; }
    .price { flex: 1; text-align: center; padding: 0.75rem 1.5rem; }
    .price .label { font-size: 0.85rem; }
    .price .amount { font-size: 1.9rem; font-weight: 700; }
    .price.offer { background: #8B1538; }
    .price.original { background: #000; }
    .price.discount { background: #C88B9F; }
    .final-cta { padding: 5rem 1.5rem; background: #fff; color: #000; text-align: center; }
    .final-cta h2 { font-size: 2.25rem; }
    .footer { background: #000; padding: 3rem 1.5rem; }
    .footer a { color: #9ca3af; text-decoration: none; }
    .footer a:hover { color: #fff; }

    .popup-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.6); animation: fadeIn 0.3s ease-out; }
    .popup-content { position: relative; background: #fff; border-radius: 0.75rem; max-width: 42rem; width: 100%; margin: 0 1rem; box-shadow: 0 25px 50px rgba(0,0,0,0.25); color: #111827; animation: popIn 0.3s ease-out; }
    .popup-overlay.closing { animation: fadeOut 1s ease-in forwards; }
    .popup-content.closing { animation: popOut 1s ease-in forwards; }
    .popup-close { position: absolute; right: 1rem; top: 1rem; background: none; border: none; font-size: 1.25rem; color: #9ca3af; cursor: pointer; }
    .popup-grid { display: grid; }
    .popup-image { display: none; }
    .popup-image img { width: 100%; height: 100%; object-fit: cover; border-radius: 0.75rem 0 0 0.75rem; }
    .popup-body { padding: 2rem; display: flex; flex-direction: column; justify-content: center; }
    .popup-title { font-size: 1.9rem; margin: 0 0 1.5rem; color: #111827; }

    .animate-fade-in { animation: fadeIn 0.6s ease-out; }
    .animate-fade-in-left { animation: fadeInLeft 0.8s ease-out; }
    .animate-fade-in-right { animation: fadeInRight 0.8s ease-out; }
    .animate-on-scroll { opacity: 0; transform: translateY(20px); transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
    .animate-on-scroll.animate-fade-in-view { opacity: 1; transform: none; }
    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
    @keyframes popIn { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); } }
    @keyframes popOut { from { opacity: 1; transform: scale(1); } to { opacity: 0; transform: scale(0.95); } }
    @keyframes fadeInLeft { from { opacity: 0; transform: translateX(-30px); } to { opacity: 1; transform: none; } }
    @keyframes fadeInRight { from { opacity: 0; transform: translateX(30px); } to { opacity: 1; transform: none; } }
"#;
