use futures::future::{abortable, AbortHandle};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::lead::{self, LeadError};
use crate::booking::modal::{BookingHandle, ModalVisibility, Presence, VisibilityChange};
use crate::booking::session::BookingSession;
use crate::booking::wizard::{Effect, Event as FormEvent, Field, Step};
use crate::config;

const GRADES: [&str; 14] = [
    "KG 1", "KG 2", "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6", "Grade 7",
    "Grade 8", "Grade 9", "Grade 10", "Grade 11", "Grade 12",
];

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub handle: BookingHandle,
}

pub enum BookingMsg {
    Edit(Field, String),
    SubmitContact,
    Back,
    SubmitFinal,
    Settled {
        session: u64,
        result: Result<(), LeadError>,
    },
    Close,
    AutoClose {
        session: u64,
    },
    ResetSession,
}

pub struct BookingModal {
    session: BookingSession,
    auto_close: Option<Timeout>,
    pending_reset: Option<Timeout>,
    in_flight: Option<AbortHandle>,
}

impl Component for BookingModal {
    type Message = BookingMsg;
    type Properties = BookingModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: BookingSession::new(),
            auto_close: None,
            pending_reset: None,
            in_flight: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let now = ModalVisibility::from(ctx.props().open);
        match now.change_from(ModalVisibility::from(old_props.open)) {
            Some(VisibilityChange::Opened) => {
                if let Some(reset) = self.pending_reset.take() {
                    reset.cancel();
                }
                self.start_session();
            }
            Some(VisibilityChange::Closed) => {
                self.cancel_auto_close();
                self.session.close();
                let link = ctx.link().clone();
                self.pending_reset = Some(Timeout::new(config::RESET_LINGER_MS, move || {
                    link.send_message(BookingMsg::ResetSession);
                }));
            }
            None => {}
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = match msg {
            BookingMsg::Edit(field, value) => self.session.dispatch(FormEvent::Edit(field, value)),
            BookingMsg::SubmitContact => self.session.dispatch(FormEvent::SubmitContact),
            BookingMsg::Back => self.session.dispatch(FormEvent::Back),
            BookingMsg::SubmitFinal => self.session.dispatch(FormEvent::SubmitFinal),
            BookingMsg::Settled { session, result } => {
                match self.session.settle(session, result) {
                    Some(effects) => {
                        self.in_flight = None;
                        effects
                    }
                    None => return false,
                }
            }
            BookingMsg::Close => {
                ctx.props().handle.close();
                return false;
            }
            BookingMsg::AutoClose { session } => {
                self.auto_close = None;
                if self.session.auto_close_due(session) {
                    ctx.props().handle.close();
                }
                return false;
            }
            BookingMsg::ResetSession => {
                self.pending_reset = None;
                self.start_session();
                return true;
            }
        };
        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let presence = Presence::of(
            ModalVisibility::from(ctx.props().open),
            self.pending_reset.is_some(),
        );
        if presence == Presence::Hidden {
            return html! {};
        }
        let close = ctx.link().callback(|_: MouseEvent| BookingMsg::Close);
        let form = self.session.form();

        html! {
            <div class={classes!("booking-modal", (presence == Presence::Closing).then(|| "closing"))}>
                <div class="booking-backdrop" onclick={close.clone()}></div>
                <div class="booking-card" role="dialog" aria-modal="true">
                    if form.is_completed() {
                        <div class="booking-success">
                            <div class="booking-success-icon">{"✓"}</div>
                            <h2>{"Registration Successful!"}</h2>
                            <p>{"Our academic counselor will contact you shortly on WhatsApp."}</p>
                            <button class="booking-close-button" onclick={close}>{"Close"}</button>
                        </div>
                    } else {
                        <>
                        <div class="booking-header">
                            <button class="booking-dismiss" aria-label="Close" onclick={close}>{"✕"}</button>
                            <h2>{"Book Your Free Demo"}</h2>
                            <p>
                                {
                                    if form.step() == Some(Step::One) {
                                        "Step 1: Let's get to know you"
                                    } else {
                                        "Step 2: Academic Details"
                                    }
                                }
                            </p>
                            <div class="step-indicator">
                                <span class={classes!("step-dot", (form.step() == Some(Step::One)).then(|| "active"))}></span>
                                <span class={classes!("step-dot", (form.step() == Some(Step::Two)).then(|| "active"))}></span>
                            </div>
                        </div>
                        <div class="booking-body">
                            {
                                if form.step() == Some(Step::One) {
                                    self.contact_step(ctx)
                                } else {
                                    self.academic_step(ctx)
                                }
                            }
                        </div>
                        </>
                    }
                </div>
                <style>{BOOKING_CSS}</style>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl BookingModal {
    fn start_session(&mut self) {
        // A delivery still running for the old session finishes on its own.
        self.in_flight = None;
        self.cancel_auto_close();
        self.session.reset();
        info!("Booking session {} started", self.session.id());
    }

    fn cancel_auto_close(&mut self) {
        if let Some(auto_close) = self.auto_close.take() {
            auto_close.cancel();
        }
    }

    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendPartialLead(partial) => {
                    spawn_local(async move {
                        if let Err(e) = lead::send_partial(partial).await {
                            warn!("Partial lead was not delivered: {}", e);
                        }
                    });
                }
                Effect::SendFullLead(full) => {
                    let (delivery, handle) = abortable(lead::send_full(full));
                    self.in_flight = Some(handle);
                    let session = self.session.id();
                    ctx.link().send_future(async move {
                        let result = delivery.await.unwrap_or(Err(LeadError::Cancelled));
                        BookingMsg::Settled { session, result }
                    });
                }
                Effect::ScheduleAutoClose { after_ms } => {
                    self.cancel_auto_close();
                    let session = self.session.arm_auto_close();
                    let link = ctx.link().clone();
                    self.auto_close = Some(Timeout::new(after_ms, move || {
                        link.send_message(BookingMsg::AutoClose { session });
                    }));
                }
            }
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let value = self.session.form().fields().get(field).to_string();
        html! {
            <div class="booking-field">
                <label for={field.name()}>{label}</label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    required=true
                    placeholder={placeholder}
                    value={value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        BookingMsg::Edit(field, input.value())
                    })}
                />
            </div>
        }
    }

    fn contact_step(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingMsg::SubmitContact
        });

        html! {
            <form class="booking-form" onsubmit={onsubmit}>
                {self.text_input(ctx, Field::StudentName, "Student Name", "text", "e.g. Mohammed Ali")}
                {self.text_input(ctx, Field::WhatsappNumber, "WhatsApp Number (GCC)", "tel", "e.g. +971 50 123 4567")}
                <button type="submit" class="booking-primary">{"Next Step →"}</button>
                <p class="booking-fineprint">
                    {"By submitting, you agree to our Privacy Policy and allow us to contact you via WhatsApp/Call."}
                </p>
            </form>
        }
    }

    fn academic_step(&self, ctx: &Context<Self>) -> Html {
        let form = self.session.form();
        let in_flight = form.submission_in_flight();
        let grade = form.fields().grade.clone();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingMsg::SubmitFinal
        });
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BookingMsg::Edit(Field::Grade, select.value())
        });

        html! {
            <form class="booking-form" onsubmit={onsubmit}>
                if let Some(notice) = form.notice() {
                    <div class="booking-notice">{notice}</div>
                }
                <div class="booking-field">
                    <label for={Field::Grade.name()}>{"Grade / Class"}</label>
                    <select id={Field::Grade.name()} name={Field::Grade.name()} required=true onchange={onchange}>
                        <option value="" disabled=true selected={grade.is_empty()}>{"Select Grade"}</option>
                        { for GRADES.iter().map(|g| html! {
                            <option value={*g} selected={grade == *g}>{*g}</option>
                        }) }
                    </select>
                </div>
                {self.text_input(ctx, Field::Subject, "Subject", "text", "e.g. Mathematics")}
                {self.text_input(ctx, Field::Place, "Location (GCC)", "text", "e.g. Dubai, Riyadh, Doha")}
                <div class="booking-actions">
                    <button
                        type="button"
                        class="booking-secondary"
                        disabled={in_flight}
                        onclick={ctx.link().callback(|_: MouseEvent| BookingMsg::Back)}
                    >
                        {"Back"}
                    </button>
                    <button type="submit" class="booking-primary" disabled={in_flight}>
                        { if in_flight { "Submitting..." } else { "Complete Booking" } }
                    </button>
                </div>
            </form>
        }
    }
}

const BOOKING_CSS: &str = r#"
.booking-modal {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.booking-modal.closing {
    pointer-events: none;
    animation: bookingFadeOut 0.3s ease-in forwards;
}

.booking-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(4px);
    animation: bookingFade 0.3s ease-out;
}

.booking-card {
    position: relative;
    width: 100%;
    max-width: 400px;
    background: #fff;
    border-radius: 24px;
    overflow: hidden;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    animation: bookingPop 0.3s ease-out;
}

.booking-header {
    position: relative;
    background: #FFC107;
    padding: 2rem 1.5rem 1.5rem;
    text-align: center;
}

.booking-header h2 {
    font-size: 22px;
    font-weight: 700;
    margin-bottom: 0.25rem;
}

.booking-header p {
    font-size: 0.875rem;
    color: rgba(0, 0, 0, 0.8);
    margin-bottom: 1.25rem;
}

.booking-dismiss {
    position: absolute;
    top: 1rem;
    right: 1rem;
    border: none;
    background: transparent;
    cursor: pointer;
    font-size: 1.1rem;
}

.step-indicator {
    display: flex;
    justify-content: center;
    gap: 6px;
}

.step-dot {
    height: 6px;
    width: 6px;
    border-radius: 999px;
    background: #000;
    opacity: 0.4;
    transition: all 0.3s;
}

.step-dot.active {
    width: 24px;
    opacity: 1;
}

.booking-body {
    padding: 1.5rem 2rem 2rem;
}

.booking-form {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.booking-field {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.booking-field label {
    font-size: 0.875rem;
    font-weight: 700;
}

.booking-field input,
.booking-field select {
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 12px;
    color: #000;
    font-weight: 500;
}

.booking-field input:focus,
.booking-field select:focus {
    outline: none;
    border-color: #008080;
}

.booking-primary {
    flex: 2;
    background: #008080;
    color: #fff;
    border: none;
    border-radius: 12px;
    padding: 1rem;
    font-weight: 700;
    cursor: pointer;
}

.booking-primary:hover {
    background: #006666;
}

.booking-secondary {
    flex: 1;
    background: #f3f4f6;
    border: none;
    border-radius: 12px;
    padding: 1rem;
    font-weight: 700;
    cursor: pointer;
}

.booking-primary:disabled,
.booking-secondary:disabled {
    opacity: 0.6;
    cursor: wait;
}

.booking-actions {
    display: flex;
    gap: 0.75rem;
    margin-top: 0.5rem;
}

.booking-fineprint {
    font-size: 10px;
    color: #9ca3af;
    text-align: center;
}

.booking-notice {
    background: #fef2f2;
    color: #991b1b;
    border-radius: 12px;
    padding: 0.75rem 1rem;
    font-size: 0.875rem;
}

.booking-success {
    padding: 2.5rem;
    min-height: 400px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.booking-success-icon {
    width: 80px;
    height: 80px;
    border-radius: 50%;
    background: #f0fdf4;
    color: #22c55e;
    font-size: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
}

.booking-success p {
    color: #4b5563;
    max-width: 260px;
    margin: 0.75rem auto 2rem;
}

.booking-close-button {
    padding: 0.9rem 2.5rem;
    background: #000;
    color: #fff;
    border: none;
    border-radius: 12px;
    font-weight: 700;
    cursor: pointer;
}

@keyframes bookingFade {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes bookingFadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}

@keyframes bookingPop {
    from { opacity: 0; transform: scale(0.95) translateY(20px); }
    to { opacity: 1; transform: scale(1) translateY(0); }
}
"#;
