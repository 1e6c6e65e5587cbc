use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::modal::BookingHandle;
use crate::components::navbar::Section;
use crate::pages::{
    about::About, faq::Faq, features::Features, hero::Hero, results::Results, reviews::Reviews,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub booking: BookingHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let booking = &props.booking;

    html! {
        <main class="landing">
            <section id={Section::Home.id()}>
                <Hero booking={booking.clone()} />
            </section>
            <section id={Section::About.id()}>
                <About />
            </section>
            <section id={Section::Features.id()}>
                <Features booking={booking.clone()} />
            </section>
            <section id={Section::Results.id()}>
                <Results />
            </section>
            <section id={Section::Reviews.id()}>
                <Reviews booking={booking.clone()} />
            </section>
            <section id={Section::Faq.id()}>
                <Faq booking={booking.clone()} />
            </section>
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("cta-button")}>
                {"Back to Bright Bridge"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                    padding: 8rem 1.5rem 4rem;
                }

                .not-found h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #008080;
                }

                .not-found .cta-button {
                    text-decoration: none;
                }
                "#}
            </style>
        </main>
    }
}
