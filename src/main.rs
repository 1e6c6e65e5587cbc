use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod booking {
    pub mod lead;
    pub mod modal;
    pub mod session;
    pub mod wizard;
}
mod components {
    pub mod booking_modal;
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod about;
    pub mod faq;
    pub mod features;
    pub mod hero;
    pub mod home;
    pub mod results;
    pub mod reviews;
}

use booking::modal::{BookingHandle, ModalVisibility};
use components::{booking_modal::BookingModal, footer::Footer, navbar::Nav};
use pages::home::{Home, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, booking: &BookingHandle) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home booking={booking.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let visibility = use_state_eq(ModalVisibility::default);

    let open = {
        let visibility = visibility.clone();
        Callback::from(move |_: ()| {
            let mut next = *visibility;
            if next.open() {
                info!("Booking modal opened");
                visibility.set(next);
            }
        })
    };
    let close = {
        let visibility = visibility.clone();
        Callback::from(move |_: ()| {
            let mut next = *visibility;
            if next.close() {
                info!("Booking modal closed");
                visibility.set(next);
            }
        })
    };
    let booking = BookingHandle::new(open, close);

    let render = {
        let booking = booking.clone();
        Callback::from(move |route: Route| switch(route, &booking))
    };

    html! {
        <BrowserRouter>
            <Nav booking={booking.clone()} />
            <Switch<Route> render={render} />
            <Footer />
            <BookingModal open={visibility.is_open()} handle={booking} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
