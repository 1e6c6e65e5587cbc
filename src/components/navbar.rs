use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;

use crate::booking::modal::BookingHandle;
use crate::config;

/// Landing page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Features,
    Results,
    Reviews,
    Faq,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Features,
        Section::Results,
        Section::Reviews,
        Section::Faq,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Features => "features",
            Section::Results => "results",
            Section::Reviews => "reviews",
            Section::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Features => "Features",
            Section::Results => "Results",
            Section::Reviews => "Reviews",
            Section::Faq => "FAQ",
        }
    }
}

/// First section whose top edge sits inside the highlight window.
pub fn spy<I>(tops: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, f64)>,
{
    tops.into_iter()
        .find(|(_, top)| (config::SPY_WINDOW_TOP_PX..config::SPY_WINDOW_BOTTOM_PX).contains(top))
        .map(|(section, _)| section)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD_PX
}

fn section_tops() -> Vec<(Section, f64)> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return Vec::new(),
    };
    Section::ALL
        .iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.id())
                .map(|el| (*section, el.get_bounding_client_rect().top()))
        })
        .collect()
}

/// Scroll position that puts a section's top just below the fixed navbar.
pub fn scroll_target(offset_top: i32) -> f64 {
    f64::from(offset_top) - config::NAV_OFFSET_PX
}

fn scroll_to_section(section: Section) -> bool {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return false,
    };
    let element = match window
        .document()
        .and_then(|d| d.get_element_by_id(section.id()))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(element) => element,
        None => return false,
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(element.offset_top()));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub booking: BookingHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let active = use_state_eq(|| Section::Home);
    let menu_open = use_state_eq(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = spy(section_tops()) {
                    active.set(section);
                }
                || ()
            },
            scroll_y,
        );
    }

    let go_to = {
        let active = active.clone();
        let menu_open = menu_open.clone();
        move |section: Section| {
            let active = active.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                if scroll_to_section(section) {
                    active.set(section);
                }
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let book = {
        let menu_open = menu_open.clone();
        let booking = props.booking.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            booking.open();
        })
    };

    let links = |class: &'static str| -> Html {
        Section::ALL
            .iter()
            .map(|section| {
                html! {
                    <button
                        class={classes!(class, (*active == *section).then(|| "active"))}
                        onclick={go_to(*section)}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to(Section::Home)}>
                    <img src="/assets/bright_bridge.png" alt="Bright Bridge" />
                </a>

                <div class="nav-links">
                    {links("nav-link")}
                </div>

                <button class="nav-cta desktop-only" onclick={book.clone()}>
                    {"Free Diagnostic Session"}
                </button>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                {links("mobile-link")}
                <button class="nav-cta" onclick={book}>
                    {"Free Diagnostic Session"}
                </button>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: transparent;
                    transition: all 0.3s ease-in-out;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    padding: 1rem 0;
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo img {
                    height: 40px;
                    width: auto;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link,
                .mobile-link {
                    position: relative;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    font-weight: 500;
                    color: #000;
                    transition: color 0.3s;
                }

                .nav-link::after {
                    content: '';
                    position: absolute;
                    bottom: -4px;
                    left: 50%;
                    transform: translateX(-50%);
                    height: 2px;
                    width: 0;
                    background: #008080;
                    transition: width 0.3s ease-out;
                }

                .nav-link:hover,
                .nav-link.active,
                .mobile-link.active {
                    color: #008080;
                }

                .nav-link:hover::after,
                .nav-link.active::after {
                    width: 100%;
                }

                .nav-cta {
                    background: #FACC15;
                    color: #000;
                    border: none;
                    border-radius: 999px;
                    padding: 0.65rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s;
                }

                .nav-cta:hover {
                    background: #008080;
                    color: #fff;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 1024px) {
                    .nav-links,
                    .desktop-only {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                        background: #fff;
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        transition: all 0.3s ease-in-out;
                    }

                    .mobile-menu.open {
                        max-height: 450px;
                        opacity: 1;
                        padding: 2rem 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlights_first_section_inside_window() {
        let tops = [
            (Section::Home, -900.0),
            (Section::About, -40.0),
            (Section::Features, 250.0),
            (Section::Results, 900.0),
        ];
        assert_eq!(spy(tops), Some(Section::About));
    }

    #[test]
    fn window_is_half_open() {
        assert_eq!(spy([(Section::Faq, -100.0)]), Some(Section::Faq));
        assert_eq!(spy([(Section::Faq, 300.0)]), None);
        assert_eq!(spy([(Section::Faq, -100.5)]), None);
    }

    #[test]
    fn nothing_in_window_keeps_previous_highlight() {
        assert_eq!(spy([(Section::Reviews, -2000.0), (Section::Faq, 1200.0)]), None);
        assert_eq!(spy(Vec::new()), None);
    }

    #[test]
    fn navbar_turns_solid_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn scroll_target_clears_the_navbar() {
        assert_eq!(scroll_target(1280), 1200.0);
        assert_eq!(scroll_target(0), -80.0);
    }

    #[test]
    fn section_ids_match_anchor_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "about", "features", "results", "reviews", "faq"]);
    }
}
