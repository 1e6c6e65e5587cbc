use yew::prelude::*;

use crate::booking::modal::BookingHandle;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub booking: BookingHandle,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let cards = [
        ("▤", "Strong Basics", "Rebuilding foundation in 15 days"),
        ("↗", "Visible Growth", "100% improvement you can see"),
        ("◉", "1-on-1 Focus", "Personalised coaching attention"),
        ("♡", "Mentor Care", "Scientific & emotional support"),
    ];

    html! {
        <div class="hero">
            <div class="hero-grid">
                <div class="hero-text">
                    <h1>
                        <span class="teal">{"Strong Basics."}</span>
                        <span>{"Clear Concepts."}</span>
                        <span class="teal">{"Guaranteed Improvement"}</span>
                        <span class="hero-tagline">{"— in just 15 days."}</span>
                    </h1>
                    <h2>
                        {"Bright Bridge is a foundation-building program designed to reset weak basics, fix learning gaps, and bring "}
                        <strong class="teal">{"100% visible improvement"}</strong>
                        {"."}
                    </h2>
                    <div>
                        <button class="cta-button" onclick={props.booking.open_on_click()}>
                            {"Book a Free Diagnostic Session"}
                        </button>
                        <p class="hero-note">{"No commitment required. Just clarity."}</p>
                    </div>
                </div>
                <div class="hero-image">
                    <img src="/assets/hero-student.png" alt="Confident Student Learning" />
                </div>
            </div>

            <div class="hero-cards">
                { for cards.iter().map(|(icon, title, desc)| html! {
                    <div class="icon-card">
                        <div class="icon-card-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .hero {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                    padding: 10rem 6rem 4rem;
                    overflow: hidden;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    align-items: center;
                }

                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                }

                .hero h1 span {
                    display: block;
                    margin-bottom: 0.5rem;
                    animation: heroRise 0.8s cubic-bezier(0.22, 1, 0.36, 1) both;
                }

                .hero h1 span:nth-child(2) { animation-delay: 0.2s; }
                .hero h1 span:nth-child(3) { animation-delay: 0.4s; }
                .hero h1 span:nth-child(4) { animation-delay: 0.6s; }

                .hero .hero-tagline {
                    font-size: 2.25rem;
                    font-weight: 500;
                    margin-top: 1rem;
                }

                .hero h2 {
                    font-size: 1.25rem;
                    font-weight: 500;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin: 2rem 0;
                }

                .hero-note {
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-top: 1rem;
                    padding-left: 1rem;
                }

                .hero-image {
                    height: 600px;
                    display: flex;
                    justify-content: flex-end;
                }

                .hero-image img {
                    height: 100%;
                    object-fit: contain;
                    animation: heroFloat 6s ease-in-out infinite;
                }

                .hero-cards {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .icon-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1rem;
                    text-align: center;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.05);
                    transition: all 0.3s;
                }

                .icon-card:hover {
                    transform: translateY(-3px);
                }

                .icon-card-icon {
                    display: inline-block;
                    padding: 0.6rem 0.8rem;
                    background: #f9fafb;
                    border-radius: 8px;
                    color: #9ca3af;
                    transition: all 0.5s ease-out;
                }

                .icon-card:hover .icon-card-icon {
                    color: #008080;
                    background: #E0F2F1;
                }

                .icon-card h3 {
                    font-size: 1rem;
                    font-weight: 700;
                    margin: 0.5rem 0 0.1rem;
                }

                .icon-card p {
                    font-size: 0.75rem;
                    font-weight: 500;
                }

                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes heroFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-15px); }
                }

                @media (max-width: 1024px) {
                    .hero {
                        padding: 8rem 1.5rem 4rem;
                    }

                    .hero-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .hero .hero-tagline {
                        font-size: 1.5rem;
                    }

                    .hero-image {
                        height: 400px;
                        justify-content: center;
                    }

                    .hero-cards {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
