use chrono::Datelike;
use yew::prelude::*;

use super::navbar::Section;

const PROGRAM: [&str; 4] = [
    "1:1 Mentored Learning",
    "Exam-Focused Practice",
    "Scientific Revision",
    "Performance Tracking",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <img class="footer-logo" src="/assets/bright_bridge.png" alt="Bright Bridge" />
                    <p>{"Bridging students to clarity, confidence, and academic success."}</p>
                    <span class="footer-badge">{"⭐ Trusted by parents across Kerala"}</span>
                    <div class="footer-social">
                        <a href="https://www.instagram.com/mashmagic_/" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"IG"}</a>
                        <a href="https://wa.me/918281832158" target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">{"WA"}</a>
                    </div>
                </div>

                <div class="footer-column">
                    <h4>{"Program"}</h4>
                    <ul>
                        { for PROGRAM.iter().map(|item| html! { <li><a href="#">{*item}</a></li> }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        { for Section::ALL.iter().map(|section| html! {
                            <li><a href={format!("#{}", section.id())}>{section.label()}</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Contact Us"}</h4>
                    <address>
                        <h5>{"MASH MAGIC"}</h5>
                        <p>{"10/1744, 1st Floor, Suite #1012"}</p>
                        <p>{"Sowbhagya Building, Athani, Kakkanad,"}</p>
                        <p>{"Kusumagiri P.O, Kochi – 682030"}</p>
                    </address>
                    <p><span class="footer-label">{"Email: "}</span><a href="mailto:hellomashmagic@gmail.com">{"hellomashmagic@gmail.com"}</a></p>
                    <p><span class="footer-label">{"Phone: "}</span><a href="tel:7012128756">{"7012-128756"}</a></p>
                    <p><span class="footer-label">{"Website: "}</span><a href="https://www.mashmagicedu.com" target="_blank" rel="noopener noreferrer">{"www.mashmagicedu.com"}</a></p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {format!("© {} Bright Bridge Learning Platform. ", year)}
                    <span>{"Crafting Academic Clarity."}</span>
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #fff;
                    border-top: 1px solid #f3f4f6;
                    padding: 5rem 6rem 2.5rem;
                }

                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                .footer-logo {
                    height: 36px;
                    width: auto;
                    align-self: flex-start;
                }

                .footer-badge {
                    align-self: flex-start;
                    background: #fefce8;
                    border: 1px solid #fef9c3;
                    border-radius: 999px;
                    padding: 0.35rem 0.75rem;
                    font-size: 11px;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #000;
                }

                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }

                .footer-social a {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    border: 1px solid #f3f4f6;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.7rem;
                    color: #6b7280;
                    text-decoration: none;
                    transition: all 0.3s;
                }

                .footer-social a:hover {
                    background: #008080;
                    color: #fff;
                }

                .footer-column h4 {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #000;
                }

                .footer-column ul {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-column a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer-column a:hover {
                    color: #008080;
                }

                .footer-column address {
                    font-style: normal;
                }

                .footer-column h5,
                .footer-label {
                    font-weight: 700;
                    color: #000;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                }

                .footer-bottom {
                    margin-top: 4rem;
                    border-top: 1px solid #f3f4f6;
                    padding-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .footer-bottom span {
                    opacity: 0.7;
                }

                @media (max-width: 1024px) {
                    .site-footer {
                        padding: 4rem 1.5rem 2rem;
                    }

                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
