use yew::prelude::*;

use crate::booking::modal::BookingHandle;

const STRUGGLES: [&str; 5] = [
    "Syllabus feels overwhelming",
    "Studying but marks not improving",
    "Forgetting formulas during exams",
    "Poor time management",
    "Exam fear & confusion",
];

// Index-aligned with STRUGGLES: hovering a struggle lights up its answer.
const SOLUTIONS: [&str; 5] = [
    "Structured clarity-based learning",
    "Exam-oriented practice system",
    "Recall & accuracy training",
    "Time-bound mock strategy",
    "Confidence & performance mentoring",
];

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub booking: BookingHandle,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let hovered = use_state_eq(|| None::<usize>);

    let struggles = STRUGGLES.iter().enumerate().map(|(i, text)| {
        let enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
        };
        let leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        html! {
            <li
                class={classes!("struggle-item", (*hovered == Some(i)).then(|| "active"))}
                onmouseenter={enter}
                onmouseleave={leave}
            >
                {*text}
            </li>
        }
    });

    let solutions = SOLUTIONS.iter().enumerate().map(|(i, text)| {
        html! {
            <li class={classes!("solution-item", (*hovered == Some(i)).then(|| "highlighted"))}>
                {*text}
            </li>
        }
    });

    html! {
        <div class="features">
            <div class="features-header">
                <h2>{"Why Bright Bridge Works"}</h2>
                <p>{"\"We don't just teach. We fix the pattern.\""}</p>
            </div>

            <div class="features-columns">
                <div class="features-column">
                    <h3>{"The Struggle"}</h3>
                    <ul>{ for struggles }</ul>
                </div>
                <div class="features-flow" aria-hidden="true">
                    <span></span><span></span><span></span>
                </div>
                <div class="features-column">
                    <h3 class="teal">{"The Solution"}</h3>
                    <ul>{ for solutions }</ul>
                </div>
            </div>

            <div class="features-cta">
                <button class="cta-button" onclick={props.booking.open_on_click()}>
                    {"👉 See How Bright Bridge Solves Exam Stress"}
                </button>
            </div>

            <style>
                {r#"
                .features {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }

                .features-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .features-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #008080;
                    margin-bottom: 1rem;
                }

                .features-header p {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.25rem;
                }

                .features-columns {
                    display: grid;
                    grid-template-columns: 1fr 80px 1fr;
                    align-items: start;
                }

                .features-column {
                    background: #fff;
                    border-radius: 24px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.06);
                }

                .features-column h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    border-bottom: 1px solid #f3f4f6;
                    padding-bottom: 1rem;
                    margin-bottom: 2rem;
                }

                .features-column li {
                    list-style: none;
                    font-size: 1.125rem;
                    font-weight: 500;
                    padding: 0.75rem 0;
                    transition: all 0.3s;
                }

                .struggle-item {
                    cursor: default;
                }

                .struggle-item.active {
                    color: #7f1d1d;
                    transform: translateX(6px);
                }

                .solution-item {
                    opacity: 0.4;
                }

                .solution-item.highlighted {
                    opacity: 1;
                    color: #008080;
                    font-weight: 700;
                }

                .features-flow {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    height: 100%;
                }

                .features-flow span {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #008080;
                    animation: featuresFlow 3s linear infinite;
                }

                .features-flow span:nth-child(2) { animation-delay: 1s; }
                .features-flow span:nth-child(3) { animation-delay: 2s; }

                .features-cta {
                    text-align: center;
                    margin-top: 4rem;
                }

                @keyframes featuresFlow {
                    0% { opacity: 0; transform: translateX(-20px); }
                    50% { opacity: 1; }
                    100% { opacity: 0; transform: translateX(20px); }
                }

                @media (max-width: 900px) {
                    .features-columns {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .features-flow {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
