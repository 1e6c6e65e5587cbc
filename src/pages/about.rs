use yew::prelude::*;

const AUDIENCE: [(&str, &str); 6] = [
    ("🧠", "Students with weak fundamentals"),
    ("🌧", "Children simply struggling in class"),
    ("💬", "Learners who say “I don’t understand”"),
    ("🎓", "Students promoted without clarity"),
    ("♡", "Children lacking confidence or interest"),
    ("✔", "Parents worried about long-term growth"),
];

const NOT_LIST: [&str; 3] = [
    "Not exam-oriented or rushed",
    "Not focused on chasing marks",
    "Not driven by syllabus completion",
];

const FOCUS_LIST: [&str; 4] = [
    "Understanding before memorising",
    "Confidence before speed",
    "Clarity before performance",
    "Emotional safety in learning",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about">
            <div class="about-intro">
                <h2>{"What is Bright Bridge?"}</h2>
                <p class="about-lead">
                    {"A short-term, high-impact foundation rebuilding program designed to reset learning habits."}
                </p>
                <p>
                    {"Bright Bridge systematically identifies and fixes root-level learning gaps. It helps students "}
                    <span class="teal-bold">{"rebuild understanding step by step"}</span>
                    {", ensuring they move from confusion to clarity without the stress of regular academic pressure."}
                </p>
            </div>

            <div class="about-audience">
                <h2>{"Who is Bright Bridge For?"}</h2>
                <p>{"Designed for students who need a fresh start with their basics."}</p>
                <div class="target-grid">
                    { for AUDIENCE.iter().map(|(icon, text)| html! {
                        <div class="target-card">
                            <span class="target-icon">{*icon}</span>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>

            <blockquote class="about-quote">
                {"“Every child learns at their own speed — without pressure.”"}
            </blockquote>

            <div class="about-difference">
                <h2>{"What Makes Bright Bridge Different?"}</h2>
                <div class="difference-columns">
                    <div class="difference-column muted">
                        <h3>{"Bright Bridge Is:"}</h3>
                        <ul>
                            { for NOT_LIST.iter().map(|text| html! { <li>{"✕ "}{*text}</li> }) }
                        </ul>
                    </div>
                    <div class="difference-column focus">
                        <h3>{"Instead, We Focus On:"}</h3>
                        <ul>
                            { for FOCUS_LIST.iter().map(|text| html! { <li>{"☀ "}{*text}</li> }) }
                        </ul>
                    </div>
                </div>
                <p class="about-closing">
                    {"That’s why improvement happens naturally — and "}
                    <span class="teal-bold">{"stays."}</span>
                </p>
            </div>

            <style>
                {r#"
                .about {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }

                .about h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #008080;
                    margin-bottom: 1rem;
                }

                .about-intro p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    max-width: 48rem;
                }

                .about-lead {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .target-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .target-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    background: #fff;
                    transition: all 0.3s;
                }

                .target-card:hover {
                    transform: translateY(-5px);
                    border-color: #008080;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                }

                .target-icon {
                    font-size: 1.5rem;
                    color: #008080;
                }

                .about-quote {
                    text-align: center;
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.75rem;
                    color: #008080;
                }

                .about-difference h2 {
                    text-align: center;
                }

                .difference-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-top: 2rem;
                }

                .difference-column {
                    padding: 2rem;
                    border-radius: 24px;
                }

                .difference-column.muted {
                    background: #f9fafb;
                }

                .difference-column.focus {
                    background: #E0F2F1;
                }

                .difference-column h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }

                .difference-column.focus h3 {
                    color: #008080;
                }

                .difference-column li {
                    list-style: none;
                    font-size: 1.05rem;
                    margin-bottom: 0.9rem;
                }

                .difference-column.muted li {
                    color: #6b7280;
                }

                .about-closing {
                    text-align: center;
                    font-size: 1.25rem;
                    margin-top: 2rem;
                }

                @media (max-width: 900px) {
                    .target-grid,
                    .difference-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
