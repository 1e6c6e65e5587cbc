use yew::prelude::*;

#[function_component(Results)]
pub fn results() -> Html {
    let noticed = [
        "Children start understanding concepts clearly",
        "Classroom explanations become easier to follow",
        "Study fear reduces significantly",
        "Children ask doubts confidently",
        "Learning feels calmer and less stressful",
    ];
    let academic = [
        "Stronger foundation in basic concepts",
        "Better recall and understanding",
        "Improved writing and explanation ability",
        "Faster learning speed",
        "Reduced confusion while studying new topics",
    ];
    let mindset = [
        "Children stop saying “I don’t understand”",
        "Fear of studies reduces",
        "Willingness to try increases",
        "Learning becomes enjoyable again",
        "Self-belief improves steadily",
    ];
    let impact = [
        "Build a strong base for future classes",
        "Learn independently with confidence",
        "Face academic challenges without fear",
        "Develop healthy study habits",
    ];
    let feelings = [
        ("♡", "Relief from constant academic worry"),
        ("🛡", "Trust in the learning process"),
        ("↗", "Clear visibility of progress"),
        ("💬", "Better communication with mentors"),
        ("★", "Confidence about future learning"),
    ];
    let summary = [
        "Clear concept understanding",
        "Improved classroom performance",
        "Positive attitude towards studies",
        "Reduced stress & resistance",
        "Faster grasping ability",
    ];

    html! {
        <div class="results">
            <div class="results-header">
                <h2>{"Results That Speak For Themselves"}</h2>
                <p>
                    {"Bright Bridge is designed to deliver visible, meaningful improvement — not just temporary motivation."}
                    <br />
                    <span class="teal-bold">{"Within 15 days, parents and students consistently notice real change."}</span>
                </p>
            </div>

            <div class="results-card">
                <h3>{"⚡ What Parents Notice First"}</h3>
                <ul class="check-list">
                    { for noticed.iter().map(|text| html! { <li>{"✓ "}{*text}</li> }) }
                </ul>
                <p class="results-quote">
                    {"Parents often say:"}<br />
                    <span>{"“We can finally see clarity in our child’s learning.”"}</span>
                </p>
            </div>

            <div class="results-split">
                <div class="results-card">
                    <h3>{"🧠 Academic Improvements"}</h3>
                    <ul>{ for academic.iter().map(|text| html! { <li>{*text}</li> }) }</ul>
                    <p>{"Focus: "}<span class="teal-bold">{"Clarity comes first, performance follows."}</span></p>
                </div>
                <div class="results-card">
                    <h3>{"✨ Confidence & Mindset Change"}</h3>
                    <ul>{ for mindset.iter().map(|text| html! { <li>{*text}</li> }) }</ul>
                    <p>{"Outcome: "}<span class="teal-bold">{"When confidence improves, learning becomes effortless."}</span></p>
                </div>
            </div>

            <div class="results-impact">
                <h3>{"Long-Term Impact "}<span>{"(Not Short-Term Hype)"}</span></h3>
                <div class="impact-grid">
                    { for impact.iter().map(|text| html! { <div class="impact-card"><p>{*text}</p></div> }) }
                </div>
            </div>

            <div class="results-feel">
                <h3>{"What Parents Feel"}</h3>
                <div class="feel-grid">
                    { for feelings.iter().map(|(icon, text)| html! {
                        <div class="feel-card">
                            <span>{*icon}</span>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
                <p class="results-peace">{"Bright Bridge brings peace of mind to families."}</p>
            </div>

            <div class="results-summary">
                <div>
                    <h3>{"Real Results in Just 15 Days"}</h3>
                    <ul class="check-list">
                        { for summary.iter().map(|text| html! { <li>{"✓ "}{*text}</li> }) }
                    </ul>
                </div>
                <div class="results-promise">
                    <h4>{"The Promise"}</h4>
                    <p>{"Clear Foundations."}</p>
                    <p>{"Confident Learners."}</p>
                    <p>{"Lasting Improvement."}</p>
                    <p class="results-promise-note">
                        {"We don’t promise marks."}<br />{"We promise careful growth."}
                    </p>
                </div>
            </div>

            <p class="results-final">
                <span class="teal-bold">{"100% visible learning improvement in 15 days"}</span>
                <br />
                {"— because strong foundations change everything."}
            </p>

            <style>
                {r#"
                .results {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }

                .results-header {
                    text-align: center;
                }

                .results-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #008080;
                    margin-bottom: 1rem;
                }

                .results-header p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                }

                .results-card {
                    background: #fff;
                    border-radius: 24px;
                    padding: 2rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.06);
                    transition: all 0.3s;
                }

                .results-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .results h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .results li {
                    list-style: none;
                    margin-bottom: 0.75rem;
                    font-weight: 500;
                }

                .check-list li {
                    color: #111827;
                }

                .results-quote {
                    margin-top: 1.5rem;
                    font-style: italic;
                }

                .results-quote span {
                    color: #008080;
                    font-weight: 600;
                }

                .results-split {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .results-impact h3 span {
                    color: #6b7280;
                    font-weight: 500;
                }

                .impact-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .impact-card,
                .feel-card {
                    background: #E0F2F1;
                    border-radius: 16px;
                    padding: 1.5rem;
                    font-weight: 600;
                    transition: transform 0.3s;
                }

                .impact-card:hover,
                .feel-card:hover {
                    transform: translateY(-5px);
                }

                .feel-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1rem;
                }

                .feel-card {
                    background: #fff;
                    text-align: center;
                }

                .feel-card span {
                    font-size: 1.5rem;
                    color: #008080;
                }

                .results-peace {
                    text-align: center;
                    margin-top: 2rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .results-summary {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                    background: #008080;
                    color: #fff;
                    border-radius: 32px;
                    padding: 3rem;
                }

                .results-summary .check-list li {
                    color: #fff;
                }

                .results-promise {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    padding: 2rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .results-promise h4 {
                    color: #FACC15;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }

                .results-promise-note {
                    margin-top: 1.5rem;
                    font-size: 1rem;
                    font-weight: 500;
                    font-style: italic;
                }

                .results-final {
                    text-align: center;
                    font-size: 1.5rem;
                }

                @media (max-width: 900px) {
                    .results-split,
                    .results-summary,
                    .impact-grid,
                    .feel-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
