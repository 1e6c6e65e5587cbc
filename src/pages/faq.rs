use yew::prelude::*;

use crate::booking::modal::BookingHandle;

struct FaqCategory {
    title: &'static str,
    icon: &'static str,
    questions: &'static [(&'static str, &'static str)],
    /// Reassurance box rendered after the category.
    aside: Option<(&'static str, &'static str)>,
}

const FAQ: &[FaqCategory] = &[
    FaqCategory {
        title: "About Bright Bridge",
        icon: "ℹ",
        questions: &[
            ("What exactly is Bright Bridge?", "Bright Bridge is a foundation-focused learning platform designed to identify and fix the root causes of a student's academic struggles. We don't just teach subjects; we rebuild the clarity and confidence required for a lifetime of effective learning."),
            ("Is this tuition or something more?", "Traditional tuition focuses on finishing the school syllabus and chasing marks. Bright Bridge is much more—we focus on 'Learning Rehabilitation.' We go back to where the student started losing track and rebuild their fundamentals from that point."),
            ("Who is Bright Bridge NOT for?", "It is not for students looking for quick shortcuts to pass an exam without understanding the subject. It is also not suitable for those who want a crowded classroom environment; we are built for focused, high-intent learning."),
            ("How is this different from coaching centres?", "Coaching centres usually move at a fixed speed to cover a vast syllabus. At Bright Bridge, the pace is dictated by the student. We don't move to Chapter 2 until we are 100% sure the student has mastered the fundamentals of Chapter 1."),
        ],
        aside: Some(("Still unsure? That’s okay.", "Every student learning path is unique. We are here to help you navigate it.")),
    },
    FaqCategory {
        title: "Programs & Learning Model",
        icon: "📖",
        questions: &[
            ("What happens in the free demo?", "The demo is actually a Diagnostic Session. We assess the student's current understanding, identify hidden learning gaps, and show you exactly where the confusion started. It’s an eye-opener for both students and parents."),
            ("Is the syllabus rushed or balanced?", "We never rush. Our priority is quality over quantity. We follow a 'Layered Mastery' model where we balance clear concept building with regular revision, ensuring the student never feels overwhelmed."),
            ("How do you track improvement?", "We don't just track marks. We monitor 'Clarity Metrics'—how fast a student understands a new topic, how accurately they recall previous concepts, and how much their fear of the subject has decreased."),
        ],
        aside: None,
    },
    FaqCategory {
        title: "Mentors & Support System",
        icon: "👥",
        questions: &[
            ("Who teaches the classes?", "Our mentors are subject matter experts who are specifically trained in 'Concept-Oriented Teaching.' They aren't just teachers; they are academic coaches who understand student psychology."),
            ("Are mentors different from teachers?", "Yes. While a teacher delivers a lecture, a mentor observes the student's learning patterns, identifies where they get stuck, and provides personalised emotional and academic support to clear those blocks."),
            ("Will my child get individual attention?", "Absolutely. We maintain a strict student-to-mentor ratio to ensure that every doubt is heard and every struggle is addressed. Your child is never just another face in a crowd at Bright Bridge."),
        ],
        aside: Some(("Most parents had the same questions.", "Deciding on your child's education is a big step. We ensure you have all the facts.")),
    },
    FaqCategory {
        title: "Exams & Results",
        icon: "◎",
        questions: &[
            ("How do you reduce exam fear?", "Exam fear usually comes from lack of preparation or lack of clarity. By building a rock-solid foundation and conducting high-frequency, low-stress mini-tests, we make the actual exam feel like just another practice day."),
            ("Are results guaranteed?", "We promise 100% visible improvement in 15 days. While 'guaranteeing' a specific rank is impossible (and dishonest), we guarantee that your child will understand the subject better and approach studies with significantly more confidence."),
            ("Is last-month preparation enough?", "While we can show significant progress in a short time, true mastery takes consistent effort. Our 15-day reset is designed to put the student on the right track, but long-term success comes from following the system we build."),
        ],
        aside: None,
    },
    FaqCategory {
        title: "Parents’ Common Doubts",
        icon: "💬",
        questions: &[
            ("Will parents get updates?", "Yes. We provide transparent and detailed progress reports. You won't just see marks; you'll see which specific concepts your child has mastered and where they are still practicing."),
            ("What if my child is already good?", "Even 'good' students often have invisible gaps that create trouble in higher classes. Bright Bridge helps high-performers achieve 'Elite Mastery'—perfecting their accuracy and speed to reach top-tier results."),
            ("What if we are not satisfied?", "Transparency is our core value. If you feel the program isn't the right fit for your child within the first few sessions, we have a clear and honest refund/exit policy because we only want to work with families who see genuine value."),
        ],
        aside: Some(("Transparency First.", "We update parents at every milestone of their child's progress.")),
    },
    FaqCategory {
        title: "Enrollment & Privacy",
        icon: "🛡",
        questions: &[
            ("Can my child stop anytime?", "Yes. We believe in earning your trust every single day. There are no restrictive long-term contracts that force you to stay if you're not seeing the promised results."),
            ("How are the timings handled?", "We offer flexible scheduling to ensure the program doesn't clash with school hours or other essential activities. Learning should be a part of their day, not a burden on it."),
        ],
        aside: None,
    },
];

/// (category, question) position of a FAQ entry.
pub type FaqKey = (usize, usize);

/// Only one answer is open on the page; clicking the open one closes it.
pub fn toggle(open: Option<FaqKey>, clicked: FaqKey) -> Option<FaqKey> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub booking: BookingHandle,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state_eq(|| None::<FaqKey>);

    let categories = FAQ.iter().enumerate().map(|(cat_idx, category)| {
        let questions = category.questions.iter().enumerate().map(|(q_idx, (question, answer))| {
            let key = (cat_idx, q_idx);
            let is_open = *open == Some(key);
            let onclick = {
                let open = open.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    open.set(toggle(*open, key));
                })
            };
            html! {
                <div class={classes!("faq-item", is_open.then(|| "open"))}>
                    <button class="faq-question" onclick={onclick}>
                        <span class="question-text">{*question}</span>
                        <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                    </button>
                    <div class="faq-answer">
                        <p>{*answer}</p>
                    </div>
                </div>
            }
        });

        html! {
            <div class="faq-category">
                <h2><span class="faq-category-icon">{category.icon}</span>{category.title}</h2>
                { for questions }
                {
                    if let Some((headline, body)) = category.aside {
                        html! {
                            <div class="faq-aside">
                                <p class="faq-aside-headline">{headline}</p>
                                <p>{body}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    });

    let cards = [
        ("⚙", "How Bright Bridge Works", "A clear step-by-step system from diagnosis to improvement."),
        ("👤", "Who This Is For", "Students who want clarity, confidence, and consistent progress."),
        ("✨", "Why We Are Different", "Personal mentors, focused teaching, and honest tracking."),
    ];

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Got Questions? We’ve Got "}<span class="teal">{"Clear Answers."}</span></h1>
                <p>{"Everything students and parents want to know about Bright Bridge — explained simply and honestly."}</p>
                <div class="faq-cards">
                    { for cards.iter().map(|(icon, title, desc)| html! {
                        <div class="faq-card">
                            <span>{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </div>
                    }) }
                </div>
                <p class="faq-promise">{"“Every question you have is answered here — honestly and transparently.”"}</p>
                <button class="cta-button" onclick={props.booking.open_on_click()}>
                    {"Book a Free Demo Session →"}
                </button>
            </section>

            <section class="faq-section">
                { for categories }
            </section>

            <section class="faq-contact">
                <h2>{"Still Have Questions? "}<span class="teal">{"Let’s Talk."}</span></h2>
                <p>{"Every student is different. Speak with our academic team to find what truly fits your child's needs."}</p>
                <button class="cta-button" onclick={props.booking.open_on_click()}>
                    {"Talk to Our Team"}
                </button>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding: 6rem 1.5rem;
                }

                .faq-hero,
                .faq-contact {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .faq-hero > p {
                    font-size: 1.25rem;
                    font-weight: 500;
                }

                .faq-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin: 3rem 0;
                }

                .faq-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.25rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.06);
                }

                .faq-card span {
                    color: #008080;
                }

                .faq-card h3 {
                    font-weight: 700;
                    margin: 0.5rem 0;
                }

                .faq-card p {
                    font-size: 0.75rem;
                }

                .faq-promise {
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #008080;
                    margin-bottom: 2rem;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 4rem auto;
                }

                .faq-category h2 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #008080;
                    margin: 3rem 0 1rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 16px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item.open {
                    border-color: #008080;
                    box-shadow: 0 10px 25px -10px rgba(0, 128, 128, 0.2);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #008080;
                    margin-left: 1rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: all 0.3s ease-out;
                }

                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    line-height: 1.7;
                }

                .faq-aside {
                    margin: 2.5rem 0;
                    text-align: center;
                    border: 1px dashed #e5e7eb;
                    border-radius: 24px;
                    padding: 2rem;
                    background: rgba(255, 255, 255, 0.5);
                }

                .faq-aside-headline {
                    color: #008080;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                }

                .faq-contact {
                    background: #E0F2F1;
                    border-radius: 32px;
                    padding: 4rem 2rem;
                }

                .faq-contact h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .faq-contact p {
                    font-size: 1.125rem;
                    margin: 1rem 0 2rem;
                }

                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2rem;
                    }

                    .faq-cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_another_question_closes_the_first() {
        let open = toggle(None, (0, 1));
        assert_eq!(open, Some((0, 1)));
        assert_eq!(toggle(open, (3, 0)), Some((3, 0)));
    }

    #[test]
    fn clicking_the_open_question_closes_it() {
        assert_eq!(toggle(Some((2, 2)), (2, 2)), None);
    }

    #[test]
    fn every_category_has_questions() {
        assert_eq!(FAQ.len(), 6);
        assert!(FAQ.iter().all(|c| !c.questions.is_empty()));
        assert_eq!(FAQ.iter().filter(|c| c.aside.is_some()).count(), 3);
    }
}
