use yew::prelude::*;

use crate::booking::modal::BookingHandle;

struct StudentStory {
    name: &'static str,
    grade: &'static str,
    quote: &'static str,
    tag: &'static str,
    tone: &'static str,
}

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    details: &'static str,
}

const STUDENTS: [StudentStory; 3] = [
    StudentStory {
        name: "Arjun Mehta",
        grade: "Grade 5",
        quote: "I used to feel scared in Math class. Now I raise my hand to answer questions!",
        tag: "Confidence Boosted",
        tone: "orange",
    },
    StudentStory {
        name: "Sana Khan",
        grade: "Grade 7",
        quote: "My basics were weak, but Bright Bridge fixed them. Learning feels easy now.",
        tag: "Clear Concepts",
        tone: "purple",
    },
    StudentStory {
        name: "Rohan Das",
        grade: "Grade 4",
        quote: "I finished the 15-day program and now I can solve problems faster than my friends!",
        tag: "Faster Solving",
        tone: "blue",
    },
];

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "Finally a tuition platform that actually cares about the child's understanding.",
        name: "Mohammed Aslam",
        details: "Father of Ziyan | Grade 7 | Kozhikode",
    },
    Testimonial {
        quote: "The gap identification test was an eye opener. We know exactly where to focus now.",
        name: "Anjali P.",
        details: "Mother of Meenakshi | Grade 5 | Trivandrum",
    },
    Testimonial {
        quote: "Supportive mentors and excellent teaching quality. Highly recommend Bright Bridge.",
        name: "Deepak K.",
        details: "Father of Rohan | Grade 9 | Mumbai",
    },
    Testimonial {
        quote: "My son used to hate Math. Now he solves problems on his own without fear.",
        name: "Sarah Thomas",
        details: "Mother of Kevin | Grade 6 | Kochi",
    },
    Testimonial {
        quote: "It's not just about marks, they actually build confidence. That's rare to find.",
        name: "Rajesh V.",
        details: "Father of Arjun | Grade 8 | Bangalore",
    },
];

const VIDEOS: [(&str, &str); 3] = [
    ("Math Anxiety Gone", "Priya's Mom"),
    ("From Failing to Confidence", "Rahul's Dad"),
    ("Finally Loves Studying", "Ananya's Parents"),
];

const STATS: [(&str, &str, &str); 4] = [
    ("★", "4.9/5", "Parent Satisfaction"),
    ("✔", "Grades 4-9", "Programs Supported"),
    ("↗", "15 Days", "Visible Results"),
    ("◷", "1:1 Focus", "Mentor Support"),
];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub booking: BookingHandle,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    // Rendered twice so the marquee can loop seamlessly at -50%.
    let marquee = TESTIMONIALS.iter().chain(TESTIMONIALS.iter()).map(|t| {
        html! {
            <div class="testimonial-card">
                <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                <p class="testimonial-name">{t.name}</p>
                <p class="testimonial-details">{t.details}</p>
            </div>
        }
    });

    html! {
        <div class="reviews">
            <div class="reviews-header">
                <span class="reviews-badge">{"Trusted by 100+ Families | Results in 15 Days"}</span>
                <p>{"See how Bright Bridge transforms confusion into confidence through the words of students and parents."}</p>
            </div>

            <div class="student-grid">
                { for STUDENTS.iter().map(|s| html! {
                    <div class="student-card">
                        <div class="student-head">
                            <span class={classes!("student-avatar", s.tone)}>{initial(s.name)}</span>
                            <div>
                                <h3>{s.name}</h3>
                                <p>{s.grade}</p>
                            </div>
                        </div>
                        <p class="student-quote">{format!("\"{}\"", s.quote)}</p>
                        <span class={classes!("student-tag", s.tone)}>{s.tag}</span>
                    </div>
                }) }
            </div>

            <div class="reviews-marquee">
                <h2>{"What Parents Say "}<span class="teal">{"Every Day"}</span></h2>
                <p>{"Real words from real families across the globe"}</p>
                <div class="marquee-window">
                    <div class="marquee-track">{ for marquee }</div>
                </div>
            </div>

            <div class="reviews-videos">
                <h2>{"Parents Speak. "}<span class="teal">{"Results Show."}</span></h2>
                <p>{"Hear directly from parents about the change they witnessed."}</p>
                <div class="video-grid">
                    { for VIDEOS.iter().map(|(title, author)| html! {
                        <div class="video-card">
                            <div class="video-thumb">{"▶"}</div>
                            <h3>{*title}</h3>
                            <p>{*author}</p>
                        </div>
                    }) }
                </div>
            </div>

            <div class="stats-strip">
                { for STATS.iter().map(|(icon, title, desc)| html! {
                    <div class="stat-item">
                        <span>{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>

            <div class="reviews-cta">
                <h2>{"See the Bright Bridge Difference"}</h2>
                <p>{"Don't let them struggle in silence. Give them the foundation they deserve today."}</p>
                <button class="cta-button" onclick={props.booking.open_on_click()}>
                    {"Book a Free Diagnostic Session"}
                </button>
            </div>

            <style>
                {r#"
                .reviews {
                    padding: 6rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                    overflow: hidden;
                }

                .reviews h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                }

                .reviews-header,
                .reviews-marquee > p,
                .reviews-videos > p {
                    text-align: center;
                }

                .reviews-badge {
                    display: inline-block;
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .reviews-header p {
                    font-size: 1.25rem;
                    font-weight: 500;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .student-grid,
                .video-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .student-card {
                    background: #fff;
                    border-radius: 24px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.06);
                    transition: all 0.3s;
                }

                .student-card:hover {
                    transform: translateY(-8px);
                }

                .student-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .student-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .student-quote {
                    font-style: italic;
                    flex-grow: 1;
                }

                .student-tag {
                    align-self: flex-start;
                    border-radius: 999px;
                    padding: 0.3rem 0.8rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                .orange { background: #ffedd5; color: #ea580c; }
                .purple { background: #f3e8ff; color: #9333ea; }
                .blue { background: #dbeafe; color: #2563eb; }

                .marquee-window {
                    overflow: hidden;
                    margin-top: 2rem;
                }

                .marquee-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    animation: marquee 40s linear infinite;
                }

                .marquee-track:hover {
                    animation-play-state: paused;
                }

                .testimonial-card {
                    width: 300px;
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.08);
                }

                .testimonial-quote {
                    font-size: 0.8rem;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .testimonial-name {
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .testimonial-details {
                    font-size: 10px;
                }

                .video-card {
                    text-align: center;
                }

                .video-thumb {
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #008080, #004d4d);
                    color: #fff;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }

                .stats-strip {
                    max-width: 1100px;
                    margin: 0 auto;
                    width: 100%;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    text-align: center;
                }

                .stat-item span {
                    color: #008080;
                    font-size: 1.5rem;
                }

                .reviews-cta {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                    background: #E0F2F1;
                    border-radius: 32px;
                    padding: 4rem 2rem;
                }

                .reviews-cta h2 {
                    color: #008080;
                }

                .reviews-cta p {
                    font-size: 1.125rem;
                    margin: 1rem 0 2rem;
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                @media (max-width: 900px) {
                    .student-grid,
                    .video-grid,
                    .stats-strip {
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

    #[test]
    fn avatar_initial_is_first_letter() {
        assert_eq!(initial("Sana Khan"), "S");
        assert_eq!(initial(""), "");
    }
}
