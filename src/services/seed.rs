use crate::models::Question;

/// Built-in question catalog
///
/// Written to the store at startup (replace-all) and served directly as a
/// fallback when the store is unreachable or holds no questions, so the
/// frontend always has a catalog to render.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "How do you prefer to spend a free evening?",
            &[
                "Sports or exercise",
                "Reading or studying",
                "Going out with friends",
                "Watching films or series",
                "Playing games",
            ],
        ),
        Question::new(
            2,
            "Which part of a group project do you enjoy most?",
            &[
                "Researching and gathering material",
                "Structuring and outlining the work",
                "Writing and polishing the text",
                "Presenting the results",
                "Coordinating the team",
                "Reviewing and editing at the end",
            ],
        ),
        Question::new(
            3,
            "How do you prefer to work on projects?",
            &[
                "Alone, with full autonomy",
                "In a collaborative team",
                "With clearly defined roles",
                "With room to change approach",
                "With regular supervision and feedback",
            ],
        ),
        Question::new(
            4,
            "What do you value most in a teammate?",
            &[
                "Responsibility and commitment",
                "Creativity and fresh ideas",
                "Solid technical knowledge",
                "Good communication skills",
                "Problem-solving ability",
            ],
        ),
        Question::new(
            5,
            "How do you plan your work over a term?",
            &[
                "Everything scheduled in advance",
                "A rough plan adjusted as I go",
                "Short intense bursts near deadlines",
                "A steady routine every week",
                "I improvise depending on the moment",
            ],
        ),
        Question::new(
            6,
            "Which definition of friendship feels closest to yours?",
            &[
                "A deep emotional connection",
                "A conscious, lasting commitment",
                "Shared history and habits",
                "An intense bond that grows with time",
                "A meeting of kindred spirits",
                "Something shaped by circumstance",
            ],
        ),
        Question::new(
            7,
            "What matters most to you in a close relationship?",
            &[
                "Trust and honesty",
                "Open communication",
                "Passion and attraction",
                "Shared values and goals",
                "Respect and personal freedom",
                "Mutual support in hard times",
            ],
        ),
        Question::new(
            8,
            "How do you best express appreciation for someone?",
            &[
                "Through words and open declarations",
                "Through everyday actions and small details",
                "Through physical affection",
                "By dedicating quality time",
                "By sharing plans and dreams",
                "By offering unconditional support",
            ],
        ),
        Question::new(
            9,
            "Which bond do you think shapes a person's life the most?",
            &[
                "A romantic partnership",
                "Family ties",
                "Close friendships",
                "Self-acceptance and self-regard",
                "The bond with animals or pets",
                "A sense of connection to humanity",
            ],
        ),
        Question::new(
            10,
            "How do you see the relation between closeness and independence?",
            &[
                "Real closeness creates independence",
                "Closeness implies some limits and commitments",
                "They pull in opposite directions",
                "Independence is needed before closeness",
                "It depends on the relationship",
            ],
        ),
    ]
}
