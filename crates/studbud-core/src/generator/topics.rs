//! Topic and phase catalogs used during schedule generation.

/// Keyword buckets matched against the subject string, first match wins.
/// Matching is a case-insensitive substring check.
const SUBJECT_BUCKETS: &[(&[&str], &[&str])] = &[
    (
        &["math"],
        &["Algebra", "Calculus", "Statistics", "Geometry", "Trigonometry"],
    ),
    (
        &["science", "physics", "chemistry", "biology"],
        &["Physics", "Chemistry", "Biology", "Environmental Science"],
    ),
    (
        &["language", "english", "literature"],
        &[
            "Grammar",
            "Vocabulary",
            "Reading Comprehension",
            "Writing",
            "Speaking",
        ],
    ),
    (
        &["history"],
        &[
            "Ancient History",
            "Modern History",
            "World Wars",
            "Political Systems",
        ],
    ),
    (
        &["business", "management"],
        &["Marketing", "Finance", "Operations", "Strategy", "Leadership"],
    ),
];

/// Generic topics for subjects that match no bucket.
const FALLBACK_TOPICS: &[&str] = &[
    "Introduction",
    "Core Concepts",
    "Advanced Topics",
    "Applications",
    "Review",
];

/// Ordered project phases with their activities.
pub const PROJECT_PHASES: &[(&str, &[&str])] = &[
    (
        "Research",
        &[
            "Literature Review",
            "Data Collection",
            "Market Analysis",
            "Requirements Gathering",
        ],
    ),
    (
        "Planning",
        &[
            "Project Scope",
            "Timeline Creation",
            "Resource Planning",
            "Risk Assessment",
        ],
    ),
    (
        "Development",
        &["Prototype Creation", "Implementation", "Testing", "Iteration"],
    ),
    (
        "Finalization",
        &[
            "Documentation",
            "Presentation Prep",
            "Final Review",
            "Submission",
        ],
    ),
];

/// Resolve the topic list for a free-text subject.
pub fn subject_topics(subject: &str) -> &'static [&'static str] {
    let subject = subject.to_lowercase();
    for (keywords, topics) in SUBJECT_BUCKETS {
        if keywords.iter().any(|keyword| subject.contains(keyword)) {
            return topics;
        }
    }
    FALLBACK_TOPICS
}
