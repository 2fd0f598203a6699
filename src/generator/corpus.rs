//! Fixed pools the generator samples from.
//!
//! Message texts carry no meaning: they only reproduce realistic payload
//! sizes and a mix of plain text and emoji.

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Davide", "Elena", "Federico", "Giulia", "Hugo", "Irene", "Jacopo",
    "Kevin", "Laura", "Marco", "Nadia", "Omar", "Paola", "Quentin", "Rita", "Sofia", "Tommaso",
    "Ugo", "Valeria", "Walter", "Yara", "Zeno",
];

pub const LAST_NAMES: &[&str] = &[
    "Rossi", "Bianchi", "Romano", "Colombo", "Ricci", "Marino", "Greco", "Bruno", "Gallo", "Conti",
    "Costa", "Giordano", "Mancini", "Rizzo", "Lombardi", "Moretti", "Barbieri", "Fontana",
    "Santoro", "Mariani",
];

/// Joiners between the lower-cased first and last name
pub const USERNAME_SEPARATORS: &[&str] = &["", "_", "."];

pub const EMAIL_DOMAIN: &str = "example.com";

pub const GROUP_TITLES: &[&str] = &[
    "Project Team",
    "Weekend Plans",
    "Study Group",
    "Family",
    "Book Club",
    "Gym Buddies",
    "Roommates",
    "Hackathon",
    "Trip Planning",
    "Lab Partners",
    "Football Friday",
    "Coffee Break",
];

pub const MESSAGES: &[&str] = &[
    "Hey! How are you?",
    "Did you see the update?",
    "Let's meet later.",
    "Sounds good to me 👍",
    "I'll get back to you soon.",
    "Can you send the file?",
    "Thanks!",
    "No problem.",
    "See you tomorrow.",
    "😂😂😂",
    "Are we still on for tonight?",
    "I pushed the fix, can you take a look when you have a minute?",
    "On my way",
    "Running 10 minutes late, sorry!",
    "Who's bringing the slides for Monday?",
    "ok",
    "Happy birthday!! 🎉",
    "Let me check and I'll let you know.",
];
