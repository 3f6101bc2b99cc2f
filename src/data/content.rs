//! Fixed educational content shown on the page.
//!
//! Everything here is `'static` and immutable. Declaration order of
//! [`TOPIC_CARDS`] is display order.

/// Opaque icon reference for a topic card or panel heading.
///
/// Frontends decide how to draw these; the TUI maps them to single glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicIcon {
    Clock,
    Users,
    DollarSign,
    Scale,
    CheckCircle,
    AlertCircle,
    Lightbulb,
    Edit,
}

impl TopicIcon {
    /// Terminal glyph for this icon (always a single column wide)
    pub fn glyph(&self) -> &'static str {
        match self {
            TopicIcon::Clock => "◷",
            TopicIcon::Users => "☺",
            TopicIcon::DollarSign => "$",
            TopicIcon::Scale => "⚖",
            TopicIcon::CheckCircle => "✔",
            TopicIcon::AlertCircle => "!",
            TopicIcon::Lightbulb => "☼",
            TopicIcon::Edit => "✎",
        }
    }
}

/// One of the four educational content blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicCard {
    pub icon: TopicIcon,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    /// Accent color as "#rrggbb"
    pub accent_color: &'static str,
}

pub const TOPIC_CARDS: [TopicCard; 4] = [
    TopicCard {
        icon: TopicIcon::Users,
        title: "Client Trust",
        short_description: "Clear narratives help clients understand services rendered",
        long_description: "Clients rely on detailed descriptions to see the value in legal services. Transparent time entries build trust and demonstrate professionalism.",
        accent_color: "#3b82f6",
    },
    TopicCard {
        icon: TopicIcon::DollarSign,
        title: "Revenue Management",
        short_description: "Accurate entries enable proper financial forecasting",
        long_description: "Firms use time entry data to track performance, manage cash flow, and make strategic business decisions.",
        accent_color: "#22c55e",
    },
    TopicCard {
        icon: TopicIcon::Scale,
        title: "Ethical Compliance",
        short_description: "Proper timekeeping ensures ethical billing practices",
        long_description: "Detailed and accurate time entries help maintain compliance with legal ethics rules and professional standards.",
        accent_color: "#a855f7",
    },
    TopicCard {
        icon: TopicIcon::CheckCircle,
        title: "Value Demonstration",
        short_description: "Showcase legal reasoning and diligence to clients",
        long_description: "Well-crafted narratives highlight the skill, thought process, and effort that goes into legal work.",
        accent_color: "#f97316",
    },
];

// Hero
pub const HERO_TITLE: &str = "The Importance of Timekeeping in Legal Practice";
pub const HERO_SUBTITLE: &str = "Master the art of effective time entries to build client trust, ensure compliance, and demonstrate value";
pub const HERO_BADGE: &str = "Interactive Guide";

// Key aspects
pub const ASPECTS_HEADING: &str = "Why Timekeeping Matters";
pub const ASPECTS_INTRO: &str = "Time entries form the foundation of the client billing process and reflect the value of legal services";

// Tip panel
pub const TIP_HEADING: &str = "✨ Quick Tip";
pub const TIP_TEXT: &str =
    "Use present-tense action verbs to make your narratives clear and effective.";
pub const TIP_SHOW_LABEL: &str = "Show Examples";
pub const TIP_HIDE_LABEL: &str = "Hide Examples";
pub const TIP_GOOD_LABEL: &str = "Good:";
pub const TIP_GOOD_EXAMPLE: &str = "\"Review contract terms\"";
pub const TIP_AVOID_LABEL: &str = "Avoid:";
pub const TIP_AVOID_EXAMPLE: &str = "\"Reviewed contract terms\"";

// Example entry
pub const EXAMPLE_HEADING: &str = "📝 Example Entry";
pub const EXAMPLE_INTRO: &str = "Here's a well-crafted time entry that follows best practices:";
pub const EXAMPLE_ENTRY: &str =
    "\"Review and draft revisions to settlement agreement with A. Underhill.\"";
pub const EXAMPLE_TAGS: [&str; 4] = [
    "Present tense",
    "Action verb",
    "Specific details",
    "Client reference",
];

// Practice
pub const PRACTICE_HEADING: &str = "Practice Your Skills";
pub const PRACTICE_INSTRUCTIONS: &str = "Try writing your own time entry using the principles you've learned. Focus on clarity, specificity, and present-tense action verbs.";
pub const PRACTICE_PLACEHOLDER: &str = "Write your practice time entry here...";
pub const PRACTICE_SUBMIT_LABEL: &str = "Submit Practice Entry";
pub const PRACTICE_SUCCESS_MESSAGE: &str =
    "Great practice entry! Keep refining your timekeeping skills.";
pub const PRACTICE_EMPTY_MESSAGE: &str = "Please enter a time entry to practice with.";

// Closing
pub const BOTTOM_LINE_HEADING: &str = "The Bottom Line";
pub const BOTTOM_LINE_TEXT: &str = "Effective timekeeping is more than just recording hours—it's about building trust, demonstrating value, and maintaining the highest standards of legal practice. Every entry is an opportunity to show your professionalism.";

/// Label for the tip toggle button given the current visibility
pub fn tip_button_label(tip_visible: bool) -> &'static str {
    if tip_visible {
        TIP_HIDE_LABEL
    } else {
        TIP_SHOW_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_cards_in_display_order() {
        let titles: Vec<&str> = TOPIC_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Client Trust",
                "Revenue Management",
                "Ethical Compliance",
                "Value Demonstration"
            ]
        );
    }

    #[test]
    fn test_accent_colors_are_hex() {
        for card in TOPIC_CARDS.iter() {
            assert!(card.accent_color.starts_with('#'));
            assert_eq!(card.accent_color.len(), 7, "{}", card.title);
        }
    }

    #[test]
    fn test_tip_button_label() {
        assert_eq!(tip_button_label(false), "Show Examples");
        assert_eq!(tip_button_label(true), "Hide Examples");
    }
}
