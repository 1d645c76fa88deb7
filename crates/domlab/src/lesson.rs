//! Static lesson content, in presentation order.

/// Delay between the entrance of two neighbouring lesson cards (ms).
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// One unit of tutorial content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonRecord {
    pub title: &'static str,
    pub explanation: &'static str,
    /// Shown read-only, never executed.
    pub example: &'static str,
    /// Initial text of the lesson's editor.
    pub practice_seed: &'static str,
}

impl LessonRecord {
    /// Cosmetic entrance delay for the card at `index`.
    pub fn entrance_delay(index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(ENTRANCE_STAGGER_MS)
    }
}

macro_rules! lesson {
    ($slug:literal, $title:literal, $explanation:literal $(,)?) => {{
        LessonRecord {
            title: $title,
            explanation: $explanation,
            example: include_str!(concat!("lessons/", $slug, "/example.js")),
            practice_seed: include_str!(concat!("lessons/", $slug, "/practice.js")),
        }
    }};
}

static LESSONS: [LessonRecord; 5] = [
    lesson!(
        "what_is_the_dom",
        "What is the DOM?",
        "The Document Object Model (DOM) is a programming interface for HTML documents. It represents the page as a tree-like structure where each element becomes a node that you can manipulate with JavaScript.",
    ),
    lesson!(
        "selecting_elements",
        "Selecting Elements",
        "JavaScript provides several ways to select DOM elements. The most common methods are getElementById(), querySelector(), and querySelectorAll(). These let you find elements by their ID, class, tag name, or any valid CSS selector.",
    ),
    lesson!(
        "modifying_elements",
        "Modifying Elements",
        "Once you select an element, you can modify its content, attributes, and styles. Common properties include textContent for text, innerHTML for HTML content, and style for CSS properties.",
    ),
    lesson!(
        "creating_elements",
        "Creating Elements",
        "You can create new elements using createElement() and add them to the page using appendChild() or insertBefore(). This is how you dynamically build content.",
    ),
    lesson!(
        "event_handling",
        "Event Handling",
        "Events let you respond to user actions like clicks, key presses, and mouse movements. Use addEventListener() to handle these events and create interactive pages.",
    ),
];

pub fn lessons() -> &'static [LessonRecord] {
    &LESSONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lessons_keep_presentation_order() {
        let titles: Vec<_> = lessons().iter().map(|lesson| lesson.title).collect();
        assert_eq!(
            titles,
            [
                "What is the DOM?",
                "Selecting Elements",
                "Modifying Elements",
                "Creating Elements",
                "Event Handling",
            ]
        );
    }

    #[test]
    fn test_snippets_are_loaded_verbatim() {
        let first = &lessons()[0];
        assert_eq!(
            first.practice_seed,
            "// Try displaying the document title\noutput.textContent = 'Current page title: ' + document.title;"
        );
        assert!(first.example.starts_with("// Inspect the document object\n"));
        assert!(first.example.ends_with("console.log('Body element:', document.body);"));
    }

    #[test]
    fn test_every_lesson_is_complete() {
        for lesson in lessons() {
            assert!(!lesson.title.is_empty());
            assert!(!lesson.explanation.is_empty());
            assert!(lesson.example.starts_with("//"), "{}", lesson.title);
            assert!(lesson.practice_seed.starts_with("//"), "{}", lesson.title);
            assert!(!lesson.practice_seed.ends_with('\n'), "{}", lesson.title);
        }
    }

    #[test]
    fn test_entrance_delay_is_staggered() {
        assert_eq!(LessonRecord::entrance_delay(0), 0);
        assert_eq!(LessonRecord::entrance_delay(1), 100);
        assert_eq!(LessonRecord::entrance_delay(4), 400);
        assert_eq!(LessonRecord::entrance_delay(usize::MAX), u32::MAX);
    }
}
