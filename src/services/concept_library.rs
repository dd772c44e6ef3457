use once_cell::sync::Lazy;

/// An ordered keyword rule: the explanation applies when the lowercased
/// question text contains every keyword. Evaluated top to bottom, first
/// match wins.
struct ConceptRule {
    keywords: &'static [&'static str],
    explanation: &'static str,
}

const CLOSURES_EXPLANATION: &str = "A closure in JavaScript is a function that has access to its own scope, the outer function's variables, and global variables, even after the outer function has finished executing. This is possible because functions in JavaScript form closures - they 'remember' the environment they were created in. Closures are useful for data encapsulation, creating private variables, and in callback functions. ";

const HOOKS_EXPLANATION: &str = "React Hooks are functions that let you 'hook into' React state and lifecycle features from function components. Hooks like useState, useEffect, useContext, etc., allow you to use state and other React features without writing a class component. They help organize logic in components better and enable reuse of stateful logic between components. ";

const GENERIC_EXPLANATION: &str = "This concept is fundamental in programming. Understanding it deeply will help you write more efficient and maintainable code. I recommend researching more examples and practicing implementation in small projects. ";

static CONCEPT_RULES: Lazy<Vec<ConceptRule>> = Lazy::new(|| {
    vec![
        ConceptRule {
            keywords: &["closure", "javascript"],
            explanation: CLOSURES_EXPLANATION,
        },
        ConceptRule {
            keywords: &["react", "hook"],
            explanation: HOOKS_EXPLANATION,
        },
    ]
});

/// Select a canned concept explanation for a question by case-insensitive
/// substring matching. Questions matching no rule get the generic
/// programming explanation.
pub fn concept_explanation(question_text: &str) -> &'static str {
    let question = question_text.to_lowercase();

    CONCEPT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().all(|keyword| question.contains(keyword)))
        .map(|rule| rule.explanation)
        .unwrap_or(GENERIC_EXPLANATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_rule() {
        let explanation = concept_explanation("Explain what a closure is in JavaScript");
        assert!(explanation.contains("closure in JavaScript"));
    }

    #[test]
    fn test_closures_rule_is_case_insensitive() {
        let explanation = concept_explanation("What is a CLOSURE in JavaScript?");
        assert!(explanation.contains("closure in JavaScript"));
    }

    #[test]
    fn test_closures_rule_needs_both_keywords() {
        // "closure" alone is not enough to pick the JavaScript explanation
        let explanation = concept_explanation("What is a closure?");
        assert!(explanation.contains("fundamental in programming"));
    }

    #[test]
    fn test_hooks_rule() {
        let explanation = concept_explanation("When should you use a React hook?");
        assert!(explanation.contains("React Hooks"));
    }

    #[test]
    fn test_hooks_keyword_matches_as_substring() {
        // Pure containment: "hooks" contains "hook"
        let explanation = concept_explanation("Why were hooks added to React?");
        assert!(explanation.contains("React Hooks"));
    }

    #[test]
    fn test_unmatched_question_gets_generic_explanation() {
        let explanation = concept_explanation("What does HTTP stand for?");
        assert!(explanation.contains("fundamental in programming"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // A question matching both rule sets takes the closures rule,
        // which is listed first
        let explanation =
            concept_explanation("Do JavaScript closures matter when writing a React hook?");
        assert!(explanation.contains("closure in JavaScript"));
    }

    #[test]
    fn test_explanations_are_never_empty() {
        for question in ["", "closure javascript", "react hook", "anything else"] {
            assert!(!concept_explanation(question).is_empty());
        }
    }
}
