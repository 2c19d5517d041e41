/// A labelled group of canned prompts offered on the welcome screen.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGroup {
    pub category: &'static str,
    pub prompts: &'static [&'static str],
}

pub const SUGGESTIONS: &[SuggestionGroup] = &[
    SuggestionGroup {
        category: "General Tax Questions",
        prompts: &["What is income tax?", "What are tax brackets?"],
    },
    SuggestionGroup {
        category: "Filing Taxes",
        prompts: &[
            "Which filing status should I choose?",
            "How do I claim deductions?",
        ],
    },
    SuggestionGroup {
        category: "Tax Credits & Deductions",
        prompts: &[
            "What is the Child Tax Credit?",
            "How do I claim mortgage interest?",
        ],
    },
    SuggestionGroup {
        category: "Specific Situations",
        prompts: &[
            "How do I file taxes?",
            "What should I do if I receive tax refund?",
        ],
    },
];

/// All suggestion prompts flattened in display order.
pub fn suggestion_prompts() -> Vec<&'static str> {
    SUGGESTIONS
        .iter()
        .flat_map(|group| group.prompts.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_flattened_in_order() {
        let prompts = suggestion_prompts();

        assert_eq!(prompts.len(), 8);
        assert_eq!(prompts[0], "What is income tax?");
        assert_eq!(prompts[7], "What should I do if I receive tax refund?");
    }
}
