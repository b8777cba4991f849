//! End-to-end tests for the complete segmentation pipeline

use kiru_core::{segment, Error, Segmenter, SegmenterConfig};

fn english(text: &str) -> Vec<String> {
    segment(text, "en").unwrap()
}

#[test]
fn test_complete_english_pipeline() {
    let text = "Dr. Smith went to the U.S.A. He bought a new car. The car cost $25,000! Isn't that expensive?";

    assert_eq!(
        english(text),
        vec![
            "Dr. Smith went to the U.S.A.",
            "He bought a new car.",
            "The car cost $25,000!",
            "Isn't that expensive?",
        ]
    );
}

#[test]
fn test_complete_japanese_pipeline() {
    let text = "田中さんは東京に行きました。新しい車を買いました。その車は300万円でした！高いですね？";

    assert_eq!(
        segment(text, "ja").unwrap(),
        vec![
            "田中さんは東京に行きました。",
            "新しい車を買いました。",
            "その車は300万円でした！",
            "高いですね？",
        ]
    );
}

#[test]
fn test_title_abbreviation() {
    assert_eq!(english("Dr. Smith went home."), vec!["Dr. Smith went home."]);
}

#[test]
fn test_acronym_before_sentence_starter() {
    assert_eq!(
        english("He lives in the U.S. However, he travels often."),
        vec!["He lives in the U.S.", "However, he travels often."]
    );
}

#[test]
fn test_decimal_numbers() {
    assert_eq!(
        english("The value is 3.14. That is pi."),
        vec!["The value is 3.14.", "That is pi."]
    );
}

#[test]
fn test_ellipsis_inside_sentence() {
    assert_eq!(english("Wait... what happened?"), vec!["Wait... what happened?"]);
}

#[test]
fn test_ellipsis_ending_sentence() {
    assert_eq!(
        english("I see... Then he left."),
        vec!["I see...", "Then he left."]
    );
}

#[test]
fn test_quoted_sentence_stays_whole() {
    assert_eq!(
        english("She said \"Stop. Now.\" and left."),
        vec!["She said \"Stop. Now.\" and left."]
    );
}

#[test]
fn test_quotation_followed_by_new_sentence() {
    assert_eq!(
        english("\"He left.\" She cried."),
        vec!["\"He left.\"", "She cried."]
    );
}

#[test]
fn test_parenthetical_punctuation() {
    assert_eq!(
        english("The result (which surprised everyone!) was good. We celebrated."),
        vec!["The result (which surprised everyone!) was good.", "We celebrated."]
    );
}

#[test]
fn test_email_address() {
    assert_eq!(
        english("Contact john.doe@example.com for help. Thanks."),
        vec!["Contact john.doe@example.com for help.", "Thanks."]
    );
}

#[test]
fn test_numbered_list() {
    assert_eq!(
        english("Shopping:\n1. milk\n2. bread"),
        vec!["Shopping:", "1. milk", "2. bread"]
    );
}

#[test]
fn test_numbered_list_past_nine_items() {
    assert_eq!(
        english("Steps:\n9. Open the lid\n10. Pour the water\n11. Close it"),
        vec!["Steps:", "9. Open the lid", "10. Pour the water", "11. Close it"]
    );
    assert_eq!(
        english("Intro text.\n12. Twelve items here"),
        vec!["Intro text.", "12. Twelve items here"]
    );
}

#[test]
fn test_lines_without_punctuation() {
    assert_eq!(english("Line one\nLine two"), vec!["Line one", "Line two"]);
}

#[test]
fn test_newline_inside_sentence_without_cleaning() {
    let config = SegmenterConfig::builder().clean(false).build().unwrap();
    let sentences = Segmenter::with_config(config)
        .segment("First line.\nSecond line.")
        .unwrap();

    assert_eq!(sentences, vec!["First line.", "Second line."]);
}

#[test]
fn test_pdf_document_type() {
    let config = SegmenterConfig::builder().doc_type("pdf").build().unwrap();
    let sentences = Segmenter::with_config(config)
        .segment("This sentence was\nwrapped by the\nconverter. A new one\nstarts here.")
        .unwrap();

    assert_eq!(
        sentences,
        vec![
            "This sentence was wrapped by the converter.",
            "A new one starts here.",
        ]
    );
}

#[test]
fn test_question_and_exclamation_clusters() {
    assert_eq!(
        english("Really?! Yes!! Fine."),
        vec!["Really?!", "Yes!!", "Fine."]
    );
}

#[test]
fn test_exclamation_before_comma_and_lowercase() {
    assert_eq!(
        english("Wow!, that was close. Next."),
        vec!["Wow!, that was close.", "Next."]
    );
}

#[test]
fn test_exclamation_word_at_end_of_text() {
    assert_eq!(
        english("Hello world. I love Yahoo!"),
        vec!["Hello world.", "I love Yahoo!"]
    );
    assert_eq!(english("I love Yahoo!"), vec!["I love Yahoo!"]);
}

#[test]
fn test_trailing_text_without_punctuation() {
    assert_eq!(english("One. Two"), vec!["One.", "Two"]);
}

#[test]
fn test_empty_and_blank_input() {
    assert!(english("").is_empty());
    assert!(english(" \n\t ").is_empty());
}

#[test]
fn test_reserved_character_is_rejected() {
    let err = segment("a ∯ b", "en").unwrap_err();

    match err {
        Error::ReservedCharacter { character, offset } => {
            assert_eq!(character, '∯');
            assert_eq!(offset, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_segmenter_is_reusable() {
    let segmenter = Segmenter::new();

    for _ in 0..3 {
        assert_eq!(
            segmenter.segment("Hello world. How are you?").unwrap(),
            vec!["Hello world.", "How are you?"]
        );
    }
}

#[test]
fn test_segmenter_shared_across_threads() {
    let segmenter = std::sync::Arc::new(Segmenter::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let segmenter = segmenter.clone();
            std::thread::spawn(move || {
                let text = format!("Thread {i} runs. It finishes.");
                segmenter.segment(&text).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sentences = handle.join().unwrap();
        assert_eq!(sentences, vec![format!("Thread {i} runs."), "It finishes.".to_string()]);
    }
}

#[test]
fn test_question_inside_quotation() {
    assert_eq!(
        english("She said, \"Is this right? I think so.\" Then she left."),
        vec!["She said, \"Is this right? I think so.\"", "Then she left."]
    );
}

#[test]
fn test_ellipsis_before_capital() {
    assert_eq!(
        english("Wait... What happened?"),
        vec!["Wait...", "What happened?"]
    );
}

#[test]
fn test_price_is_not_split() {
    assert_eq!(
        english("The price is 3.50 dollars."),
        vec!["The price is 3.50 dollars."]
    );
}

#[test]
fn test_language_changes_punctuation_inventory() {
    let text = "Is it true; yes it is.";

    assert_eq!(english(text), vec!["Is it true; yes it is."]);
    assert_eq!(
        segment(text, "el").unwrap(),
        vec!["Is it true;", "yes it is."]
    );
}

#[test]
fn test_rejoined_sentences_keep_their_boundaries() {
    let texts = [
        "Dr. Smith went to the U.S.A. He bought a new car.",
        "He lives in the U.S. However, he travels often.",
        "She said, \"Is this right? I think so.\" Then she left.",
        "Wait... What happened? The price is 3.50 dollars.",
    ];

    for text in texts {
        let first = english(text);
        let second = english(&first.join(" "));
        assert_eq!(first, second, "{text}");
    }
}
