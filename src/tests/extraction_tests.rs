#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::errors::{ExtractionError, ValidationError};
    use crate::implementations::extractor::extract_json;
    use crate::implementations::validator::validate_story;

    fn setup() {
        let _ = env_logger::try_init();
    }

    fn well_formed_story() -> serde_json::Value {
        json!({
            "title": "Pip and the Magical Garden",
            "characters": "Pip, a small brown mouse with a red scarf",
            "pages": (1..=5).map(|n| json!({
                "pageNumber": n,
                "text": format!("Page {} of Pip's adventure.", n),
                "imagePrompt": format!("Pip the brown mouse with a red scarf, scene {}", n),
            })).collect::<Vec<_>>(),
        })
    }

    #[test]
    fn extracts_object_embedded_in_noise() {
        setup();
        let raw = "noise {\"title\":\"T\",\"pages\":[]} trailing";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["title"], "T");
        assert!(value["pages"].as_array().unwrap().is_empty());
    }

    #[test]
    fn fails_with_no_json_found_when_no_braces_exist() {
        setup();
        let raw = "Once upon a time there was no JSON at all.";
        assert_eq!(extract_json(raw).unwrap_err(), ExtractionError::NoJsonFound);
    }

    #[test]
    fn extracts_fenced_json_block() {
        setup();
        let raw = "Here is your story:\n```json\n{\"title\":\"T\",\"pages\":[]}\n```\nEnjoy!";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn falls_back_to_fenced_block_when_outer_span_is_malformed() {
        setup();
        // The greedy outer-brace span covers the stray braces and fails to
        // parse; the fenced block is the second and final attempt.
        let raw = "{ preamble\n```json\n{\"title\":\"T\",\"pages\":[]}\n```\ntrailing }";
        let value = extract_json(raw).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn fails_with_malformed_json_when_span_does_not_parse() {
        setup();
        let raw = "result: {this is not json}";
        match extract_json(raw).unwrap_err() {
            ExtractionError::MalformedJson(_) => {}
            other => panic!("Expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn accepts_well_formed_story() {
        setup();
        let story = validate_story(&well_formed_story()).unwrap();
        assert_eq!(story.title, "Pip and the Magical Garden");
        assert_eq!(story.pages.len(), 5);
        assert!(story.characters.is_some());
        for (i, page) in story.pages.iter().enumerate() {
            assert_eq!(page.page_number as usize, i + 1);
        }
    }

    #[test]
    fn rejects_missing_title() {
        setup();
        let mut candidate = well_formed_story();
        candidate.as_object_mut().unwrap().remove("title");
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::MissingField("title".to_string())
        );
    }

    #[test]
    fn rejects_empty_title() {
        setup();
        let mut candidate = well_formed_story();
        candidate["title"] = json!("   ");
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::MissingField("title".to_string())
        );
    }

    #[test]
    fn rejects_non_array_pages() {
        setup();
        let mut candidate = well_formed_story();
        candidate["pages"] = json!("not a list");
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::MissingField("pages".to_string())
        );
    }

    #[test]
    fn rejects_wrong_page_counts() {
        setup();
        for count in [4usize, 6] {
            let mut candidate = well_formed_story();
            let pages = candidate["pages"].as_array().unwrap().clone();
            let mut resized: Vec<_> = pages.into_iter().cycle().take(count).collect();
            // Keep numbering positional so the count check is what trips
            for (i, page) in resized.iter_mut().enumerate() {
                page["pageNumber"] = json!(i + 1);
            }
            candidate["pages"] = json!(resized);
            assert_eq!(
                validate_story(&candidate).unwrap_err(),
                ValidationError::WrongPageCount(count)
            );
        }
    }

    #[test]
    fn rejects_page_missing_text() {
        setup();
        let mut candidate = well_formed_story();
        candidate["pages"][2].as_object_mut().unwrap().remove("text");
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::InvalidPage {
                index: 2,
                field: "text".to_string()
            }
        );
    }

    #[test]
    fn rejects_page_missing_image_prompt() {
        setup();
        let mut candidate = well_formed_story();
        candidate["pages"][4]
            .as_object_mut()
            .unwrap()
            .remove("imagePrompt");
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::InvalidPage {
                index: 4,
                field: "imagePrompt".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_positional_page_numbers() {
        setup();
        let mut candidate = well_formed_story();
        candidate["pages"][1]["pageNumber"] = json!(5);
        assert_eq!(
            validate_story(&candidate).unwrap_err(),
            ValidationError::InvalidPage {
                index: 1,
                field: "pageNumber".to_string()
            }
        );
    }
}
