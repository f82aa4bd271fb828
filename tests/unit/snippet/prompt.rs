use super::*;

#[test]
fn strips_html_fence() {
    let raw = "```html\n<!DOCTYPE html><p>MARK</p>\n```";
    assert_eq!(strip_code_fences(raw), "<!DOCTYPE html><p>MARK</p>");
}

#[test]
fn strips_fences_case_insensitively_and_trims() {
    let raw = "  ```HTML<div>x</div>```\n  ";
    assert_eq!(strip_code_fences(raw), "<div>x</div>");
}

#[test]
fn plain_html_is_untouched() {
    let raw = "<!DOCTYPE html>\n<html></html>";
    assert_eq!(strip_code_fences(raw), raw);
}

#[test]
fn bare_fence_keeps_following_text() {
    assert_eq!(strip_code_fences("```\nabc\n```"), "abc");
    assert_eq!(strip_code_fences("```htm"), "htm");
}

#[test]
fn prompt_mentions_message_and_seed() {
    let p = user_prompt(Some("s1"), Some("Wake up"));
    assert!(p.contains("\"Wake up\""));
    assert!(p.ends_with("Seed for variation: s1"));
    assert!(p.contains("Return ONLY the HTML code"));
}

#[test]
fn prompt_without_inputs_has_no_optional_sections() {
    let p = user_prompt(None, None);
    assert!(!p.contains("IMPORTANT"));
    assert!(!p.contains("Seed for variation"));
}

#[test]
fn request_serializes_expected_shape() {
    let req = ChatRequest::for_snippet("gpt-4o-mini", None, None);
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v["model"], "gpt-4o-mini");
    assert_eq!(v["max_tokens"], 2000);
    assert_eq!(v["messages"][0]["role"], "system");
    assert_eq!(v["messages"][1]["role"], "user");
    assert!((v["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
}

#[test]
fn response_parses_first_choice() {
    let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"<p>hi</p>"}}]}"#;
    let resp: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.choices[0].message.content, "<p>hi</p>");
}
