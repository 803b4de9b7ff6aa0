use super::StubBackend;
use crate::analyzer::{Analyzer, Strategy};
use crate::config::Config;
use crate::render::render;
use crate::rules::{classify, COMMON_ERRORS};
use crate::theme::Theme;

#[tokio::test]
async fn test_map_of_undefined_is_an_undefined_property_error() {
    let analyzer = Analyzer::with_backend(Strategy::Local, StubBackend::empty());

    let solution = analyzer
        .analyze("TypeError: Cannot read property 'map' of undefined")
        .await;
    assert_eq!(solution.title, "Undefined Property Access Error");
    assert_ne!(solution.title, "TypeError - Not a Function");
}

#[tokio::test]
async fn test_concurrent_analyses_are_independent() {
    let analyzer = Analyzer::with_backend(Strategy::Local, StubBackend::empty());

    let (a, b) = tokio::join!(
        analyzer.analyze("SyntaxError: Unexpected token"),
        analyzer.analyze("blocked by CORS policy"),
    );
    assert_eq!(a.title, "Syntax Error - Unexpected Token");
    assert_eq!(b.title, "CORS (Cross-Origin Resource Sharing) Error");
}

#[tokio::test]
async fn test_from_config_honours_local_strategy() {
    let mut config = Config::default();
    config.classifier.strategy = Strategy::Local;
    // Unroutable address: a network call would turn into an API error.
    config.remote.api_url = "http://127.0.0.1:1/search".to_string();

    let analyzer = Analyzer::from_config(&config);
    let solution = analyzer.analyze("npm ERR! missing script: start").await;
    assert_eq!(solution.title, "Missing Dependency Error");
}

#[test]
fn test_every_sample_error_renders() {
    colored::control::set_override(false);
    let theme = Theme::monochrome();

    for example in COMMON_ERRORS {
        let solution = classify(example);
        let text = render(&solution, &theme);
        assert!(text.contains(&solution.title), "{example}");
        assert!(text.contains("Steps to fix"), "{example}");
    }
}
