//! Behavioural tests for the decoder chain.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use routexplore_core::link::{DecoderChain, LinkError, ParsedLink};
use std::cell::RefCell;

type DecodeResult = Result<ParsedLink, LinkError>;

#[fixture]
fn link() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn outcomes() -> RefCell<Vec<DecodeResult>> {
    RefCell::new(Vec::new())
}

fn decoded(outcomes: &RefCell<Vec<DecodeResult>>) -> ParsedLink {
    outcomes
        .borrow()
        .first()
        .cloned()
        .expect("link should have been decoded")
        .expect("link should decode")
}

#[given("the map link {text}")]
fn given_link(text: String, #[from(link)] link: &RefCell<String>) {
    *link.borrow_mut() = text.trim_matches('"').to_owned();
}

#[when("the link is decoded")]
fn when_decoded(
    #[from(link)] link: &RefCell<String>,
    #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>,
) {
    let result = DecoderChain::standard().decode(&link.borrow());
    outcomes.borrow_mut().push(result);
}

#[when("the link is decoded twice")]
fn when_decoded_twice(
    #[from(link)] link: &RefCell<String>,
    #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>,
) {
    let chain = DecoderChain::standard();
    for _ in 0..2 {
        let result = chain.decode(&link.borrow());
        outcomes.borrow_mut().push(result);
    }
}

#[then("the start is {text}")]
fn then_start(text: String, #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    assert_eq!(decoded(outcomes).start, text.trim_matches('"'));
}

#[then("the end is {text}")]
fn then_end(text: String, #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    assert_eq!(decoded(outcomes).end, text.trim_matches('"'));
}

#[then("there are no waypoints")]
fn then_no_waypoints(#[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    assert!(decoded(outcomes).waypoints.is_empty());
}

#[then("the waypoints are {list}")]
fn then_waypoints(list: String, #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    let expected: Vec<&str> = list.trim_matches('"').split(',').collect();
    assert_eq!(decoded(outcomes).waypoints, expected);
}

#[then("the link was parsed from {tag}")]
fn then_format(tag: String, #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    assert_eq!(decoded(outcomes).format.as_str(), tag.trim_matches('"'));
}

#[then("decoding fails as unrecognized")]
fn then_unrecognized(
    #[from(link)] link: &RefCell<String>,
    #[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>,
) {
    let borrowed = outcomes.borrow();
    let outcome = borrowed.first().expect("link should have been decoded");
    assert_eq!(
        outcome,
        &Err(LinkError::UnrecognizedLinkFormat {
            final_url: link.borrow().clone()
        })
    );
}

#[then("both decodings are identical")]
fn then_identical(#[from(outcomes)] outcomes: &RefCell<Vec<DecodeResult>>) {
    let borrowed = outcomes.borrow();
    assert_eq!(borrowed.len(), 2);
    assert!(borrowed.iter().all(Result::is_ok));
    assert_eq!(borrowed.first(), borrowed.get(1));
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/link_decoding.feature", name = $title)]
        fn $fn_name(link: RefCell<String>, outcomes: RefCell<Vec<DecodeResult>>) {
            let _ = (link, outcomes);
        }
    };
}

register_scenario!(directions_path, "Directions path with two places");
register_scenario!(api_params, "api=1 link with pipe-delimited waypoints");
register_scenario!(
    api_literal_pipes,
    "api=1 link with literal pipes between waypoints"
);
register_scenario!(
    api_empty_waypoints,
    "api=1 link with an empty waypoints parameter"
);
register_scenario!(api_priority, "api=1 takes priority over a directions path");
register_scenario!(legacy_params, "Legacy saddr and daddr parameters");
register_scenario!(unrecognised, "A link without any known convention");
register_scenario!(idempotent, "Decoding is idempotent");
