use acss::testing::block_for;
use acss::utilities::{flex, flex_col};
use acss::{Session, reset_global, with_session};
use fluent::{Chain, parse_chain, tw};
use std::sync::Mutex;

static LOCK: Mutex<()> = Mutex::new(());

#[test]
fn derived_chains_are_independent() {
    let mut session = Session::new();
    let base = tw().get("flex").get("flexCol").into_chain();

    let with_gap_4 = base.call("gap", [4]).resolve_in(&mut session);
    let with_gap_8 = base.call("gap", [8]).resolve_in(&mut session);
    assert_ne!(with_gap_4, with_gap_8);

    let alone = base.resolve_in(&mut session);
    assert_eq!(alone, session.cx([flex(), flex_col()]));
    assert_eq!(alone.split(' ').count(), 2);
}

#[test]
fn resolution_is_idempotent() {
    let mut session = Session::new();
    let chain = tw().call("p", [4]).call("bg", ["white"]);
    let first = chain.resolve_in(&mut session);
    let registered = session.registry().len();
    assert_eq!(chain.resolve_in(&mut session), first);
    assert_eq!(session.registry().len(), registered);
}

#[test]
fn hover_scopes_only_the_next_utility() {
    let mut session = Session::new();
    let chain = tw()
        .call("bg", ["white"])
        .get("hover")
        .get("bg")
        .call(["blue"])
        .call("p", [4]);
    let class = chain.resolve_in(&mut session);
    let tokens: Vec<&str> = class.split(' ').collect();
    let css = session.generate_css();

    assert!(block_for(&css, tokens[0]).unwrap().starts_with(&format!(".{} {{", tokens[0])));
    assert!(block_for(&css, tokens[1]).unwrap().starts_with(&format!(".{}:hover {{", tokens[1])));
    assert!(block_for(&css, tokens[2]).unwrap().starts_with(&format!(".{} {{", tokens[2])));
}

#[test]
fn group_peer_and_unknown_names_are_raw_classes() {
    let mut session = Session::new();
    let class = tw()
        .get("group")
        .get("card")
        .get("groupHover")
        .get("opacity")
        .call([1])
        .resolve_in(&mut session);
    let tokens: Vec<&str> = class.split(' ').collect();
    assert_eq!(&tokens[..2], ["group", "card"]);

    let css = session.generate_css().replace(tokens[2], "x");
    insta::assert_snapshot!(css, @r"
    .group:hover .x {
      opacity: 1;
    }
    ");
}

#[test]
fn child_spacing_keeps_state_and_group_context() {
    let mut session = Session::new();
    let hovered = tw().get("hover").get("spaceX").call([4]).resolve_in(&mut session);
    let grouped = tw().get("groupHover").get("spaceY").call([2]).resolve_in(&mut session);

    let css = session
        .generate_css()
        .replace(&hovered, "h")
        .replace(&grouped, "g");
    insta::assert_snapshot!(css, @r"
    .h:hover > :not([hidden]) ~ :not([hidden]) {
      margin-left: 1rem;
    }

    .group:hover .g > :not([hidden]) ~ :not([hidden]) {
      margin-top: 0.5rem;
    }
    ");
}

#[test]
fn responsive_group_call() {
    let mut session = Session::new();
    let chain = parse_chain("tw.p(2).md(tw.p(4).flexRow)").unwrap();
    let class = chain.resolve_in(&mut session);
    let tokens: Vec<&str> = class.split(' ').collect();
    let css = session
        .generate_css()
        .replace(tokens[0], "a")
        .replace(tokens[1], "b")
        .replace(tokens[2], "c");
    insta::assert_snapshot!(css, @r"
    .a {
      padding: 0.5rem;
    }

    @media (min-width: 768px) {
    .b {
      padding: 1rem;
    }
    }

    @media (min-width: 768px) {
    .c {
      display: flex;
      flex-direction: row;
    }
    }
    ");
}

#[test]
fn parsed_macro_and_method_chains_agree() {
    let parsed = parse_chain("tw.flex.gap(4).hover(bg('red-500')).rounded").unwrap();
    let by_macro = fluent::tw!(flex.gap(4).hover(bg("red-500")).rounded);
    let by_hand: Chain = tw()
        .get("flex")
        .get("gap")
        .call([4])
        .get("hover")
        .call([tw().call("bg", ["red-500"])])
        .get("rounded")
        .into();
    assert_eq!(parsed, by_hand);
    assert_eq!(by_macro, by_hand);
}

#[test]
fn dynamic_values_flow_through_chains() {
    let mut session = Session::new();
    let color = session.dynamic("#3b82f6");
    let result = tw().call("bg", [&color]).call("p", [2]).resolve_dynamic_in(&mut session);

    assert_eq!(result.style.get(color.id()).map(String::as_str), Some("#3b82f6"));
    let first = result.class_name.split(' ').next().unwrap();
    let css = session.generate_css();
    assert!(block_for(&css, first).unwrap().contains(&color.var_ref()));
}

#[test]
fn global_resolution_and_display() {
    let _guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    reset_global();

    let chain = tw().get("italic").into_chain();
    let class = chain.to_string();
    assert_eq!(class, chain.resolve());
    assert_eq!(with_session(|s| s.registry().len()), 1);
    assert!(acss::generate_css().contains("font-style: italic;"));
}
