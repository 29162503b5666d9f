//! Scenario tests for registering commands and resolving lines against them.

use lineopt::{ascii_lower, Delimiters, Invoke, ResolveError, Space, State, EMPTY};

/// Handlers are plain labels; resolution only needs to hand them back.
type Label = &'static str;

fn markers() -> [&'static str; 2] {
    [".", "!"]
}

#[test]
fn single_command_with_argument() {
    let mut root: State<Label> = State::new();
    root.sub("ban", "H", Space::new());

    let analysis = root.analyse(".ban user1", &markers()).unwrap();
    assert_eq!(analysis.start, ".");
    assert_eq!(analysis.names.as_slice(), ["ban"]);
    assert_eq!(analysis.argument, "user1");
    assert_eq!(*analysis.invoke.call(), "H");

    let analysis = root.analyse("!ban user1", &markers()).unwrap();
    assert_eq!(analysis.start, "!");
}

#[test]
fn unknown_marker_is_invalid_start() {
    let mut root: State<Label> = State::new();
    root.sub("ban", "H", Space::new());

    assert_eq!(
        root.analyse("?ban user1", &markers()).unwrap_err(),
        ResolveError::InvalidStart
    );
    assert_eq!(
        root.analyse("ban user1", &markers()).unwrap_err(),
        ResolveError::InvalidStart
    );
}

#[test]
fn unknown_command_is_name_not_found() {
    let mut root: State<Label> = State::new();
    root.sub("ban", "H", Space::new());

    assert_eq!(
        root.analyse(".kick user1", &markers()).unwrap_err(),
        ResolveError::NameNotFound {
            name: "kick".into(),
            depth: 0
        }
    );
}

#[test]
fn nested_registration() {
    let mut root: State<Label> = State::new();
    let c1 = root.sub("admin", "ADMIN", Space::new());
    c1.sub("ban", "H2", Space::new());

    let analysis = root.analyse(".admin.ban u", &markers()).unwrap();
    assert_eq!(analysis.start, ".");
    assert_eq!(analysis.names.as_slice(), ["admin", "ban"]);
    assert_eq!(analysis.argument, "u");
    assert_eq!(*analysis.invoke.call(), "H2");

    // The intermediate node was registered with its own handler.
    let analysis = root.analyse(".admin", &markers()).unwrap();
    assert_eq!(*analysis.invoke.call(), "ADMIN");
    assert_eq!(analysis.argument, "");
}

#[test]
fn nested_branch_without_handler() {
    let mut root: State<Label> = State::new();
    root.branch("admin").sub("ban", "H2", Space::new());

    assert_eq!(
        *root.analyse(".admin.ban u", &markers()).unwrap().invoke.call(),
        "H2"
    );
    assert_eq!(
        root.analyse(".admin", &markers()).unwrap_err(),
        ResolveError::NoHandler {
            path: vec!["admin".into()]
        }
    );
    assert_eq!(
        root.analyse(".admin u", &markers()).unwrap_err(),
        ResolveError::NoHandler {
            path: vec!["admin".into()]
        }
    );
}

#[test]
fn divergence_below_root_fails_at_that_depth() {
    let mut root: State<Label> = State::new();
    root.branch("a").branch("b").sub("c", "ABC", Space::new());

    assert_eq!(
        root.analyse(".a.x.c", &markers()).unwrap_err(),
        ResolveError::NameNotFound {
            name: "x".into(),
            depth: 1
        }
    );
    assert_eq!(
        root.analyse(".a.b.x", &markers()).unwrap_err(),
        ResolveError::NameNotFound {
            name: "x".into(),
            depth: 2
        }
    );
    assert_eq!(
        root.analyse(".a.b.c.d", &markers()).unwrap_err(),
        ResolveError::NameNotFound {
            name: "d".into(),
            depth: 3
        }
    );
}

#[test]
fn last_registration_wins() {
    let mut root: State<Label> = State::new();
    root.sub("ban", "h1", Space::new());
    root.sub("ban", "h2", Space::new());

    assert_eq!(*root.analyse(".ban x", &markers()).unwrap().invoke.call(), "h2");
    assert_eq!(root.len(), 1);
}

#[test]
fn default_marker_is_empty_string() {
    let mut root: State<Label> = State::new();
    root.sub("ping", "P", Space::new());

    let analysis = root.analyse("ping", &[""]).unwrap();
    assert_eq!(analysis.start, "");
    assert_eq!(analysis.argument, "");
}

#[test]
fn overlapping_markers_use_first_match() {
    let mut root: State<Label> = State::new();
    root.sub("-verbose", "dash", Space::new());
    root.sub("verbose", "plain", Space::new());

    let analysis = root.analyse("--verbose", &["-", "--"]).unwrap();
    assert_eq!(analysis.start, "-");
    assert_eq!(*analysis.invoke.call(), "dash");

    let analysis = root.analyse("--verbose", &["--", "-"]).unwrap();
    assert_eq!(analysis.start, "--");
    assert_eq!(*analysis.invoke.call(), "plain");
}

#[test]
fn custom_delimiters_are_inherited() {
    let mut root: State<Label> = State::with_delimiters(Delimiters::new("/", "::"));
    root.branch("admin").sub("ban", "B", Space::new());

    let analysis = root.analyse("!admin/ban::user1 spam", &["!"]).unwrap();
    assert_eq!(analysis.names.as_slice(), ["admin", "ban"]);
    assert_eq!(analysis.argument, "user1 spam");

    // The default delimiters no longer split anything.
    assert!(matches!(
        root.analyse("!admin.ban user1", &["!"]),
        Err(ResolveError::NameNotFound { depth: 0, .. })
    ));
}

#[test]
fn case_transform() {
    let mut root: State<Label> = State::new();
    root.branch("admin").sub("ban", "B", Space::new());

    assert!(root.analyse(".ADMIN.Ban x", &markers()).is_err());
    let analysis = root
        .analyse_with(".ADMIN.Ban x", &markers(), ascii_lower)
        .unwrap();
    assert_eq!(analysis.names.as_slice(), ["admin", "ban"]);
    assert_eq!(analysis.argument, "x");
}

#[test]
fn metadata_travels_with_the_handler() {
    let mut root: State<Label> = State::new();
    root.sub_invoke(
        "ban",
        Invoke::new("B", Space::new().with("oper", true).with("syntax", "ban <nick>")),
    );
    root.sub("ping", "P", Space::new());

    let ban = root.analyse(".ban x", &markers()).unwrap().invoke;
    let ping = root.analyse(".ping", &markers()).unwrap().invoke;
    assert!(ban.get("oper").truthy());
    assert_eq!(ban.get("syntax").as_str(), Some("ban <nick>"));
    assert!(std::ptr::eq(ping.get("oper"), &EMPTY));
    assert!(std::ptr::eq(ping.get("syntax"), ban.get("unset")));
}

#[test]
fn same_target_under_many_names() {
    let mut root: State<Label> = State::new();
    root.sub("ban", "B", Space::new().with("oper", true));
    root.sub("b", "B", Space::new());

    let long = root.analyse(".ban", &markers()).unwrap().invoke;
    let short = root.analyse(".b", &markers()).unwrap().invoke;
    assert_eq!(long.call(), short.call());
    assert_ne!(long, short);
    assert!(long.get("oper").truthy());
    assert!(!short.get("oper").truthy());
}
