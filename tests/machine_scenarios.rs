//! End-to-end scenarios driving machines through the public API.

use retrace::{
    state_table, BuildError, ConfigError, Machine, MachineBuilder, MachineConfig, MachineError,
    StateId,
};

fn path(machine: &Machine) -> Vec<&str> {
    machine.history().path().into_iter().map(StateId::as_str).collect()
}

fn names(ids: Vec<&StateId>) -> Vec<&str> {
    ids.into_iter().map(StateId::as_str).collect()
}

#[test]
fn ping_pong_history_walkthrough() {
    let mut machine = Machine::from_json(
        r#"{
            "initial": "A",
            "states": {
                "A": {"transitions": {"go": "B"}},
                "B": {"transitions": {"back": "A"}}
            }
        }"#,
    )
    .unwrap();

    machine.trigger("go").unwrap();
    assert_eq!(machine.state(), "B");
    assert_eq!(path(&machine), ["A", "B"]);

    machine.trigger("back").unwrap();
    assert_eq!(machine.state(), "A");
    assert_eq!(path(&machine), ["A", "B", "A"]);

    assert!(machine.undo());
    assert_eq!(machine.state(), "B");
    assert!(machine.undo());
    assert_eq!(machine.state(), "A");
    assert!(!machine.undo());
    assert_eq!(machine.state(), "A");
    assert!(machine.redo());
    assert_eq!(machine.state(), "B");

    assert_eq!(names(machine.states(None)), ["A", "B"]);
    assert_eq!(names(machine.states(Some("go"))), ["A"]);
}

#[test]
fn document_review_session() {
    let mut machine = MachineBuilder::new()
        .initial("draft")
        .states(["draft", "review", "published", "archived"])
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "archive", "archived")
        .build()
        .unwrap();

    machine.trigger("submit").unwrap();
    machine.trigger("reject").unwrap();
    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    assert_eq!(
        path(&machine),
        ["draft", "review", "draft", "review", "published"]
    );

    // Publishing was a mistake: step back to review and reject instead.
    assert!(machine.undo());
    assert_eq!(machine.state(), "review");
    machine.trigger("reject").unwrap();

    assert_eq!(machine.state(), "draft");
    assert!(!machine.can_redo());
    assert_eq!(
        path(&machine),
        ["draft", "review", "draft", "review", "published", "draft"]
    );

    assert_eq!(
        machine.trigger("archive"),
        Err(MachineError::NoTransition {
            state: StateId::new("draft"),
            event: "archive".into(),
        })
    );
}

#[test]
fn reset_then_clear_history() {
    let states = state_table! {
        "idle" => { "start" => "running" },
        "running" => { "pause" => "paused", "stop" => "idle" },
        "paused" => { "resume" => "running", "stop" => "idle" },
    };
    let mut machine = Machine::new(MachineConfig::new("idle", states));

    machine.trigger("start").unwrap();
    machine.trigger("pause").unwrap();
    assert!(!machine.can_redo());

    machine.reset();
    assert_eq!(machine.state(), "idle");
    assert_eq!(path(&machine), ["idle", "running", "paused", "idle"]);
    assert!(machine.redo());
    assert_eq!(machine.state(), "idle");
    assert!(!machine.redo());

    machine.change_state("paused").unwrap();
    machine.clear_history();

    assert_eq!(machine.state(), "paused");
    assert_eq!(path(&machine), ["idle"]);
    assert!(!machine.undo());
    assert!(!machine.redo());

    machine.trigger("resume").unwrap();
    assert_eq!(path(&machine), ["idle", "running"]);
    assert!(machine.undo());
    assert_eq!(machine.state(), "idle");
}

#[test]
fn unvalidated_config_runs_but_builder_refuses_it() {
    let json = r#"{"initial": "limbo", "states": {"A": {"transitions": {"go": "A"}}}}"#;

    let config = MachineConfig::from_json(json).unwrap();
    let mut machine = Machine::new(config.clone());
    assert_eq!(machine.state(), "limbo");
    assert!(matches!(
        machine.trigger("go"),
        Err(MachineError::NoTransition { .. })
    ));

    let built = MachineBuilder::new()
        .initial("limbo")
        .transition("A", "go", "A")
        .build();
    match built {
        Err(BuildError::InvalidConfig(errors)) => assert_eq!(
            errors,
            vec![ConfigError::UnknownInitialState {
                state: StateId::new("limbo")
            }]
        ),
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_config_error() {
    let result = Machine::from_json(r#"{"initial": "A", "states": ["A", "B"]}"#);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
