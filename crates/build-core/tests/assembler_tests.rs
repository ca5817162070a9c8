use build_core::{generate_task, AssemblerSettings, ConstructionError, TaskAssembler};
use build_domain::{BuildDefinition, OutputImage, ParameterSpec, ParameterValue, RunRequest, Strategy, StrategyKind};

fn scenario() -> (Strategy, BuildDefinition, RunRequest) {
    let strategy = Strategy { name: "buildah".into(),
                              kind: StrategyKind::ClusterBuildStrategy,
                              parameters: vec![ParameterSpec::named("param")] };
    let mut build = BuildDefinition::new("app").with_parameter(ParameterValue::new("param", "build value"));
    build.namespace = "team-a".into();
    build.output = Some(OutputImage { image: "registry/app:build".into() });
    build.timeout_seconds = Some(600);
    let run = RunRequest::new("app-run-1").with_service_account("build-bot");
    (strategy, build, run)
}

#[test]
fn scenario_build_value_then_run_override() {
    let (strategy, build, run) = scenario();
    let task = generate_task(&strategy, &build, &run).unwrap();
    let names: Vec<&str> = task.param_specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["DOCKERFILE", "CONTEXT_DIR", "param"]);
    assert_eq!(task.param_values, vec![ParameterValue::new("param", "build value")]);

    let run = run.with_parameter(ParameterValue::new("param", "buildrun value"));
    let overridden = generate_task(&strategy, &build, &run).unwrap();
    assert_eq!(overridden.param_values, vec![ParameterValue::new("param", "buildrun value")]);
    assert_eq!(overridden.param_specs, task.param_specs);
}

#[test]
fn structural_fields_come_from_inputs() {
    let (strategy, build, run) = scenario();
    let task = generate_task(&strategy, &build, &run).unwrap();
    assert_eq!(task.generate_name, "app-run-1-");
    assert_eq!(task.namespace, "team-a");
    assert_eq!(task.service_account_name, "build-bot");
    assert_eq!(task.strategy.name, "buildah");
    assert_eq!(task.strategy.kind, StrategyKind::ClusterBuildStrategy);
    assert_eq!(task.timeout_seconds, Some(600));
    assert_eq!(task.output_image.as_deref(), Some("registry/app:build"));
    let labels: Vec<(&str, &str)> = task.labels.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(labels,
               vec![("buildflow.dev/build", "app"),
                    ("buildflow.dev/build-run", "app-run-1"),
                    ("buildflow.dev/strategy", "buildah")]);
}

#[test]
fn run_overrides_timeout_and_output() {
    let (strategy, build, mut run) = scenario();
    run.timeout_seconds = Some(60);
    run.output = Some(OutputImage { image: "registry/app:run".into() });
    let task = generate_task(&strategy, &build, &run).unwrap();
    assert_eq!(task.timeout_seconds, Some(60));
    assert_eq!(task.output_image.as_deref(), Some("registry/app:run"));
}

#[test]
fn missing_service_account_is_a_construction_error() {
    let (strategy, build, mut run) = scenario();
    run.service_account = None;
    assert_eq!(generate_task(&strategy, &build, &run),
               Err(ConstructionError::MissingField("service_account")));
    run.service_account = Some("   ".into());
    assert_eq!(generate_task(&strategy, &build, &run),
               Err(ConstructionError::MissingField("service_account")));
}

#[test]
fn settings_supply_defaults() {
    let (strategy, mut build, mut run) = scenario();
    run.service_account = None;
    build.timeout_seconds = None;
    let assembler = TaskAssembler::new(AssemblerSettings { label_prefix: "ci.example.com".into(),
                                                           default_timeout_seconds: Some(3600),
                                                           default_service_account: Some("pipeline".into()) });
    let task = assembler.assemble(&strategy, &build, &run).unwrap();
    assert_eq!(task.service_account_name, "pipeline");
    assert_eq!(task.timeout_seconds, Some(3600));
    assert!(task.labels.contains_key("ci.example.com/build"));
}

#[test]
fn labels_skip_empty_names() {
    let run = RunRequest::default().with_service_account("bot");
    let task = generate_task(&Strategy::default(), &BuildDefinition::default(), &run).unwrap();
    assert!(task.labels.is_empty());
    assert_eq!(task.generate_name, "");
    assert_eq!(task.output_image, None);
}

#[test]
fn resolution_is_idempotent() {
    let (strategy, build, run) = scenario();
    let first = generate_task(&strategy, &build, &run).unwrap();
    let second = generate_task(&strategy, &build, &run).unwrap();
    assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
    let fp = first.fingerprint().unwrap();
    assert_eq!(fp.len(), 64);
    assert_eq!(fp, second.fingerprint().unwrap());
}

#[test]
fn fingerprint_changes_with_values() {
    let (strategy, build, run) = scenario();
    let base = generate_task(&strategy, &build, &run).unwrap();
    let run = run.with_parameter(ParameterValue::new("param", "other"));
    let changed = generate_task(&strategy, &build, &run).unwrap();
    assert_ne!(base.fingerprint().unwrap(), changed.fingerprint().unwrap());
}

#[test]
fn descriptor_round_trips_through_json() {
    let (strategy, build, run) = scenario();
    let task = generate_task(&strategy, &build, &run).unwrap();
    let json = serde_json::to_string(&task).unwrap();
    let back: build_core::TaskDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, task);
}

#[test]
fn assembler_is_shareable_across_threads() {
    let assembler = std::sync::Arc::new(TaskAssembler::default());
    let (strategy, build, run) = scenario();
    let expected = assembler.assemble(&strategy, &build, &run).unwrap();
    let handles: Vec<_> = (0..4).map(|_| {
                                    let assembler = assembler.clone();
                                    let (s, b, r) = scenario();
                                    std::thread::spawn(move || assembler.assemble(&s, &b, &r))
                                })
                                .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), expected);
    }
}
