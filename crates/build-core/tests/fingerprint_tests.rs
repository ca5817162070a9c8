use build_core::{generate_task, TaskDescriptor};
use build_domain::{BuildDefinition, ParameterSpec, ParameterValue, RunRequest, Strategy};

fn descriptor() -> TaskDescriptor {
    let strategy = Strategy::new("kaniko").with_parameter(ParameterSpec::named("param"));
    let build = BuildDefinition::new("app").with_parameter(ParameterValue::new("param", "build value"));
    let run = RunRequest::new("app-run-1").with_service_account("build-bot");
    generate_task(&strategy, &build, &run).unwrap()
}

#[test]
fn fingerprint_ignores_label_order() {
    let task = descriptor();
    let mut reordered = task.clone();
    reordered.labels.reverse();
    assert_ne!(task.labels.keys().next(), reordered.labels.keys().next());
    assert_eq!(task.fingerprint().unwrap(), reordered.fingerprint().unwrap());
}

#[test]
fn fingerprint_tracks_param_value_order() {
    // el orden de param_values es parte del contrato; reordenarlo cambia el hash
    let mut task = descriptor();
    task.param_values.push(ParameterValue::new("extra", "x"));
    let mut swapped = task.clone();
    swapped.param_values.reverse();
    assert_ne!(task.fingerprint().unwrap(), swapped.fingerprint().unwrap());
}

#[test]
fn fingerprint_is_hex_64() {
    let fp = descriptor().fingerprint().unwrap();
    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
}
