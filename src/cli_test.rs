use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("shapeforge").chain(args.iter().copied())).unwrap()
}

#[test]
fn export_defaults_to_react() {
    let cli = parse(&["export", "--scene", "scene.json"]);
    let Command::Export(args) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.target, "react");
    assert_eq!(args.scene.scene.as_deref(), Some(std::path::Path::new("scene.json")));
    assert!(args.scene.select.is_none());
}

#[test]
fn export_accepts_target_and_selection() {
    let id = Uuid::new_v4();
    let cli = parse(&["export", "--scene", "s.json", "--target", "ir", "--select", &id.to_string()]);
    let Command::Export(args) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.target, "ir");
    assert_eq!(args.scene.select, Some(id));
}

#[test]
fn malformed_selection_is_rejected() {
    let result = Cli::try_parse_from(["shapeforge", "css", "--scene", "s.json", "--select", "not-a-uuid"]);
    assert!(result.is_err());
}

#[test]
fn import_figma_takes_a_positional_input() {
    let cli = parse(&["import-figma", "design.json", "--out", "scene.json"]);
    let Command::ImportFigma(args) = cli.command else {
        panic!("expected import-figma");
    };
    assert_eq!(args.input, std::path::PathBuf::from("design.json"));
    assert_eq!(args.out, Some(std::path::PathBuf::from("scene.json")));
    assert!(args.scene.is_none());
}

#[test]
fn targets_takes_no_arguments() {
    assert!(matches!(parse(&["targets"]).command, Command::Targets));
}
