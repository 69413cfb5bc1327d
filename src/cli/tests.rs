use super::*;

use clap::CommandFactory;
use rstest::rstest;

fn parse(args: &[&str]) -> Result<Opt, clap::Error> {
    Opt::try_parse_from(std::iter::once("wmatch").chain(args.iter().copied()))
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[rstest]
#[case("recursive", Strategy::Recursive)]
#[case("memo", Strategy::Memo)]
#[case("dp", Strategy::Dp)]
#[case("row", Strategy::Row)]
#[case("greedy", Strategy::Greedy)]
fn test_solver(#[case] name: &str, #[case] expected: Strategy) {
    let opt = parse(&["--solver", name]).unwrap();
    assert_eq!(opt.solver, Some(expected));

    let opt = parse(&["-s", name]).unwrap();
    assert_eq!(opt.solver, Some(expected));
}

#[test]
fn test_unknown_solver() {
    assert!(parse(&["--solver", "nfa"]).is_err());
}

#[test]
fn test_all_conflicts_with_solver() {
    assert!(parse(&["--all", "--solver", "dp"]).is_err());
    assert!(parse(&["--all"]).unwrap().all);
}

#[test]
fn test_text_and_pattern() {
    let opt = parse(&["-t", "mississippi", "-p", "m*iss*pi"]).unwrap();
    assert_eq!(opt.text.as_deref(), Some("mississippi"));
    assert_eq!(opt.pattern.as_deref(), Some("m*iss*pi"));

    let opt = parse(&["--text", "-x-", "--pattern", "-?-"]).unwrap();
    assert_eq!(opt.text.as_deref(), Some("-x-"));
    assert_eq!(opt.pattern.as_deref(), Some("-?-"));
}

#[test]
fn test_color() {
    assert_eq!(parse(&["--color", "never"]).unwrap().color, ColorOption::Never);
    assert_eq!(parse(&["--color", "always"]).unwrap().color, ColorOption::Always);
    assert!(parse(&["--color", "sometimes"]).is_err());
}

#[test]
fn test_flags() {
    let opt = parse(&["--list-solvers", "--hide-warnings", "--config", "my.yaml"]).unwrap();
    assert!(opt.list_solvers);
    assert!(opt.hide_warnings);
    assert_eq!(opt.config, Some(PathBuf::from("my.yaml")));
}
